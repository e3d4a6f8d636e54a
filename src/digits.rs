//! Fixed-width base-N digits for single bytes.

/// Smallest width `w` such that `base^w >= 256`.
///
/// Equal to `ceil(8 / log2(base))`, computed without floating point so
/// non-power-of-two bases cannot round the wrong way. `base` must be >= 2.
pub fn digits_per_byte(base: u32) -> usize {
    debug_assert!(base >= 2, "base must be at least 2, got {}", base);

    let mut width = 1;
    let mut capacity = base as u64;
    while capacity < 256 {
        capacity *= base as u64;
        width += 1;
    }
    width
}

/// Splits `byte` into exactly `width` digits, most significant first.
///
/// Missing high digits are zero. `width` must be large enough for the base.
pub fn to_digits(byte: u8, base: u32, width: usize) -> Vec<u32> {
    let mut digits = vec![0; width];
    let mut n = byte as u32;

    for slot in digits.iter_mut().rev() {
        if n == 0 {
            break;
        }
        *slot = n % base;
        n /= base;
    }

    digits
}

/// Folds digits (most significant first) back into a number.
///
/// No range check: callers decide what to do with values above 255.
pub fn from_digits(digits: &[u32], base: u32) -> u32 {
    digits
        .iter()
        .fold(0u32, |value, &digit| value.wrapping_mul(base).wrapping_add(digit))
}
