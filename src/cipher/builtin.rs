//! Built-in alphabets.
//!
//! Every character here is either zero-width or a thin space, so an encoded
//! run is invisible (or nearly so) in most fonts.

/// Cipher used when neither the command line nor the config picks one.
pub const DEFAULT_CIPHER: &str = "Hex Whisper (base16)";

/// Built-in ciphers in menu order. Position in each list is the digit value.
pub const BUILTIN_CIPHERS: &[(&str, &[&str])] = &[
    (
        "Hex Whisper (base16)",
        &[
            "U+200B", "U+200C", "U+200D", "U+2060", "U+2009", "U+200A", "U+202F", "U+205F",
            "U+2061", "U+2062", "U+2063", "U+2064", "U+2002", "U+2004", "U+2005", "U+2006",
        ],
    ),
    (
        "Octal Poetry (base8)",
        &[
            "U+200B", "U+200C", "U+200D", "U+2060", "U+2009", "U+200A", "U+202F", "U+205F",
        ],
    ),
    (
        "Quaternary Verse (base4)",
        &["U+200B", "U+200C", "U+200D", "U+2060"],
    ),
    ("Binary Breath (base2)", &["U+200B", "U+200C"]),
];
