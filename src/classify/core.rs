//! Pure code-point classification: separators, word constituents, vowel classes.
//!
//! The covered alphabet is Latin letters, digits, apostrophe, cedilla,
//! underscore, and the Latin-1 accented vowels. Everything outside it
//! classifies as "not a word character" / "not a vowel".

/// Number of vowel classes tracked per word (a, e, i, o, u, y).
pub const VOWEL_CLASSES: usize = 6;

/// A vowel class. Accented forms fold into A/E/I/O/U; Y matches only bare y/Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
    Y,
}

impl Vowel {
    /// Index into a `[T; VOWEL_CLASSES]` counter array, report order A..Y.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vowel::A => 0,
            Vowel::E => 1,
            Vowel::I => 2,
            Vowel::O => 3,
            Vowel::U => 4,
            Vowel::Y => 5,
        }
    }

    /// Report labels in the fixed output order.
    pub const LABELS: [char; VOWEL_CLASSES] = ['A', 'E', 'I', 'O', 'U', 'Y'];
}

/// Separator lookup table over the byte range. Separators are the only legal
/// chunk-split points: space, tab, newline, carriage return — all single-byte
/// ASCII, so a split can never land inside a multi-byte sequence.
const fn make_sep_table() -> [bool; 256] {
    let mut t = [false; 256];
    t[0x09] = true; // \t  horizontal tab
    t[0x0A] = true; // \n  newline
    t[0x0D] = true; // \r  carriage return
    t[0x20] = true; //     space
    t
}

/// Precomputed separator lookup: `SEP_TABLE[byte]` is true for separator bytes.
const SEP_TABLE: [bool; 256] = make_sep_table();

/// True if the byte is a word separator (space, tab, newline, carriage return).
#[inline]
pub fn is_separator_byte(b: u8) -> bool {
    SEP_TABLE[b as usize]
}

/// True if the code point is a word separator.
#[inline]
pub fn is_separator(cp: u32) -> bool {
    cp < 256 && SEP_TABLE[cp as usize]
}

/// Fold a code point for classification: curly single quotes (U+2018/U+2019)
/// normalize to the apostrophe, and the Latin-1 lowercase accented range
/// 0xE0..=0xFF upper-cases by a fixed -0x20 offset (à -> À, ç -> Ç, ...).
#[inline]
fn fold(cp: u32) -> u32 {
    match cp {
        0x2018 | 0x2019 => 0x27,
        0xE0..=0xFF => cp - 0x20,
        _ => cp,
    }
}

/// True if the code point is a word constituent.
///
/// `in_word` matters only for the apostrophe: an apostrophe continues a word
/// but never starts one (`"' hi"` is one word, `"don't"` is one word).
pub fn is_word_char(cp: u32, in_word: bool) -> bool {
    let c = fold(cp);
    if c == 0x27 {
        return in_word;
    }
    matches!(c,
        0x41..=0x5A | 0x61..=0x7A      // A-Z a-z
        | 0x30..=0x39                  // 0-9
        | 0x5F                         // underscore
        | 0xC7                         // C cedilla
        | 0xC0..=0xC3                  // À Á Â Ã
        | 0xC8..=0xCA                  // È É Ê
        | 0xCC..=0xCD                  // Ì Í
        | 0xD2..=0xD5                  // Ò Ó Ô Õ
        | 0xD9..=0xDA                  // Ù Ú
    )
}

/// Vowel class of a code point, or None.
/// Accented Latin-1 vowels credit their base class; y/Y has no accented forms.
pub fn vowel_of(cp: u32) -> Option<Vowel> {
    match fold(cp) {
        0x41 | 0x61 | 0xC0..=0xC3 => Some(Vowel::A),
        0x45 | 0x65 | 0xC8..=0xCA => Some(Vowel::E),
        0x49 | 0x69 | 0xCC..=0xCD => Some(Vowel::I),
        0x4F | 0x6F | 0xD2..=0xD5 => Some(Vowel::O),
        0x55 | 0x75 | 0xD9..=0xDA => Some(Vowel::U),
        0x59 | 0x79 => Some(Vowel::Y),
        _ => None,
    }
}
