mod core;


pub use self::core::{VOWEL_CLASSES, Vowel, is_separator, is_separator_byte, is_word_char, vowel_of};
