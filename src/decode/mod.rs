mod core;

#[cfg(test)]
mod tests;

pub use self::core::{DecodeError, Utf8Decoder};
