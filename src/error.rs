//! Error types for the rotcipher library.
//!
//! The engines themselves never fail: an unusable key degrades to the
//! identity transform. These errors come from the caller-side key checks in
//! [`validation`](crate::validation) and from the command-line front end.

use thiserror::Error;

/// Errors produced by key validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A fixed-rotation key was not exactly one character long.
    #[error("Key should be a single letter to rotate by")]
    KeyNotSingleLetter,
    /// A fixed-rotation key character is not an ASCII letter.
    #[error("Key character {0:?} is not an ASCII letter")]
    NonAlphabeticKey(char),
    /// A repeating key has no ASCII letter to rotate by.
    #[error("Key must contain at least one ASCII letter")]
    KeyWithoutLetters,
    /// A repeating key is empty.
    #[error("Key must not be empty")]
    EmptyKey,
}
