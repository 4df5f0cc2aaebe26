//! Caller-side key checks.
//!
//! The engines accept any key and fall back to the identity transform when it
//! is unusable. Callers that would rather reject such keys run these checks
//! first.

use crate::error::CipherError;
use crate::rotation::Rotation;

/// Extracts the single character of a fixed-rotation key argument.
///
/// # Errors
/// Returns [`CipherError::KeyNotSingleLetter`] unless `key` holds exactly one
/// character.
pub fn single_key_char(key: &str) -> Result<char, CipherError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CipherError::KeyNotSingleLetter),
    }
}

/// Checks that a fixed-rotation key names a rotation.
///
/// # Errors
/// Returns [`CipherError::NonAlphabeticKey`] if `key` is not an ASCII letter.
///
/// # Examples
///
/// ```
/// use rotcipher::validation::validate_rotation_key;
///
/// assert_eq!(validate_rotation_key('c').unwrap().amount(), 2);
/// assert!(validate_rotation_key('3').is_err());
/// ```
pub fn validate_rotation_key(key: char) -> Result<Rotation, CipherError> {
    Rotation::from_key(key).ok_or(CipherError::NonAlphabeticKey(key))
}

/// Checks that a repeating key has at least one letter to rotate by.
///
/// # Errors
/// - [`CipherError::EmptyKey`] if `key` is empty.
/// - [`CipherError::KeyWithoutLetters`] if `key` has no ASCII letter.
pub fn validate_key(key: &str) -> Result<(), CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    if !key.bytes().any(|b| b.is_ascii_alphabetic()) {
        return Err(CipherError::KeyWithoutLetters);
    }
    Ok(())
}
