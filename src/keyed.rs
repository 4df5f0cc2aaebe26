//! KeyedRotationEngine: repeating-key rotation (Vigenère cipher).
//!
//! Each ASCII letter of the text is rotated by the next letter of the key,
//! cycling through the key as often as needed. Two streams advance
//! independently:
//!
//! ```text
//! text:  G O N D O R   C A L L S ...     non-letters are skipped, cursor stays
//! key:   A R A G O N   A R A G O ...     non-letters are filler, cursor skips
//! ```
//!
//! A key without any ASCII letter selects the identity transform.

use tracing::debug;

use crate::rotation::{Direction, Rotation};

/// Cursor over the letters of a key.
///
/// Starts at position 0. Each call to [`next_rotation`](Self::next_rotation)
/// searches forward (wrapping) for the next ASCII letter, yields its
/// rotation, and leaves the cursor one past it. The search probes at most
/// `key.len()` positions, so a key without letters yields `None` instead of
/// spinning.
///
/// # Examples
///
/// ```
/// use rotcipher::{KeyCursor, Rotation};
///
/// let mut cursor = KeyCursor::new("a-c");
/// assert_eq!(cursor.next_rotation(), Rotation::from_key('a'));
/// assert_eq!(cursor.next_rotation(), Rotation::from_key('c'));
/// assert_eq!(cursor.next_rotation(), Rotation::from_key('a'));
///
/// assert_eq!(KeyCursor::new("?!").next_rotation(), None);
/// ```
#[derive(Debug, Clone)]
pub struct KeyCursor<'k> {
    key: &'k [u8],
    position: usize,
}

impl<'k> KeyCursor<'k> {
    /// Creates a cursor at the start of `key`.
    pub fn new(key: &'k str) -> Self {
        Self::from_bytes(key.as_bytes())
    }

    /// Creates a cursor over a raw byte key.
    pub fn from_bytes(key: &'k [u8]) -> Self {
        KeyCursor { key, position: 0 }
    }

    /// Current position in the key, in `[0, key.len())` (0 for an empty key).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the key holds at least one ASCII letter.
    pub fn is_valid(&self) -> bool {
        self.key.iter().any(u8::is_ascii_alphabetic)
    }

    /// Yields the rotation of the next key letter and advances past it.
    pub fn next_rotation(&mut self) -> Option<Rotation> {
        let len = self.key.len();
        for _ in 0..len {
            let candidate = self.key[self.position];
            self.position = (self.position + 1) % len;
            if let Some(rotation) = Rotation::from_key(char::from(candidate)) {
                return Some(rotation);
            }
        }
        None
    }
}

/// Repeating-key rotation cipher.
///
/// # Examples
///
/// ```
/// use rotcipher::KeyedRotationEngine;
///
/// let ciphertext = KeyedRotationEngine::forward("ARAGON", "GONDOR CALLS FOR AID");
/// assert_eq!(ciphertext, "GFNJCE CRLRG SOI AOR");
/// assert_eq!(
///     KeyedRotationEngine::inverse("ARAGON", &ciphertext),
///     "GONDOR CALLS FOR AID"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedRotationEngine;

impl KeyedRotationEngine {
    /// Enciphers every ASCII letter of `text` in place.
    pub fn forward_in_place(key: &str, text: &mut [u8]) {
        Self::rotate_in_place(key, text, Direction::Forward);
    }

    /// Undoes [`forward_in_place`](Self::forward_in_place) with the same key.
    pub fn inverse_in_place(key: &str, text: &mut [u8]) {
        Self::rotate_in_place(key, text, Direction::Inverse);
    }

    /// Returns `text` enciphered with the repeating `key`.
    pub fn forward(key: &str, text: &str) -> String {
        Self::rotate_str(key, text, Direction::Forward)
    }

    /// Undoes [`forward`](Self::forward) with the same key.
    pub fn inverse(key: &str, text: &str) -> String {
        Self::rotate_str(key, text, Direction::Inverse)
    }

    fn rotate_in_place(key: &str, text: &mut [u8], direction: Direction) {
        let Some(mut cursor) = Self::cursor(key) else {
            return;
        };
        for byte in text.iter_mut().filter(|b| b.is_ascii_alphabetic()) {
            if let Some(rotation) = cursor.next_rotation() {
                *byte = direction.orient(rotation).apply_byte(*byte);
            }
        }
    }

    fn rotate_str(key: &str, text: &str, direction: Direction) -> String {
        let Some(mut cursor) = Self::cursor(key) else {
            return text.to_owned();
        };
        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                match cursor.next_rotation() {
                    Some(rotation) => direction.orient(rotation).apply_char(c),
                    None => c,
                }
            })
            .collect()
    }

    /// Fresh cursor for one call, or `None` when the key has no letters.
    fn cursor(key: &str) -> Option<KeyCursor<'_>> {
        let cursor = KeyCursor::new(key);
        if cursor.is_valid() {
            Some(cursor)
        } else {
            debug!(key_len = key.len(), "key has no letters; identity transform");
            None
        }
    }
}
