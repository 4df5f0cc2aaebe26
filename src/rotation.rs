//! RotationEngine: fixed single-letter rotation (Caesar cipher).
//!
//! Every ASCII letter of the text is shifted by the same number of alphabet
//! positions, wrapping at `Z`/`z`. Letter case is preserved and every other
//! byte or character passes through untouched.
//!
//! A rotation is named by a key letter: `A`/`a` shifts by 0, `B`/`b` by 1,
//! up to `Z`/`z` by 25. A key that is not an ASCII letter selects the
//! identity transform rather than an error.

use tracing::{debug, trace};

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: u32 = 26;

/// A rotation amount in `[0, 25]`.
///
/// The per-character primitive shared by [`RotationEngine`] and
/// [`KeyedRotationEngine`](crate::keyed::KeyedRotationEngine).
///
/// # Examples
///
/// ```
/// use rotcipher::Rotation;
///
/// let rotation = Rotation::from_key('d').unwrap();
/// assert_eq!(rotation.amount(), 3);
/// assert_eq!(rotation.apply_char('x'), 'a');
/// assert_eq!(rotation.complement().apply_char('a'), 'x');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// The rotation by zero positions, named by key `A`.
    pub const IDENTITY: Rotation = Rotation(0);

    /// Creates a rotation from an arbitrary amount, reduced modulo 26.
    pub fn new(amount: u32) -> Self {
        Rotation((amount % ALPHABET_LEN) as u8)
    }

    /// Derives the rotation named by a key letter.
    ///
    /// The amount is the letter's offset from the start of its own case's
    /// alphabet, so `'C'` and `'c'` both give 2.
    ///
    /// # Returns
    /// `None` if `key` is not an ASCII letter.
    pub fn from_key(key: char) -> Option<Self> {
        if !key.is_ascii_alphabetic() {
            return None;
        }
        let offset = u32::from(key.to_ascii_uppercase()) - u32::from(b'A');
        Some(Self::new(offset))
    }

    /// Returns the rotation amount in `[0, 25]`.
    pub fn amount(self) -> u8 {
        self.0
    }

    /// Returns the uppercase key letter naming this rotation.
    pub fn key(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Returns the rotation that undoes this one: `(26 - r) mod 26`.
    pub fn complement(self) -> Self {
        Self::new(ALPHABET_LEN - u32::from(self.0))
    }

    /// Composes two rotations: applying `self` then `other` equals applying
    /// `self.then(other)` once.
    pub fn then(self, other: Rotation) -> Self {
        Self::new(u32::from(self.0) + u32::from(other.0))
    }

    /// Rotates a single byte if it is an ASCII letter.
    ///
    /// Arithmetic runs in `u32` and is reduced modulo 26 before being
    /// re-based onto `b'A'` or `b'a'`, so no intermediate value can
    /// overflow a `u8`.
    pub fn apply_byte(self, byte: u8) -> u8 {
        let base = match byte {
            b'A'..=b'Z' => b'A',
            b'a'..=b'z' => b'a',
            _ => return byte,
        };
        let offset = (u32::from(byte - base) + u32::from(self.0)) % ALPHABET_LEN;
        base + offset as u8
    }

    /// Rotates a single character if it is an ASCII letter.
    pub fn apply_char(self, c: char) -> char {
        match u8::try_from(c) {
            Ok(byte) if byte.is_ascii_alphabetic() => char::from(self.apply_byte(byte)),
            _ => c,
        }
    }
}

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Turns the rotation named by the key into the one actually applied.
    pub(crate) fn orient(self, rotation: Rotation) -> Rotation {
        match self {
            Direction::Forward => rotation,
            Direction::Inverse => rotation.complement(),
        }
    }
}

/// Fixed-rotation cipher.
///
/// Stateless: every operation borrows its key and text for the duration of
/// the call only.
///
/// # Examples
///
/// ```
/// use rotcipher::RotationEngine;
///
/// let ciphertext = RotationEngine::forward('J', "Hello, World!");
/// assert_eq!(ciphertext, "Qnuux, Fxaum!");
/// assert_eq!(RotationEngine::inverse('J', &ciphertext), "Hello, World!");
///
/// // Not a letter: identity.
/// assert_eq!(RotationEngine::forward('.', "unchanged"), "unchanged");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationEngine;

impl RotationEngine {
    /// Rotates every ASCII letter of `text` forward by `key`, in place.
    pub fn forward_in_place(key: char, text: &mut [u8]) {
        Self::rotate_in_place(key, text, Direction::Forward);
    }

    /// Undoes [`forward_in_place`](Self::forward_in_place) with the same key.
    pub fn inverse_in_place(key: char, text: &mut [u8]) {
        Self::rotate_in_place(key, text, Direction::Inverse);
    }

    /// Returns `text` with every ASCII letter rotated forward by `key`.
    pub fn forward(key: char, text: &str) -> String {
        Self::rotate_str(key, text, Direction::Forward)
    }

    /// Undoes [`forward`](Self::forward) with the same key.
    pub fn inverse(key: char, text: &str) -> String {
        Self::rotate_str(key, text, Direction::Inverse)
    }

    fn rotate_in_place(key: char, text: &mut [u8], direction: Direction) {
        let Some(rotation) = Self::resolve(key, direction) else {
            return;
        };
        for byte in text.iter_mut() {
            *byte = rotation.apply_byte(*byte);
        }
    }

    fn rotate_str(key: char, text: &str, direction: Direction) -> String {
        match Self::resolve(key, direction) {
            Some(rotation) => text.chars().map(|c| rotation.apply_char(c)).collect(),
            None => text.to_owned(),
        }
    }

    /// Resolves the rotation to apply, or `None` for the identity transform.
    fn resolve(key: char, direction: Direction) -> Option<Rotation> {
        match Rotation::from_key(key) {
            Some(rotation) => {
                let rotation = direction.orient(rotation);
                trace!(?key, ?direction, amount = rotation.amount(), "resolved rotation");
                Some(rotation)
            }
            None => {
                debug!(?key, "rotation key is not a letter; identity transform");
                None
            }
        }
    }
}
