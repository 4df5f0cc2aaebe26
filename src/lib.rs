//! Classical rotation ciphers with exact inverses.
//!
//! Two transforms over the 26-letter Latin alphabet, both preserving letter
//! case and leaving every non-letter untouched:
//!
//! - [`RotationEngine`]: fixed-rotation (Caesar) cipher keyed by one letter.
//! - [`KeyedRotationEngine`]: repeating-key (Vigenère) cipher.
//!
//! Neither is secure; both fall to frequency analysis. An unusable key is
//! not an error: it selects the identity transform. Callers that want to
//! reject such keys use [`validation`] first.
//!
//! # Architecture
//!
//! ```text
//! Rotation             (amount in [0, 25]; apply, complement, compose)
//!     ↑ one fixed rotation
//! RotationEngine       (Caesar: every letter by the same key)
//!     ↑ per-letter rotation from a cycling KeyCursor
//! KeyedRotationEngine  (Vigenère: key letters in turn, filler skipped)
//! ```
//!
//! # Examples
//!
//! ```
//! use rotcipher::{KeyedRotationEngine, RotationEngine};
//!
//! assert_eq!(RotationEngine::inverse('Z', "ZSSZBJZSNMBD"), "ATTACKATONCE");
//!
//! let ciphertext = KeyedRotationEngine::forward("I'm a key!", "Quality is not an act, it is a habit.");
//! assert_eq!(ciphertext, "Ygavmrg us xsr iz amx, gb us k lyjut.");
//! ```
//!
//! Transform a caller-owned buffer in place:
//!
//! ```
//! use rotcipher::RotationEngine;
//!
//! let mut buffer = *b"Hello, World!";
//! RotationEngine::forward_in_place('J', &mut buffer);
//! assert_eq!(&buffer, b"Qnuux, Fxaum!");
//! ```

#![deny(clippy::all)]

pub mod cli;
pub mod error;
pub mod keyed;
pub mod rotation;
pub mod validation;

pub use error::CipherError;
pub use keyed::{KeyCursor, KeyedRotationEngine};
pub use rotation::{Rotation, RotationEngine};
