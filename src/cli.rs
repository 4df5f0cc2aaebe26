//! Command-line front end.
//!
//! Parses arguments with `clap`, checks the key the way the command line
//! expects, and dispatches to the engines. Output is returned to `main` for
//! printing; nothing here touches stdout.

use clap::{ArgGroup, Parser};
use tracing::{debug, warn};

use crate::error::CipherError;
use crate::keyed::KeyedRotationEngine;
use crate::rotation::RotationEngine;
use crate::validation::{single_key_char, validate_key, validate_rotation_key};

const AFTER_HELP: &str = "\
NOTE: Any non-alphabetic characters in the plaintext, ciphertext or key are ignored.
      This is for readability; for real use strip all non-alphabetic characters
      (including spaces) and use only one case.

Example usages:
    rotcipher --caesar J \"HELLOWORLD\"
    rotcipher --decipher -c J \"QNUUX FXAUM\"
    rotcipher --vigenere ARAGON \"Gondor calls for aid!\"
    rotcipher --decipher -v \"Legolas said\" \"Elkm'ce lskqqr xns sottibv es Ogpnysrl\"";

#[derive(Parser, Debug)]
#[command(
    name = "rotcipher",
    version,
    about = "Caesar and Vigenère rotation ciphers",
    after_help = AFTER_HELP
)]
#[command(group(
    ArgGroup::new("cipher")
        .required(true)
        .args(["caesar", "vigenere"])
))]
pub struct Cli {
    /// Decipher the ciphertext
    #[arg(short, long)]
    pub decipher: bool,
    /// Caesar cipher; provide the key as a *single* letter to rotate by
    #[arg(short, long, value_name = "KEY")]
    pub caesar: Option<String>,
    /// Vigenère cipher with a repeating key
    #[arg(short, long, value_name = "KEY")]
    pub vigenere: Option<String>,
    /// Log debug events to stderr
    #[arg(long)]
    pub verbose: bool,
    /// Plaintext to encipher, or ciphertext with --decipher
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

/// The cipher selected on the command line, with its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Caesar(&'a str),
    Vigenere(&'a str),
}

impl Cli {
    /// Returns the selected cipher. `clap` guarantees exactly one is set;
    /// `caesar` wins if a caller builds a `Cli` by hand with both.
    pub fn selection(&self) -> Selection<'_> {
        match (&self.caesar, &self.vigenere) {
            (Some(key), _) => Selection::Caesar(key),
            (None, Some(key)) => Selection::Vigenere(key),
            (None, None) => Selection::Vigenere(""),
        }
    }
}

/// Runs the selected cipher over the text and returns the result.
///
/// # Errors
/// Returns [`CipherError::KeyNotSingleLetter`] if `--caesar` was given a key
/// that is not a single character. Keys without letters are not errors:
/// they warn and leave the text unchanged.
pub fn run(cli: &Cli) -> Result<String, CipherError> {
    let text = cli.text.as_str();
    let output = match cli.selection() {
        Selection::Caesar(key) => {
            let key = single_key_char(key)?;
            if let Err(err) = validate_rotation_key(key) {
                warn!(%err, "text passes through unchanged");
            }
            debug!(decipher = cli.decipher, len = text.len(), "running Caesar cipher");
            if cli.decipher {
                RotationEngine::inverse(key, text)
            } else {
                RotationEngine::forward(key, text)
            }
        }
        Selection::Vigenere(key) => {
            if let Err(err) = validate_key(key) {
                warn!(%err, "text passes through unchanged");
            }
            debug!(decipher = cli.decipher, len = text.len(), "running Vigenère cipher");
            if cli.decipher {
                KeyedRotationEngine::inverse(key, text)
            } else {
                KeyedRotationEngine::forward(key, text)
            }
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rotcipher").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_caesar_forward() {
        let cli = parse(&["--caesar", "J", "HELLOWORLD"]);
        assert_eq!(cli.selection(), Selection::Caesar("J"));
        assert_eq!(run(&cli).unwrap(), "QNUUXFXAUM");
    }

    #[test]
    fn test_caesar_decipher_short_flags() {
        let cli = parse(&["-d", "-c", "J", "QNUUX FXAUM"]);
        assert!(cli.decipher);
        assert_eq!(run(&cli).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_caesar_rejects_long_key() {
        let cli = parse(&["--caesar", "JK", "HELLO"]);
        assert_eq!(run(&cli), Err(CipherError::KeyNotSingleLetter));
    }

    #[test]
    fn test_caesar_non_letter_key_is_identity() {
        let cli = parse(&["-c", ".", "I SHOULD NOT CHANGE"]);
        assert_eq!(run(&cli).unwrap(), "I SHOULD NOT CHANGE");
    }

    #[test]
    fn test_vigenere_forward() {
        let cli = parse(&["--vigenere", "ARAGON", "Gondor calls for aid!"]);
        assert_eq!(run(&cli).unwrap(), "Gfnjce crlrg soi aor!");
    }

    #[test]
    fn test_vigenere_decipher_roundtrip() {
        let ciphertext = KeyedRotationEngine::forward("Legolas said", "Gimli's beard");
        let cli = parse(&["--decipher", "-v", "Legolas said", ciphertext.as_str()]);
        assert_eq!(run(&cli).unwrap(), "Gimli's beard");
    }

    #[test]
    fn test_text_after_double_dash() {
        let cli = parse(&["-c", "B", "--", "-abc-"]);
        assert_eq!(run(&cli).unwrap(), "-bcd-");
    }

    #[test]
    fn test_cipher_is_required() {
        let result = Cli::try_parse_from(["rotcipher", "HELLO"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ciphers_are_exclusive() {
        let result = Cli::try_parse_from(["rotcipher", "-c", "A", "-v", "B", "HELLO"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_text_is_required() {
        let result = Cli::try_parse_from(["rotcipher", "-c", "A"]);
        assert!(result.is_err());
    }
}
