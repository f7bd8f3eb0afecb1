//! Decode failures. The crypto core never raises these itself -- it returns
//! `None` on a tag mismatch and lets [`crate::mnemonic::decode`] translate
//! that, and any structural problem found earlier, into one of these two
//! variants.

use thiserror::Error;

/// Why a mnemonic was rejected before any key derivation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMnemonicReason {
    /// The mnemonic did not have exactly 24 words.
    WordCount,
    /// A word was not found in the word list.
    UnknownWord,
    /// The envelope's version byte is not one this decoder supports.
    Version,
    /// The envelope's CRC32C did not match its contents.
    Checksum,
}

impl std::fmt::Display for InvalidMnemonicReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidMnemonicReason::WordCount => "mnemonic must have exactly 24 words",
            InvalidMnemonicReason::UnknownWord => "mnemonic contains a word not in the word list",
            InvalidMnemonicReason::Version => "unsupported cipher seed version",
            InvalidMnemonicReason::Checksum => "mnemonic checksum does not match",
        };
        f.write_str(msg)
    }
}

/// A decode failure: either the mnemonic itself is malformed
/// ([`InvalidMnemonic`](Error::InvalidMnemonic), checked before any scrypt
/// work is done), or it's well-formed but the passphrase was wrong
/// ([`InvalidPassphrase`](Error::InvalidPassphrase), the AEZ tag didn't
/// verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(InvalidMnemonicReason),
    #[error("invalid passphrase")]
    InvalidPassphrase,
}
