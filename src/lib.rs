//! A decoder for the "aezeed" cipher seed mnemonic format used by the
//! Lightning Network Daemon wallet.
//!
//! Given a 24-word mnemonic and an optional passphrase, [`decode`] recovers
//! the wallet's entropy, salt, internal version, and birthday. The hard part
//! is underneath: a from-scratch implementation of the AEZ v5 wide-block
//! authenticated cipher ([`aes_round`], [`state`], [`hash`], [`prf`],
//! [`tiny`], [`wideblock`]), wrapped in a BIP39-style word codec
//! ([`mnemonic`], [`wordlist`]) and a scrypt key derivation.

#[cfg(test)]
mod test;

pub mod aes_round;
pub mod block;
pub mod crc32c;
pub mod decrypt;
pub mod error;
pub mod hash;
pub mod mnemonic;
pub mod prf;
pub mod state;
pub mod tiny;
pub mod wideblock;
pub mod wordlist;

pub use {
    error::{Error, InvalidMnemonicReason},
    mnemonic::{decode, decode_with_key, validate, DecipheredCipherSeed},
    wordlist::WordList,
};
