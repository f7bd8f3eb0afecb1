//! The BIP39-style mnemonic codec and the top-level decode pipeline: word
//! packing, CRC32C validation, scrypt key derivation, and AD framing around
//! the AEZ decrypt driver in [`crate::decrypt`].

use zeroize::Zeroize;

use crate::{
    crc32c::crc32c,
    decrypt::decrypt,
    error::{Error, InvalidMnemonicReason},
    wordlist::WordList,
};

/// Size of the packed mnemonic envelope: 24 words at 11 bits each.
pub const ENCIPHERED_SIZE: usize = 33;
/// Size of the plaintext recovered after a successful decrypt.
pub const DECIPHERED_SIZE: usize = 19;
/// Size of the salt embedded in the envelope.
pub const SALT_SIZE: usize = 5;
/// AEZ tag length, in bytes, for this format.
pub const TAU: usize = 4;
/// Bits packed per mnemonic word.
const BITS_PER_WORD: u32 = 11;
/// The only cipher seed version this decoder understands.
pub const CIPHER_SEED_VERSION: u8 = 0;
/// Unconditionally prepended to the user passphrase before key derivation.
const DEFAULT_PASSPHRASE: &str = "aezeed";

/// The recovered contents of a cipher seed: wallet entropy, the salt used to
/// derive its key, and the two version-like fields carried alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecipheredCipherSeed {
    pub entropy: [u8; 16],
    pub salt: [u8; SALT_SIZE],
    pub internal_version: u8,
    pub birthday: u16,
}

/// Pack 24 mnemonic words into the 33-byte envelope, at 11 bits per word,
/// MSB-first.
///
/// Word count is checked before any word is looked up, so a 23- or 25-word
/// mnemonic always fails with [`InvalidMnemonicReason::WordCount`] rather
/// than an unknown-word error from indexing past the end of the slice.
pub fn mnemonic_to_bytes(words: &[&str], list: &WordList) -> Result<[u8; ENCIPHERED_SIZE], Error> {
    if words.len() != 24 {
        return Err(Error::InvalidMnemonic(InvalidMnemonicReason::WordCount));
    }

    let mut out = [0u8; ENCIPHERED_SIZE];
    let mut bits: u64 = 0;
    let mut bit_len: u32 = 0;
    let mut pos = 0usize;

    for word in words {
        let idx = list
            .index_of(word)
            .ok_or(Error::InvalidMnemonic(InvalidMnemonicReason::UnknownWord))?;
        bits = (bits << BITS_PER_WORD) | idx as u64;
        bit_len += BITS_PER_WORD;
        while bit_len >= 8 {
            bit_len -= 8;
            out[pos] = ((bits >> bit_len) & 0xFF) as u8;
            bits &= (1u64 << bit_len) - 1;
            pos += 1;
        }
    }

    Ok(out)
}

/// Pack `words` and check the version byte and CRC32C, without attempting
/// any key derivation. Returns `false` for any structural problem,
/// including a malformed word count or an unknown word.
pub fn validate(words: &[&str], list: &WordList) -> bool {
    let envelope = match mnemonic_to_bytes(words, list) {
        Ok(e) => e,
        Err(_) => return false,
    };
    if envelope[0] != CIPHER_SEED_VERSION {
        return false;
    }
    let expected = u32::from_be_bytes(envelope[29..33].try_into().unwrap());
    expected == crc32c(&envelope[..29])
}

/// Derive the AEZ key from `passphrase` and `salt` via scrypt, with the
/// parameters fixed by the format: N=32768, r=8, p=1, dkLen=32.
pub(crate) fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; 32] {
    let mut password = String::with_capacity(DEFAULT_PASSPHRASE.len() + passphrase.len());
    password.push_str(DEFAULT_PASSPHRASE);
    password.push_str(passphrase);

    let params = scrypt::Params::new(15, 8, 1, 32).expect("fixed scrypt parameters are valid");
    let mut key = [0u8; 32];
    scrypt::scrypt(password.as_bytes(), salt, &params, &mut key)
        .expect("a 32-byte output always fits scrypt's length limit");
    password.zeroize();
    key
}

/// Decode a 24-word mnemonic and passphrase into the recovered cipher seed.
///
/// Checks word count, version, and CRC32C before doing any scrypt work
/// (cheap structural failures never pay for an expensive KDF run), then
/// derives the key and hands off to [`decode_with_key`].
pub fn decode(words: &[&str], passphrase: &str, list: &WordList) -> Result<DecipheredCipherSeed, Error> {
    let envelope = mnemonic_to_bytes(words, list)?;

    if envelope[0] != CIPHER_SEED_VERSION {
        return Err(Error::InvalidMnemonic(InvalidMnemonicReason::Version));
    }
    let checksum = u32::from_be_bytes(envelope[29..33].try_into().unwrap());
    if checksum != crc32c(&envelope[..29]) {
        return Err(Error::InvalidMnemonic(InvalidMnemonicReason::Checksum));
    }

    let salt: [u8; SALT_SIZE] = envelope[24..29].try_into().unwrap();
    let ciphertext = &envelope[1..24];
    let mut key = derive_key(passphrase, &salt);
    let result = decode_with_key(&key, envelope[0], &salt, ciphertext);
    key.zeroize();
    result
}

/// Decode the ciphertext directly from an already-derived 32-byte key,
/// skipping mnemonic packing and scrypt. Useful for testing the AEZ layer
/// in isolation, or for a caller that derives the key out-of-band.
pub fn decode_with_key(
    key: &[u8],
    version: u8,
    salt: &[u8; SALT_SIZE],
    ciphertext: &[u8],
) -> Result<DecipheredCipherSeed, Error> {
    let mut ad = Vec::with_capacity(1 + SALT_SIZE);
    ad.push(version);
    ad.extend_from_slice(salt);

    let mut plaintext = decrypt(key, &[&ad], TAU, ciphertext).ok_or(Error::InvalidPassphrase)?;
    if plaintext.len() != DECIPHERED_SIZE {
        plaintext.zeroize();
        return Err(Error::InvalidPassphrase);
    }

    let seed = DecipheredCipherSeed {
        internal_version: plaintext[0],
        birthday: u16::from_be_bytes([plaintext[1], plaintext[2]]),
        entropy: plaintext[3..19].try_into().unwrap(),
        salt: *salt,
    };
    plaintext.zeroize();
    Ok(seed)
}
