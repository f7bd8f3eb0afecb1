//! The decrypt driver: length-dispatch between the PRF-only path (used when
//! there is no message, only a tag) and the tiny/core cipher path, followed
//! by constant-time tag verification.

use crate::{
    block::Block,
    hash::aez_hash,
    prf::aez_prf,
    state::AezState,
    tiny::aez_tiny,
    wideblock::aez_core,
};

/// Decipher `data` in place of the wide-block dispatch: aez-tiny for inputs
/// shorter than a block, aez-core otherwise. A zero-length input is a no-op
/// (the PRF-only path in [`decrypt`] handles that case before ever reaching
/// here).
fn decipher(state: &AezState, delta: &Block, data: &[u8], dst: &mut [u8]) {
    if data.is_empty() {
        return;
    }
    if data.len() < 32 {
        aez_tiny(state, delta, data, 1, dst);
    } else {
        aez_core(state, delta, data, 1, dst);
    }
}

/// `decrypt(key, ad, tau, ciphertext)`: recover the plaintext AEZ
/// authenticated, or return `None` on a tag mismatch.
///
/// `tau` is the tag length in bytes. When `ciphertext.len() == tau` there is
/// no message at all -- the whole ciphertext is the tag, verified directly
/// against an AEZ-PRF keystream. Otherwise the ciphertext is deciphered and
/// the last `tau` bytes of the result, which should be all zero, are the
/// tag. Either way the comparison is a mask-OR reduction over every byte, so
/// no branch depends on which byte (if any) first differs.
pub fn decrypt(key: &[u8], ad: &[&[u8]], tau: usize, ciphertext: &[u8]) -> Option<Vec<u8>> {
    let mut state = AezState::new();
    state.init(key);
    let delta = aez_hash(&state, &[], ad, (tau * 8) as u32);

    let result = if ciphertext.len() == tau {
        let mut stream = vec![0u8; tau];
        aez_prf(&state, &delta, &mut stream);
        let mut mismatch = 0u8;
        for (a, b) in stream.iter().zip(ciphertext.iter()) {
            mismatch |= a ^ b;
        }
        if mismatch != 0 {
            None
        } else {
            Some(Vec::new())
        }
    } else if ciphertext.len() < tau {
        // Shorter than the tag itself: not a valid ciphertext for any
        // message, regardless of key. Reject before the subtraction below
        // would underflow.
        None
    } else {
        let mut x = vec![0u8; ciphertext.len()];
        decipher(&state, &delta, ciphertext, &mut x);
        let tag_start = ciphertext.len() - tau;
        let mut mismatch = 0u8;
        for &b in &x[tag_start..] {
            mismatch |= b;
        }
        if mismatch != 0 {
            None
        } else {
            x.truncate(tag_start);
            Some(x)
        }
    };

    state.reset();
    result
}
