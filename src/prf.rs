//! AEZ-PRF: a counter-mode stream keyed by `delta`, used only to produce an
//! integrity tag when the plaintext is empty (so there is nothing for the
//! cipher cores to encipher -- the whole ciphertext *is* the tag).

use crate::{
    block::{xor16, Block, BLOCK_SIZE},
    state::AezState,
};

/// Increment a 16-byte big-endian counter by one, propagating carry from the
/// low byte upward.
fn increment(ctr: &mut Block) {
    for byte in ctr.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// Fill `out` with `tau = out.len()` bytes of AEZ-PRF output: each block is
/// `AES10(L3, delta ^ ctr)`, with `ctr` starting at zero and incrementing
/// once per block. A final partial block is truncated to what's left of
/// `out`.
pub fn aez_prf(state: &AezState, delta: &Block, out: &mut [u8]) {
    let mut ctr = [0u8; BLOCK_SIZE];
    let mut offset = 0;
    while offset + BLOCK_SIZE <= out.len() {
        let xored = xor16(delta, &ctr);
        let block = state.aes().aes10(state.l(3), &xored);
        out[offset..offset + BLOCK_SIZE].copy_from_slice(&block);
        increment(&mut ctr);
        offset += BLOCK_SIZE;
    }
    let remaining = out.len() - offset;
    if remaining > 0 {
        let xored = xor16(delta, &ctr);
        let block = state.aes().aes10(state.l(3), &xored);
        out[offset..].copy_from_slice(&block[..remaining]);
    }
}
