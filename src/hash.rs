//! AEZ-hash: a tweakable, almost-XOR-universal hash of a nonce and an
//! ordered list of associated-data strings.
//!
//! The hash is the foundation both the cipher cores and
//! [`crate::prf::aez_prf`] build on: the `delta` it produces ties a
//! ciphertext to exactly the AD it was authenticated with, and to no other
//! AD or nonce. An absent nonce/AD string is represented as an empty slice,
//! not a distinct variant -- the underlying construction treats "no nonce"
//! and "a zero-length nonce" identically, and so does this implementation.

use crate::{
    block::{double, one_zero_pad, xor16, Block, BLOCK_SIZE},
    state::AezState,
};

/// Walk `data` in 16-byte blocks, folding `AES4(tweak_j, i, L[idx], block)`
/// into `sum` for each full block, doubling `i` every 8 blocks (starting
/// from `I1`), and finally folding in a one-zero-padded partial block. If
/// `data` is empty outright, the single padded all-zero block is folded in
/// instead -- the only case where a full block is never emitted but a
/// padding block still is.
fn absorb(state: &AezState, tweak_j: &Block, data: &[u8], sum: &mut Block) {
    let mut i_cur = *state.i(1);
    let mut idx = 1usize;
    let mut offset = 0usize;
    let mut remaining = data.len();

    while remaining >= BLOCK_SIZE {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(&data[offset..offset + BLOCK_SIZE]);
        let out = state.aes().aes4(tweak_j, &i_cur, state.l(idx % 8), &block);
        *sum = xor16(sum, &out);
        offset += BLOCK_SIZE;
        remaining -= BLOCK_SIZE;
        idx += 1;
        if idx % 8 == 0 {
            double(&mut i_cur);
        }
    }

    if remaining > 0 || data.is_empty() {
        let padded = one_zero_pad(&data[offset..], remaining);
        let out = state.aes().aes4(tweak_j, state.i(0), state.l(0), &padded);
        *sum = xor16(sum, &out);
    }
}

/// Compute `aez_hash(nonce, ad, tau)`.
///
/// `tau` is in bits, not bytes, per the AEZ specification: it is folded into
/// the very first AES4 call (`[0^12 || tau as big-endian u32]`) and nowhere
/// else, so hashes at different tag lengths never collide even over
/// identical nonce/AD input. The order of `ad` is significant -- each string
/// is absorbed under a distinct tweak derived as `mult(5 + k, J0)`, so
/// swapping two AD strings changes the result.
pub fn aez_hash(state: &AezState, nonce: &[u8], ad: &[&[u8]], tau: u32) -> Block {
    let mut init_block = [0u8; BLOCK_SIZE];
    init_block[12..16].copy_from_slice(&tau.to_be_bytes());
    let j01 = xor16(state.j(0), state.j(1));
    let mut sum = state.aes().aes4(&j01, state.i(1), state.l(1), &init_block);

    absorb(state, state.j(2), nonce, &mut sum);

    for (k, piece) in ad.iter().enumerate() {
        let jk = state.j0_mult(5 + k as u32);
        absorb(state, &jk, piece, &mut sum);
    }

    sum
}
