//! aez-core: the two-pass wide-block cipher AEZ uses for messages of 32
//! bytes or more, where aez-tiny's Feistel network would need too many
//! rounds to mix the whole message.
//!
//! The message is split into three regions: zero or more leading 32-byte
//! pairs ("initial"), an optional 1..31-byte remainder ("fragment") sitting
//! just before the final pair, and a final 32-byte pair. Pass 1 folds every
//! initial pair into an accumulator `X`, the fragment folds into `X` too,
//! the final pair is enciphered using `X` and the nonce-derived `delta`, and
//! then pass 2 rewrites every initial pair a second time using the final
//! pair's output and a second accumulator `Y`. This two-pass structure is
//! what makes aez-core a genuine wide-block cipher: changing any input byte
//! changes the whole output, not just the block it sits in.

use crate::{
    block::{double, one_zero_pad, xor16, xor16_4, Block, BLOCK_SIZE, ZERO},
    state::AezState,
};

/// Fold every 32-byte pair in `data[0..initial_bytes]` into the `dst` output
/// and into the returned accumulator `X`, doubling the running `I'` tweak
/// every 8 pairs (starting from `I1`).
fn aez_core_pass1(state: &AezState, data: &[u8], dst: &mut [u8], initial_bytes: usize) -> Block {
    let mut i_tmp = *state.i(1);
    let mut x = [0u8; BLOCK_SIZE];
    let mut offset = 0usize;
    let mut i = 1u32;

    while offset < initial_bytes {
        let block2: Block = data[offset + 16..offset + 32].try_into().unwrap();
        let tmp = state.aes().aes4(state.j(0), &i_tmp, state.l((i % 8) as usize), &block2);
        let block1: Block = data[offset..offset + 16].try_into().unwrap();
        let first_out = xor16(&block1, &tmp);
        dst[offset..offset + 16].copy_from_slice(&first_out);

        let tmp = state.aes().aes4(&ZERO, state.i(0), state.l(0), &first_out);
        let block2: Block = data[offset + 16..offset + 32].try_into().unwrap();
        let second_out = xor16(&block2, &tmp);
        dst[offset + 16..offset + 32].copy_from_slice(&second_out);
        x = xor16(&x, &second_out);

        offset += 32;
        i += 1;
        if i % 8 == 0 {
            double(&mut i_tmp);
        }
    }

    x
}

/// Rewrite every 32-byte pair in `dst[0..initial_bytes]` (already holding
/// pass 1's output) a second time using the final pair's checksum `s`,
/// folding the pre-rewrite first half of each pair into the returned
/// accumulator `Y`. Each pair's two halves are swapped after rewriting.
fn aez_core_pass2(state: &AezState, dst: &mut [u8], s: &Block, initial_bytes: usize) -> Block {
    let mut i_tmp = *state.i(1);
    let mut y = [0u8; BLOCK_SIZE];
    let mut offset = 0usize;
    let mut i = 1u32;

    while offset < initial_bytes {
        let mut first: Block = dst[offset..offset + 16].try_into().unwrap();
        let mut second: Block = dst[offset + 16..offset + 32].try_into().unwrap();

        let w = state.aes().aes4(state.j(1), &i_tmp, state.l((i % 8) as usize), s);
        first = xor16(&first, &w);
        second = xor16(&second, &w);
        y = xor16(&y, &first);

        let tmp = state.aes().aes4(&ZERO, state.i(0), state.l(0), &second);
        first = xor16(&first, &tmp);

        let tmp = state.aes().aes4(state.j(0), &i_tmp, state.l((i % 8) as usize), &first);
        second = xor16(&second, &tmp);

        dst[offset..offset + 16].copy_from_slice(&second);
        dst[offset + 16..offset + 32].copy_from_slice(&first);

        offset += 32;
        i += 1;
        if i % 8 == 0 {
            double(&mut i_tmp);
        }
    }

    y
}

/// Run aez-core over `data` (32 bytes or more), writing `data.len()` bytes
/// to `dst`. `direction` is `0` to encipher, nonzero to decipher.
pub fn aez_core(state: &AezState, delta: &Block, data: &[u8], direction: u8, dst: &mut [u8]) {
    let in_bytes = data.len();
    debug_assert!(in_bytes >= 32);
    let frag_bytes = in_bytes % 32;
    let initial_bytes = in_bytes - frag_bytes - 32;

    let mut x = [0u8; BLOCK_SIZE];
    if in_bytes >= 64 {
        x = aez_core_pass1(state, data, dst, initial_bytes);
    }

    let tail = &data[initial_bytes..];
    if frag_bytes >= BLOCK_SIZE {
        let mut buf = [0u8; BLOCK_SIZE];
        buf.copy_from_slice(&tail[BLOCK_SIZE..BLOCK_SIZE * 2]);
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(4), &buf);
        x = xor16(&x, &tmp);
        let padded = one_zero_pad(&tail[BLOCK_SIZE..], frag_bytes - BLOCK_SIZE);
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(5), &padded);
        x = xor16(&x, &tmp);
    } else if frag_bytes > 0 {
        let padded = one_zero_pad(tail, frag_bytes);
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(4), &padded);
        x = xor16(&x, &tmp);
    }

    let tail_start = in_bytes - 32;
    let block1: Block = data[tail_start..tail_start + 16].try_into().unwrap();
    let block2: Block = data[tail_start + 16..tail_start + 32].try_into().unwrap();
    let l_idx = (1 + direction as usize) % 8;
    let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(l_idx), &block2);
    let first_dst = xor16_4(&x, &block1, delta, &tmp);
    dst[tail_start..tail_start + 16].copy_from_slice(&first_dst);
    let tmp2 = state.aes().aes10(state.l(l_idx), &first_dst);
    let second_dst = xor16(&block2, &tmp2);
    dst[tail_start + 16..tail_start + 32].copy_from_slice(&second_dst);
    let s = xor16(&first_dst, &second_dst);

    let mut y = [0u8; BLOCK_SIZE];
    if in_bytes >= 64 {
        y = aez_core_pass2(state, dst, &s, initial_bytes);
    }

    if frag_bytes >= BLOCK_SIZE {
        let tmp_block = state.aes().aes10(state.l(4), &s);
        let mut block: Block = data[initial_bytes..initial_bytes + 16].try_into().unwrap();
        block = xor16(&block, &tmp_block);
        dst[initial_bytes..initial_bytes + 16].copy_from_slice(&block);
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(4), &block);
        y = xor16(&y, &tmp);

        let remaining = frag_bytes - BLOCK_SIZE;
        let frag_start = initial_bytes + BLOCK_SIZE;
        let mut buf = state.aes().aes10(state.l(5), &s);
        for idx in 0..remaining {
            buf[idx] ^= data[frag_start + idx];
        }
        dst[frag_start..frag_start + remaining].copy_from_slice(&buf[..remaining]);
        let mut padded = [0u8; BLOCK_SIZE];
        padded[..remaining].copy_from_slice(&dst[frag_start..frag_start + remaining]);
        padded[remaining] = 0x80;
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(5), &padded);
        y = xor16(&y, &tmp);
    } else if frag_bytes > 0 {
        let mut buf = state.aes().aes10(state.l(4), &s);
        for idx in 0..frag_bytes {
            buf[idx] ^= data[initial_bytes + idx];
        }
        dst[initial_bytes..initial_bytes + frag_bytes].copy_from_slice(&buf[..frag_bytes]);
        let mut padded = [0u8; BLOCK_SIZE];
        padded[..frag_bytes].copy_from_slice(&dst[initial_bytes..initial_bytes + frag_bytes]);
        padded[frag_bytes] = 0x80;
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(4), &padded);
        y = xor16(&y, &tmp);
    }

    let second_half: Block = dst[tail_start + 16..tail_start + 32].try_into().unwrap();
    let l_idx2 = (2 - direction as usize) % 8;
    let tmp_block = state.aes().aes10(state.l(l_idx2), &second_half);
    let first_half: Block = dst[tail_start..tail_start + 16].try_into().unwrap();
    let first_half = xor16(&first_half, &tmp_block);
    dst[tail_start..tail_start + 16].copy_from_slice(&first_half);
    let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(l_idx2), &first_half);
    let combined = xor16_4(&tmp, &second_half, delta, &y);

    // The final pair is stored swapped: combined lands in the first slot,
    // the freshly-computed first_half in the second. Getting this backwards
    // silently produces ciphertext that looks plausible but never verifies.
    dst[tail_start..tail_start + 16].copy_from_slice(&combined);
    dst[tail_start + 16..tail_start + 32].copy_from_slice(&first_half);
}
