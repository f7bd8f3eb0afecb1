//! aez-tiny: the Feistel cipher AEZ falls back to for messages shorter than
//! one block (1..31 bytes), where the wide-block construction in
//! [`crate::wideblock`] has no room to operate.
//!
//! Both directions are implemented even though the decode pipeline only ever
//! deciphers, so that the encipher/decipher pair can be tested for round-trip
//! agreement the way the reference implementation's test suite does.

use crate::{
    block::{xor16, Block, BLOCK_SIZE, ZERO},
    state::AezState,
};

/// Run aez-tiny over `data` (1..31 bytes), writing `data.len()` bytes to
/// `dst`. `direction` is `0` to encipher, nonzero to decipher.
///
/// The construction splits `data` into two overlapping halves `L`/`R` (the
/// halves overlap by one byte when `in_bytes` is odd, with the shared byte
/// split across a nibble boundary), runs a Feistel network of 8, 10, 16, or
/// 24 rounds depending on length, and recombines. For inputs shorter than a
/// full block, an extra whitening step folds the top bit of an `AES4`
/// evaluation of the plaintext (enciphering) or ciphertext (deciphering) into
/// the first output bit -- this is what lets aez-tiny also carry the
/// authentication tag for short messages, rather than needing a separate
/// PRF pass.
pub fn aez_tiny(state: &AezState, delta: &Block, data: &[u8], direction: u8, dst: &mut [u8]) {
    let in_bytes = data.len();
    debug_assert!((1..BLOCK_SIZE * 2).contains(&in_bytes));

    let mut l = [0u8; BLOCK_SIZE];
    let mut r = [0u8; BLOCK_SIZE];
    let mut mask = 0x00u8;
    let mut pad = 0x80u8;
    let mut idx_param = 7usize;
    let rounds: i32 = if in_bytes == 1 {
        24
    } else if in_bytes == 2 {
        16
    } else if in_bytes < BLOCK_SIZE {
        10
    } else {
        idx_param = 6;
        8
    };

    let left_len = (in_bytes + 1) / 2;
    let right_start = in_bytes / 2;
    let half = in_bytes / 2;
    l[..left_len].copy_from_slice(&data[..left_len]);
    r[..left_len].copy_from_slice(&data[right_start..right_start + left_len]);

    if in_bytes & 1 != 0 {
        for k in 0..half {
            r[k] = (r[k] << 4) | (r[k + 1] >> 4);
        }
        r[half] <<= 4;
        pad = 0x08;
        mask = 0xF0;
    }

    let (mut j, step): (i32, i32) = if direction != 0 {
        if in_bytes < BLOCK_SIZE {
            let mut tagbuf = [0u8; BLOCK_SIZE];
            tagbuf[..in_bytes].copy_from_slice(data);
            tagbuf[0] |= 0x80;
            let tmp = state
                .aes()
                .aes4(&ZERO, state.i(1), state.l(3), &xor16(delta, &tagbuf));
            l[0] ^= tmp[0] & 0x80;
        }
        (rounds - 1, -1)
    } else {
        (0, 1)
    };

    for _ in 0..rounds / 2 {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[..left_len].copy_from_slice(&r[..left_len]);
        buf[half] = (buf[half] & mask) | pad;
        let mut buf = xor16(&buf, delta);
        buf[15] ^= (j & 0xFF) as u8;
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(idx_param), &buf);
        l = xor16(&l, &tmp);

        let mut buf = [0u8; BLOCK_SIZE];
        buf[..left_len].copy_from_slice(&l[..left_len]);
        buf[half] = (buf[half] & mask) | pad;
        let mut buf = xor16(&buf, delta);
        buf[15] ^= ((j + step) & 0xFF) as u8;
        let tmp = state.aes().aes4(&ZERO, state.i(1), state.l(idx_param), &buf);
        r = xor16(&r, &tmp);

        j += step * 2;
    }

    let mut out = [0u8; 2 * BLOCK_SIZE];
    out[..half].copy_from_slice(&r[..half]);
    out[half..half + left_len].copy_from_slice(&l[..left_len]);
    if in_bytes & 1 != 0 {
        for k in (half + 1..in_bytes).rev() {
            out[k] = (out[k] >> 4) | (out[k - 1] << 4);
        }
        out[half] = ((l[0] >> 4) & 0x0F) | (r[half] & 0xF0);
    }

    dst[..in_bytes].copy_from_slice(&out[..in_bytes]);

    if in_bytes < BLOCK_SIZE && direction == 0 {
        let mut tagbuf = [0u8; BLOCK_SIZE];
        tagbuf[..in_bytes].copy_from_slice(&dst[..in_bytes]);
        tagbuf[0] |= 0x80;
        let tmp = state
            .aes()
            .aes4(&ZERO, state.i(1), state.l(3), &xor16(delta, &tagbuf));
        dst[0] ^= tmp[0] & 0x80;
    }
}
