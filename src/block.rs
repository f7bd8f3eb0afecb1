//! Primitive operations on 16-byte blocks, the unit AEZ operates on
//! throughout the rest of this crate.
//!
//! A block is treated as an element of $GF(2^{128})$ for the [`double`]
//! operation, using AEZ's big-endian bit convention (the MSB of byte 0 is the
//! high-order bit of the field element, the opposite of the bit order you'd
//! get from naively reusing a little-endian GCM `double`).

use docext::docext;

/// The size in bytes of an AEZ block.
pub const BLOCK_SIZE: usize = 16;

/// A 16-byte AEZ block.
pub type Block = [u8; BLOCK_SIZE];

/// The all-zero block, used throughout the cipher cores as the "no tweak
/// here" value for whichever of `j`/`i`/`l` a given `AES4` call doesn't need.
pub const ZERO: Block = [0u8; BLOCK_SIZE];

/// The reduction constant for [`double`], $\mathrm{87}_{16}$, the AEZ/GCM
/// choice of primitive polynomial for $GF(2^{128})$.
const R: u8 = 0x87;

/// XOR two blocks together.
pub fn xor16(a: &Block, b: &Block) -> Block {
    let mut dst = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        dst[i] = a[i] ^ b[i];
    }
    dst
}

/// XOR four blocks together in one pass.
pub fn xor16_4(a: &Block, b: &Block, c: &Block, d: &Block) -> Block {
    let mut dst = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        dst[i] = a[i] ^ b[i] ^ c[i] ^ d[i];
    }
    dst
}

/// Multiply a block by $x$ in $GF(2^{128})$, in place.
///
/// $GF(2^{128})$ elements are represented as 128-bit big-endian numbers, so
/// multiplying by $x$ is a left shift of the whole 16-byte array by one bit,
/// carrying between bytes, followed by a reduction: if the bit shifted out
/// of byte 0 (the high bit of the whole element) was set, the result is
/// already larger than the field's modulus and must be reduced by XORing in
/// [`R`] at the bottom byte. This is the 128-bit analog of the familiar
/// $GF(2^8)$ "multiply by $x$, conditionally XOR the reduction polynomial"
/// trick used in plain AES MixColumns, just carried across 16 bytes with a
/// carry propagated between them instead of a single byte.
#[docext]
pub fn double(p: &mut Block) {
    let carry = p[0] & 0x80 != 0;
    for i in 0..BLOCK_SIZE - 1 {
        p[i] = (p[i] << 1) | (p[i + 1] >> 7);
    }
    p[BLOCK_SIZE - 1] = (p[BLOCK_SIZE - 1] << 1) ^ if carry { R } else { 0 };
}

/// Multiply `src` by the small scalar `x` in $GF(2^{128})$, via
/// double-and-add, scanning `x` from its least to most significant bit.
pub fn mult(mut x: u32, src: &Block) -> Block {
    let mut t = *src;
    let mut r = [0u8; BLOCK_SIZE];
    while x != 0 {
        if x & 1 != 0 {
            r = xor16(&r, &t);
        }
        double(&mut t);
        x >>= 1;
    }
    r
}

/// Pad `src[..n]` to a full block: copy the first `n` bytes, then a single
/// `0x80` domain-separator byte at index `n`, then zeros.
///
/// `n` must be strictly less than [`BLOCK_SIZE`].
pub fn one_zero_pad(src: &[u8], n: usize) -> Block {
    debug_assert!(n < BLOCK_SIZE);
    let mut dst = [0u8; BLOCK_SIZE];
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0x80;
    dst
}
