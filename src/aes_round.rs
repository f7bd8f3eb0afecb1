//! AEZ's non-standard, reduced-round AES primitives.
//!
//! AEZ does not use AES as specified by FIPS 197. It reuses AES's T-table
//! round function (substitution, diffusion, and round-key XOR fused into four
//! table lookups) but drives it with a key schedule that is just a fixed
//! rearrangement of an already-extracted 48-byte key, runs it for either 4 or
//! 10 rounds, and never applies the final "no MixColumns" round FIPS 197
//! requires. The result, [`AES4`](AesRound::aes4) and
//! [`AES10`](AesRound::aes10), is a pair of keyed pseudorandom permutations
//! used as AEZ's only building block -- not a standards-conforming cipher in
//! its own right.

use blake2::{digest::consts::U48, Blake2b, Digest};
use zeroize::Zeroize;

use crate::block::{xor16, xor16_4, Block, BLOCK_SIZE};

/// The size in bytes of an AEZ extracted key: three blocks, split into the
/// `I`/`J`/`L` tweak basis by [`crate::state::AezState::init`].
pub const EXTRACTED_KEY_SIZE: usize = 3 * BLOCK_SIZE;

type Blake2b384 = Blake2b<U48>;

/// Extract a 48-byte AEZ key from a key of any length.
///
/// If `key` is already 48 bytes, it is used as-is (identity). Otherwise it is
/// hashed with BLAKE2b at a 48-byte digest size.
pub fn extract_key(key: &[u8]) -> [u8; EXTRACTED_KEY_SIZE] {
    if key.len() == EXTRACTED_KEY_SIZE {
        let mut out = [0u8; EXTRACTED_KEY_SIZE];
        out.copy_from_slice(key);
        out
    } else {
        let mut hasher = Blake2b384::new();
        hasher.update(key);
        let digest = hasher.finalize();
        let mut out = [0u8; EXTRACTED_KEY_SIZE];
        out.copy_from_slice(&digest);
        out
    }
}

/// TE0, the standard AES T-table: `TE0[b] = MixColumns` applied to the single
/// S-box'd byte `b` in the table's column position, i.e. `S(b)` multiplied by
/// AES's `{02,01,01,03}` column and packed big-endian into a `u32`.
#[rustfmt::skip]
pub const TE0: [u32; 256] = [
    0xc66363a5, 0xf87c7c84, 0xee777799, 0xf67b7b8d, 0xfff2f20d, 0xd66b6bbd, 0xde6f6fb1, 0x91c5c554,
    0x60303050, 0x02010103, 0xce6767a9, 0x562b2b7d, 0xe7fefe19, 0xb5d7d762, 0x4dababe6, 0xec76769a,
    0x8fcaca45, 0x1f82829d, 0x89c9c940, 0xfa7d7d87, 0xeffafa15, 0xb25959eb, 0x8e4747c9, 0xfbf0f00b,
    0x41adadec, 0xb3d4d467, 0x5fa2a2fd, 0x45afafea, 0x239c9cbf, 0x53a4a4f7, 0xe4727296, 0x9bc0c05b,
    0x75b7b7c2, 0xe1fdfd1c, 0x3d9393ae, 0x4c26266a, 0x6c36365a, 0x7e3f3f41, 0xf5f7f702, 0x83cccc4f,
    0x6834345c, 0x51a5a5f4, 0xd1e5e534, 0xf9f1f108, 0xe2717193, 0xabd8d873, 0x62313153, 0x2a15153f,
    0x0804040c, 0x95c7c752, 0x46232365, 0x9dc3c35e, 0x30181828, 0x379696a1, 0x0a05050f, 0x2f9a9ab5,
    0x0e070709, 0x24121236, 0x1b80809b, 0xdfe2e23d, 0xcdebeb26, 0x4e272769, 0x7fb2b2cd, 0xea75759f,
    0x1209091b, 0x1d83839e, 0x582c2c74, 0x341a1a2e, 0x361b1b2d, 0xdc6e6eb2, 0xb45a5aee, 0x5ba0a0fb,
    0xa45252f6, 0x763b3b4d, 0xb7d6d661, 0x7db3b3ce, 0x5229297b, 0xdde3e33e, 0x5e2f2f71, 0x13848497,
    0xa65353f5, 0xb9d1d168, 0x00000000, 0xc1eded2c, 0x40202060, 0xe3fcfc1f, 0x79b1b1c8, 0xb65b5bed,
    0xd46a6abe, 0x8dcbcb46, 0x67bebed9, 0x7239394b, 0x944a4ade, 0x984c4cd4, 0xb05858e8, 0x85cfcf4a,
    0xbbd0d06b, 0xc5efef2a, 0x4faaaae5, 0xedfbfb16, 0x864343c5, 0x9a4d4dd7, 0x66333355, 0x11858594,
    0x8a4545cf, 0xe9f9f910, 0x04020206, 0xfe7f7f81, 0xa05050f0, 0x783c3c44, 0x259f9fba, 0x4ba8a8e3,
    0xa25151f3, 0x5da3a3fe, 0x804040c0, 0x058f8f8a, 0x3f9292ad, 0x219d9dbc, 0x70383848, 0xf1f5f504,
    0x63bcbcdf, 0x77b6b6c1, 0xafdada75, 0x42212163, 0x20101030, 0xe5ffff1a, 0xfdf3f30e, 0xbfd2d26d,
    0x81cdcd4c, 0x180c0c14, 0x26131335, 0xc3ecec2f, 0xbe5f5fe1, 0x359797a2, 0x884444cc, 0x2e171739,
    0x93c4c457, 0x55a7a7f2, 0xfc7e7e82, 0x7a3d3d47, 0xc86464ac, 0xba5d5de7, 0x3219192b, 0xe6737395,
    0xc06060a0, 0x19818198, 0x9e4f4fd1, 0xa3dcdc7f, 0x44222266, 0x542a2a7e, 0x3b9090ab, 0x0b888883,
    0x8c4646ca, 0xc7eeee29, 0x6bb8b8d3, 0x2814143c, 0xa7dede79, 0xbc5e5ee2, 0x160b0b1d, 0xaddbdb76,
    0xdbe0e03b, 0x64323256, 0x743a3a4e, 0x140a0a1e, 0x924949db, 0x0c06060a, 0x4824246c, 0xb85c5ce4,
    0x9fc2c25d, 0xbdd3d36e, 0x43acacef, 0xc46262a6, 0x399191a8, 0x319595a4, 0xd3e4e437, 0xf279798b,
    0xd5e7e732, 0x8bc8c843, 0x6e373759, 0xda6d6db7, 0x018d8d8c, 0xb1d5d564, 0x9c4e4ed2, 0x49a9a9e0,
    0xd86c6cb4, 0xac5656fa, 0xf3f4f407, 0xcfeaea25, 0xca6565af, 0xf47a7a8e, 0x47aeaee9, 0x10080818,
    0x6fbabad5, 0xf0787888, 0x4a25256f, 0x5c2e2e72, 0x381c1c24, 0x57a6a6f1, 0x73b4b4c7, 0x97c6c651,
    0xcbe8e823, 0xa1dddd7c, 0xe874749c, 0x3e1f1f21, 0x964b4bdd, 0x61bdbddc, 0x0d8b8b86, 0x0f8a8a85,
    0xe0707090, 0x7c3e3e42, 0x71b5b5c4, 0xcc6666aa, 0x904848d8, 0x06030305, 0xf7f6f601, 0x1c0e0e12,
    0xc26161a3, 0x6a35355f, 0xae5757f9, 0x69b9b9d0, 0x17868691, 0x99c1c158, 0x3a1d1d27, 0x279e9eb9,
    0xd9e1e138, 0xebf8f813, 0x2b9898b3, 0x22111133, 0xd26969bb, 0xa9d9d970, 0x078e8e89, 0x339494a7,
    0x2d9b9bb6, 0x3c1e1e22, 0x15878792, 0xc9e9e920, 0x87cece49, 0xaa5555ff, 0x50282878, 0xa5dfdf7a,
    0x038c8c8f, 0x59a1a1f8, 0x09898980, 0x1a0d0d17, 0x65bfbfda, 0xd7e6e631, 0x844242c6, 0xd06868b8,
    0x824141c3, 0x299999b0, 0x5a2d2d77, 0x1e0f0f11, 0x7bb0b0cb, 0xa85454fc, 0x6dbbbbd6, 0x2c16163a,
];

/// `TE1 = TE0` rotated right by 8 bits per entry.
#[rustfmt::skip]
pub const TE1: [u32; 256] = rotate_table(&TE0, 8);
/// `TE2 = TE0` rotated right by 16 bits per entry.
#[rustfmt::skip]
pub const TE2: [u32; 256] = rotate_table(&TE0, 16);
/// `TE3 = TE0` rotated right by 24 bits per entry.
#[rustfmt::skip]
pub const TE3: [u32; 256] = rotate_table(&TE0, 24);

const fn rotate_table(table: &[u32; 256], by: u32) -> [u32; 256] {
    let mut out = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        out[i] = table[i].rotate_right(by);
        i += 1;
    }
    out
}

fn read_u32_be(block: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        block[offset],
        block[offset + 1],
        block[offset + 2],
        block[offset + 3],
    ])
}

fn write_u32_be(block: &mut [u8], offset: usize, value: u32) {
    block[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// The two fixed key schedules AEZ derives from a 48-byte extracted key:
/// a 40-word schedule for [`AesRound::aes10`] and a 16-word schedule for
/// [`AesRound::aes4`]. Both are plain rearrangements of the same 12 words,
/// never an actual AES key expansion.
#[derive(Clone, Zeroize)]
pub struct AesRound {
    aes10_key: [u32; 40],
    aes4_key: [u32; 16],
}

impl AesRound {
    /// Derive the AES4/AES10 schedules from a 48-byte extracted key.
    pub fn new(extracted_key: &[u8; EXTRACTED_KEY_SIZE]) -> Self {
        let mut words = [0u32; 12];
        for (i, w) in words.iter_mut().enumerate() {
            *w = read_u32_be(extracted_key, 4 * i);
        }

        let mut aes10_key = [0u32; 40];
        aes10_key[0..12].copy_from_slice(&words);
        aes10_key[12..24].copy_from_slice(&words);
        aes10_key[24..36].copy_from_slice(&words);
        aes10_key[36..40].copy_from_slice(&words[0..4]);

        let mut aes4_key = [0u32; 16];
        aes4_key[0..4].copy_from_slice(&words[4..8]);
        aes4_key[4..8].copy_from_slice(&words[0..4]);
        aes4_key[8..12].copy_from_slice(&words[8..12]);
        // aes4_key[12..16] is left zero: AES4's last round XORs a zero
        // round-key word, a quirk of the reference schedule rather than an
        // omission here.

        words.zeroize();
        AesRound { aes10_key, aes4_key }
    }

    /// `AES4(j, i, l, src)`: XOR the three tweak blocks with `src`, then run
    /// 4 rounds with the 4-round schedule.
    pub fn aes4(&self, j: &Block, i: &Block, l: &Block, src: &Block) -> Block {
        let mut dst = xor16_4(j, i, l, src);
        self.rounds(&mut dst, &self.aes4_key);
        dst
    }

    /// `AES10(l, src)`: XOR the tweak block with `src`, then run 10 rounds
    /// with the 10-round schedule.
    pub fn aes10(&self, l: &Block, src: &Block) -> Block {
        let mut dst = xor16(src, l);
        self.rounds(&mut dst, &self.aes10_key);
        dst
    }

    /// The shared round function: `keys.len() / 4` rounds of
    /// T-table substitution-diffusion plus round-key XOR, with no final
    /// "drop MixColumns" round. This is AEZ's reduced-round usage, not
    /// standards-conforming AES.
    fn rounds(&self, block: &mut Block, keys: &[u32]) {
        let mut s0 = read_u32_be(block, 0);
        let mut s1 = read_u32_be(block, 4);
        let mut s2 = read_u32_be(block, 8);
        let mut s3 = read_u32_be(block, 12);

        for rk in keys.chunks_exact(4) {
            let t0 = TE0[(s0 >> 24) as u8 as usize]
                ^ TE1[(s1 >> 16) as u8 as usize]
                ^ TE2[(s2 >> 8) as u8 as usize]
                ^ TE3[s3 as u8 as usize]
                ^ rk[0];
            let t1 = TE0[(s1 >> 24) as u8 as usize]
                ^ TE1[(s2 >> 16) as u8 as usize]
                ^ TE2[(s3 >> 8) as u8 as usize]
                ^ TE3[s0 as u8 as usize]
                ^ rk[1];
            let t2 = TE0[(s2 >> 24) as u8 as usize]
                ^ TE1[(s3 >> 16) as u8 as usize]
                ^ TE2[(s0 >> 8) as u8 as usize]
                ^ TE3[s1 as u8 as usize]
                ^ rk[2];
            let t3 = TE0[(s3 >> 24) as u8 as usize]
                ^ TE1[(s0 >> 16) as u8 as usize]
                ^ TE2[(s1 >> 8) as u8 as usize]
                ^ TE3[s2 as u8 as usize]
                ^ rk[3];
            s0 = t0;
            s1 = t1;
            s2 = t2;
            s3 = t3;
        }

        write_u32_be(block, 0, s0);
        write_u32_be(block, 4, s1);
        write_u32_be(block, 8, s2);
        write_u32_be(block, 12, s3);
    }
}
