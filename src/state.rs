//! AEZ key schedule: derives the `I`/`J`/`L` tweak basis an AEZ key expands
//! into, and owns the [`AesRound`] context built from the same key.

use zeroize::Zeroize;

use crate::{
    aes_round::{extract_key, AesRound, EXTRACTED_KEY_SIZE},
    block::{double, mult, xor16, Block, BLOCK_SIZE},
};

/// AEZ's internal state: the `I`, `J`, `L` tweak-basis blocks and the AES
/// round context derived from a single key.
///
/// Built once per decode via [`AezState::init`] and owned for the lifetime of
/// that decode; never shared or reused across calls. [`AezState::reset`]
/// overwrites every field with zeros before the state is dropped, as a
/// best-effort defense against secrets lingering in memory.
#[derive(Clone, Zeroize)]
pub struct AezState {
    i: [Block; 2],
    j: [Block; 3],
    l: [Block; 8],
    aes: Option<AesRound>,
}

impl AezState {
    /// An all-zero state, matching `_AEZState.__init__` in the reference
    /// implementation. Must be followed by [`init`](Self::init) before use.
    pub fn new() -> Self {
        AezState {
            i: [[0; BLOCK_SIZE]; 2],
            j: [[0; BLOCK_SIZE]; 3],
            l: [[0; BLOCK_SIZE]; 8],
            aes: None,
        }
    }

    /// Derive the tweak basis and AES round context from `key` (of any
    /// length; extracted to 48 bytes per [`extract_key`]).
    ///
    /// Invariants established:
    /// - `I0 = extracted[0..16]`, `I1 = double(I0)`.
    /// - `J0 = extracted[16..32]`, `J1 = double(J0)`, `J2 = double(J1)`.
    /// - `L1 = extracted[32..48]`, `L2 = double(L1)`, `L3 = L2 ^ L1`,
    ///   `L4 = double(L2)`, `L5 = L4 ^ L1`, `L6 = double(L3)`,
    ///   `L7 = L6 ^ L1`. `L0` stays the all-zero block.
    pub fn init(&mut self, key: &[u8]) {
        let mut extracted: [u8; EXTRACTED_KEY_SIZE] = extract_key(key);

        self.i[0].copy_from_slice(&extracted[0..16]);
        self.i[1] = self.i[0];
        double(&mut self.i[1]);

        self.j[0].copy_from_slice(&extracted[16..32]);
        self.j[1] = self.j[0];
        double(&mut self.j[1]);
        self.j[2] = self.j[1];
        double(&mut self.j[2]);

        self.l[1].copy_from_slice(&extracted[32..48]);
        self.l[2] = self.l[1];
        double(&mut self.l[2]);
        self.l[3] = xor16(&self.l[2], &self.l[1]);
        self.l[4] = self.l[2];
        double(&mut self.l[4]);
        self.l[5] = xor16(&self.l[4], &self.l[1]);
        self.l[6] = self.l[3];
        double(&mut self.l[6]);
        self.l[7] = xor16(&self.l[6], &self.l[1]);

        self.aes = Some(AesRound::new(&extracted));
        extracted.zeroize();
    }

    pub fn i(&self, idx: usize) -> &Block {
        &self.i[idx]
    }

    pub fn j(&self, idx: usize) -> &Block {
        &self.j[idx]
    }

    pub fn l(&self, idx: usize) -> &Block {
        &self.l[idx]
    }

    /// `mult(x, J0)`, used by [`crate::hash`] to derive a fresh per-AD-string
    /// tweak without mutating the state.
    pub fn j0_mult(&self, x: u32) -> Block {
        mult(x, &self.j[0])
    }

    pub fn aes(&self) -> &AesRound {
        self.aes.as_ref().expect("AezState::init must be called before use")
    }

    /// Overwrite every tweak block and the AES round schedules with zeros.
    pub fn reset(&mut self) {
        self.zeroize();
    }
}

impl Default for AezState {
    fn default() -> Self {
        Self::new()
    }
}
