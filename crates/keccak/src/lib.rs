//! Keccak-f[1600] sponge state with per-block state commitments.
//!
//! The preimage oracle verifies a streamed preimage by replaying the keccak
//! sponge one 136-byte block at a time, so the uploader commits to the full
//! permutation state after every absorbed block. A later challenge can then
//! dispute any single intermediate state without replaying the whole stream.

use alloy_primitives::{keccak256, B256};
use waimea_types::KECCAK_BLOCK_SIZE_BYTES;

/// Number of 64-bit lanes in the keccak-f[1600] state.
const STATE_LANES: usize = 25;

/// Number of lanes covered by one absorbed block.
const RATE_LANES: usize = KECCAK_BLOCK_SIZE_BYTES / 8;

/// The sponge state of an in-progress keccak-256 absorption.
///
/// Strictly sequential: each absorption permutes hidden state the next
/// absorption depends on, so a matrix must be driven by a single execution
/// context in increasing leaf order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMatrix {
    state: [u64; STATE_LANES],
}

impl Default for StateMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMatrix {
    /// A fresh, zeroed sponge state.
    pub const fn new() -> Self {
        Self {
            state: [0u64; STATE_LANES],
        }
    }

    /// Absorbs a single 136-byte leaf into the sponge.
    ///
    /// When `is_final` is set, multi-rate pad10*1 padding follows the leaf.
    /// The padding always occupies a whole extra block here because leaves
    /// are full rate-width blocks, so for input whose length is an exact
    /// multiple of the block size the resulting state matches the standard
    /// keccak-256 sponge over that input.
    pub fn absorb_leaf(&mut self, leaf: &[u8; KECCAK_BLOCK_SIZE_BYTES], is_final: bool) {
        self.absorb_block(leaf);
        if is_final {
            let mut padding = [0u8; KECCAK_BLOCK_SIZE_BYTES];
            padding[0] = 0x01;
            padding[KECCAK_BLOCK_SIZE_BYTES - 1] |= 0x80;
            self.absorb_block(&padding);
        }
    }

    /// Commits to the current permutation state: the keccak-256 digest of
    /// the 25 lanes packed big-endian, matching the on-chain state packing.
    pub fn state_commitment(&self) -> B256 {
        keccak256(self.pack_state())
    }

    /// The packed 200-byte permutation state, one big-endian 8-byte word
    /// per lane.
    pub fn pack_state(&self) -> [u8; 200] {
        let mut packed = [0u8; 200];
        for (i, lane) in self.state.iter().enumerate() {
            packed[i * 8..(i + 1) * 8].copy_from_slice(&lane.to_be_bytes());
        }
        packed
    }

    /// The squeezed digest: the first 32 bytes of the rate portion of the
    /// state. After a final absorption of input whose length was an exact
    /// multiple of the block size, this equals `keccak256` of that input.
    pub fn digest(&self) -> B256 {
        let mut out = [0u8; 32];
        for i in 0..4 {
            out[i * 8..(i + 1) * 8].copy_from_slice(&self.state[i].to_le_bytes());
        }
        B256::from(out)
    }

    fn absorb_block(&mut self, block: &[u8; KECCAK_BLOCK_SIZE_BYTES]) {
        for i in 0..RATE_LANES {
            let mut lane = [0u8; 8];
            lane.copy_from_slice(&block[i * 8..(i + 1) * 8]);
            self.state[i] ^= u64::from_le_bytes(lane);
        }
        keccak::f1600(&mut self.state);
    }
}
