use alloy_primitives::Bytes;

use crate::KECCAK_BLOCK_SIZE_BYTES;

/// Global preimage data carries its length in an 8-byte big-endian prefix.
const PREIMAGE_SIZE_PREFIX_BYTES: usize = 8;

/// Input data for a preimage oracle load.
///
/// A preimage is either local to a single dispute or global to the chain,
/// derived from the leading type-tag byte of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreimageOracleData {
    /// The preimage key, conventionally a digest with a leading type-tag byte.
    pub oracle_key: Bytes,
    /// The raw preimage.
    pub oracle_data: Bytes,
    /// Offset into the oracle's view of the data.
    pub oracle_offset: u32,
    /// Whether the preimage is local to a single dispute.
    pub is_local: bool,
}

impl PreimageOracleData {
    /// Creates a new [PreimageOracleData]. No length validation is performed
    /// on the key or the data; locality is derived from the key, where an
    /// empty key or a zero type-tag byte marks a local preimage.
    pub fn new(oracle_key: Bytes, oracle_data: Bytes, oracle_offset: u32) -> Self {
        let is_local = oracle_key.first().map_or(true, |tag| *tag == 0);
        Self {
            oracle_key,
            oracle_data,
            oracle_offset,
            is_local,
        }
    }

    /// The number of 136-byte blocks the preimage decomposes into. The final
    /// partial block counts as one full leaf; empty data has no leaves.
    pub fn leaf_count(&self) -> u32 {
        self.oracle_data.len().div_ceil(KECCAK_BLOCK_SIZE_BYTES) as u32
    }

    /// The 136-byte block at `index`, left-aligned and zero-padded where the
    /// block range extends past the end of the data.
    ///
    /// An out-of-range index yields an all-zero block rather than an error;
    /// this is a defensive default, not a range check.
    pub fn get_keccak_leaf(&self, index: u32) -> [u8; KECCAK_BLOCK_SIZE_BYTES] {
        let mut leaf = [0u8; KECCAK_BLOCK_SIZE_BYTES];
        let start = index as usize * KECCAK_BLOCK_SIZE_BYTES;
        if start >= self.oracle_data.len() {
            return leaf;
        }
        let end = (start + KECCAK_BLOCK_SIZE_BYTES).min(self.oracle_data.len());
        leaf[..end - start].copy_from_slice(&self.oracle_data[start..end]);
        leaf
    }

    /// The preimage payload with the 8-byte length prefix stripped, as loaded
    /// by the single-call oracle path.
    ///
    /// Callers must only use this on global preimage data, which always
    /// carries the prefix.
    pub fn preimage_without_size(&self) -> Bytes {
        self.oracle_data.slice(PREIMAGE_SIZE_PREFIX_BYTES..)
    }
}
