use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use waimea_types::{PreimageOracleData, KECCAK_BLOCK_SIZE_BYTES};

use crate::txmgr::TxCandidate;

/// A single merkleized block of a large preimage proposal.
///
/// Leaves are immutable once computed and their order is semantically
/// significant: state commitments chain, so reordering or omitting a leaf
/// changes every subsequent commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// The 136-byte input block.
    pub input: [u8; KECCAK_BLOCK_SIZE_BYTES],
    /// 0-based sequence number of the block within the preimage.
    pub index: U256,
    /// Commitment to the sponge state after absorbing this block and all
    /// prior blocks of the same preimage.
    pub state_commitment: B256,
}

/// Metadata of a large preimage proposal active on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargePreimageMetaData {
    /// Address that initialized the proposal.
    pub claimant: Address,
    /// Proposal identifier chosen by the claimant.
    pub uuid: U256,
}

/// Binding against contracts implementing the preimage oracle interface.
///
/// Implementations own ABI encoding, call construction and gas concerns;
/// this core only sequences the candidates they produce.
#[async_trait]
pub trait PreimageOracleContract {
    /// Builds the transaction that initializes a large preimage proposal.
    fn init_large_preimage(
        &self,
        uuid: U256,
        part_offset: u32,
        claimed_size: u32,
    ) -> anyhow::Result<TxCandidate>;

    /// Builds the transactions that append `leaves` to the proposal `uuid`.
    /// The binding may pack the leaves into any number of candidates, but
    /// the returned order must be preserved on submission.
    fn add_leaves(
        &self,
        uuid: U256,
        leaves: &[Leaf],
        finalize: bool,
    ) -> anyhow::Result<Vec<TxCandidate>>;

    /// Builds the single-call transaction that loads a global preimage part
    /// directly, bypassing the streaming path.
    fn add_global_data_tx(&self, data: &PreimageOracleData) -> anyhow::Result<TxCandidate>;

    /// Reads the large preimage proposals active as of `block_hash`.
    async fn get_active_preimages(
        &self,
        block_hash: B256,
    ) -> anyhow::Result<Vec<LargePreimageMetaData>>;
}
