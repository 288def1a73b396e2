use alloy_primitives::U256;
use anyhow::Context;
use async_trait::async_trait;
use waimea_keccak::StateMatrix;
use waimea_types::PreimageOracleData;

use crate::contract::{Leaf, PreimageOracleContract};
use crate::errors::UploadError;
use crate::txmgr::{send_tx_and_wait, TxSender};
use crate::uuid::UuidSource;
use crate::PreimageUploader;

/// Uploads large preimages by streaming the merkleized preimage to the
/// preimage oracle contract, tightly packed across multiple transactions.
///
/// The upload runs strictly sequentially: the initialization transaction
/// confirms before any leaf transmission, and each leaf transaction confirms
/// before the next is sent. Nothing is persisted across calls, so a failed
/// upload is retried by starting a new proposal under a fresh uuid.
#[derive(Debug)]
pub struct LargePreimageUploader<C, T, U> {
    pub(crate) contract: C,
    pub(crate) tx_sender: T,
    uuids: U,
}

impl<C, T, U> LargePreimageUploader<C, T, U> {
    /// Creates a new [LargePreimageUploader] over the given collaborators.
    pub const fn new(contract: C, tx_sender: T, uuids: U) -> Self {
        Self {
            contract,
            tx_sender,
            uuids,
        }
    }
}

#[async_trait]
impl<C, T, U> PreimageUploader for LargePreimageUploader<C, T, U>
where
    C: PreimageOracleContract + Send + Sync,
    T: TxSender + Send + Sync,
    U: UuidSource + Send + Sync,
{
    async fn upload_preimage(
        &self,
        _parent_claim_index: u64,
        data: &PreimageOracleData,
    ) -> Result<(), UploadError> {
        // Run the preimage through the keccak permutation, committing to the
        // sponge state after every absorbed block.
        let leaf_count = data.leaf_count();
        let mut matrix = StateMatrix::new();
        let mut leaves = Vec::with_capacity(leaf_count as usize);
        for i in 0..leaf_count {
            let input = data.get_keccak_leaf(i);
            matrix.absorb_leaf(&input, i == leaf_count - 1);
            leaves.push(Leaf {
                input,
                index: U256::from(i),
                state_commitment: matrix.state_commitment(),
            });
        }

        let uuid = self.uuids.new_uuid().map_err(UploadError::UuidGeneration)?;
        self.init_large_preimage(uuid, data.oracle_offset, data.oracle_data.len() as u32)
            .await
            .map_err(|err| UploadError::Initialization { uuid, err })?;
        self.add_large_preimage_leaves(uuid, &leaves, false)
            .await
            .map_err(|err| UploadError::Submission { uuid, err })?;

        // TODO: track the challenge period once the full preimage is posted,
        // then squeeze the proposal out of the oracle. Until then a fully
        // streamed upload terminates here.
        Err(UploadError::NotSupported)
    }
}

impl<C, T, U> LargePreimageUploader<C, T, U>
where
    C: PreimageOracleContract + Send + Sync,
    T: TxSender + Send + Sync,
{
    /// Initializes the large preimage proposal. Must confirm before any
    /// leaves are added.
    async fn init_large_preimage(
        &self,
        uuid: U256,
        part_offset: u32,
        claimed_size: u32,
    ) -> anyhow::Result<()> {
        let candidate = self
            .contract
            .init_large_preimage(uuid, part_offset, claimed_size)
            .context("failed to create preimage oracle tx")?;
        send_tx_and_wait(&self.tx_sender, candidate)
            .await
            .context("failed to populate preimage oracle")?;
        Ok(())
    }

    /// Adds leaves to the proposal, one confirmed transaction at a time.
    /// Must only be called after `init_large_preimage` confirmed.
    async fn add_large_preimage_leaves(
        &self,
        uuid: U256,
        leaves: &[Leaf],
        finalize: bool,
    ) -> anyhow::Result<()> {
        let candidates = self
            .contract
            .add_leaves(uuid, leaves, finalize)
            .context("failed to create preimage oracle tx")?;
        for candidate in candidates {
            send_tx_and_wait(&self.tx_sender, candidate)
                .await
                .context("failed to populate preimage oracle")?;
        }
        Ok(())
    }
}
