use anyhow::Context;
use async_trait::async_trait;
use waimea_types::PreimageOracleData;

use crate::contract::PreimageOracleContract;
use crate::errors::UploadError;
use crate::txmgr::{send_tx_and_wait, TxSender};
use crate::PreimageUploader;

/// Uploads preimages that fit in a single transaction directly to the
/// preimage oracle.
#[derive(Debug)]
pub struct DirectPreimageUploader<C, T> {
    pub(crate) contract: C,
    pub(crate) tx_sender: T,
}

impl<C, T> DirectPreimageUploader<C, T> {
    /// Creates a new [DirectPreimageUploader] over the given collaborators.
    pub const fn new(contract: C, tx_sender: T) -> Self {
        Self {
            contract,
            tx_sender,
        }
    }
}

#[async_trait]
impl<C, T> PreimageUploader for DirectPreimageUploader<C, T>
where
    C: PreimageOracleContract + Send + Sync,
    T: TxSender + Send + Sync,
{
    async fn upload_preimage(
        &self,
        _parent_claim_index: u64,
        data: &PreimageOracleData,
    ) -> Result<(), UploadError> {
        let candidate = self
            .contract
            .add_global_data_tx(data)
            .context("failed to create preimage oracle tx")
            .map_err(UploadError::GlobalData)?;
        send_tx_and_wait(&self.tx_sender, candidate)
            .await
            .context("failed to populate preimage oracle")
            .map_err(UploadError::GlobalData)?;
        Ok(())
    }
}
