//! Uploaders that publish preimage data to the on-chain preimage oracle.
//!
//! Small preimages fit in a single oracle call. Anything larger is streamed
//! as an ordered sequence of 136-byte leaves, each carrying a commitment to
//! the keccak sponge state after its absorption, so the oracle can verify
//! any single block without trusting the submitter.
//!
//! Contract call construction and transaction broadcast are consumed behind
//! the [PreimageOracleContract] and [TxSender] traits; this crate only owns
//! merkleization and submission ordering.

mod contract;
mod direct;
mod errors;
mod large;
mod split;
mod txmgr;
mod uuid;

#[cfg(test)]
pub(crate) mod fakes;

pub use contract::{LargePreimageMetaData, Leaf, PreimageOracleContract};
pub use direct::DirectPreimageUploader;
pub use errors::UploadError;
pub use large::LargePreimageUploader;
pub use split::SplitPreimageUploader;
pub use txmgr::{TxCandidate, TxReceipt, TxSender, TxStatus};
pub use uuid::{RandomUuidSource, UuidSource};

use async_trait::async_trait;
use waimea_types::PreimageOracleData;

/// Publishes a preimage to the oracle so the claim at `parent_claim_index`
/// can later be countered with reference to it.
#[async_trait]
pub trait PreimageUploader {
    /// Uploads `data` to the preimage oracle, blocking until every required
    /// transaction reaches a terminal mined outcome.
    ///
    /// Every suspension point is an `.await` on a collaborator call, so a
    /// caller can cancel by dropping the future; transactions already
    /// broadcast may still mine afterwards.
    async fn upload_preimage(
        &self,
        parent_claim_index: u64,
        data: &PreimageOracleData,
    ) -> Result<(), UploadError>;
}
