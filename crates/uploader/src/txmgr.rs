use alloy_primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use tracing::{debug, warn};

/// An unsigned transaction candidate produced by a contract binding.
///
/// Opaque to the uploaders: gas limits, pricing and nonces are filled in by
/// the sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxCandidate {
    /// ABI-encoded calldata.
    pub tx_data: Bytes,
    /// Target contract, or `None` for a contract creation.
    pub to: Option<Address>,
    /// Attached value.
    pub value: U256,
}

/// Terminal status of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// The transaction executed successfully.
    Success,
    /// The transaction mined but reverted.
    Reverted,
}

/// Receipt for a transaction that reached a terminal mined outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    /// Execution status.
    pub status: TxStatus,
    /// Hash of the mined transaction.
    pub tx_hash: B256,
}

/// Broadcasts transaction candidates and waits for them to mine.
///
/// Retry policy, gas estimation and nonce allocation all live behind this
/// trait; the uploaders never retry on their own.
#[async_trait]
pub trait TxSender {
    /// Sends `candidate` and blocks until it mines or terminally fails.
    async fn send(&self, candidate: TxCandidate) -> anyhow::Result<TxReceipt>;
}

/// Sends a candidate and waits for it to mine.
///
/// Policy point: a mined-but-reverted transaction is logged at warn level
/// and not escalated. The preimage was published even though the call
/// reverted, and the uploaders treat that as observable-but-non-fatal.
pub(crate) async fn send_tx_and_wait<T: TxSender + Sync>(
    sender: &T,
    candidate: TxCandidate,
) -> anyhow::Result<()> {
    let receipt = sender.send(candidate).await?;
    match receipt.status {
        TxStatus::Reverted => {
            warn!(
                target: "preimage-uploader",
                tx_hash = %receipt.tx_hash,
                "preimage tx successfully published but reverted"
            );
        }
        TxStatus::Success => {
            debug!(
                target: "preimage-uploader",
                tx_hash = %receipt.tx_hash,
                "preimage tx successfully published"
            );
        }
    }
    Ok(())
}
