use alloy_primitives::U256;

/// Errors surfaced by the preimage uploaders.
///
/// A mined-but-reverted transaction is deliberately absent from this
/// taxonomy: it is logged where the receipt is observed and treated as
/// non-fatal (see `send_tx_and_wait`).
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The entropy source failed while allocating a proposal identifier.
    /// Raised before any on-chain interaction.
    #[error("failed to generate uuid: {0}")]
    UuidGeneration(anyhow::Error),
    /// Building, sending or confirming the proposal initialization failed.
    /// The initialization call is atomic, so no partial on-chain state
    /// results.
    #[error("failed to initialize large preimage with uuid {uuid}: {err}")]
    Initialization {
        /// Identifier of the proposal that failed to initialize.
        uuid: U256,
        /// The underlying build/send/confirm failure.
        err: anyhow::Error,
    },
    /// Building, sending or confirming a leaf transmission failed. Leaf
    /// batches confirmed before the failure stay on-chain; no resumption
    /// state is kept, so a retry must start a new proposal under a fresh
    /// uuid.
    #[error("failed to add leaves to large preimage with uuid {uuid}: {err}")]
    Submission {
        /// Identifier of the proposal the leaves belonged to.
        uuid: U256,
        /// The underlying build/send/confirm failure.
        err: anyhow::Error,
    },
    /// Building, sending or confirming a direct global data load failed.
    #[error("failed to load global data: {0}")]
    GlobalData(anyhow::Error),
    /// Streaming completed; finalizing the proposal after the challenge
    /// period is not implemented, so a fully streamed upload terminates
    /// with this outcome by design.
    #[error("not supported")]
    NotSupported,
}
