use alloy_primitives::U256;
use anyhow::Context;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Source of large preimage proposal identifiers.
///
/// Identifiers are random today, which makes an interrupted upload
/// unresumable; a deterministic derivation would fix that, so the strategy
/// stays behind this trait until one is settled.
pub trait UuidSource {
    /// Draws a fresh proposal identifier in `[0, 2^130)`.
    ///
    /// No uniqueness check is performed: a collision is treated as
    /// cryptographically negligible and would be rejected by the contract.
    fn new_uuid(&self) -> anyhow::Result<U256>;
}

/// Draws uniformly random identifiers from the operating system entropy
/// pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidSource;

impl UuidSource for RandomUuidSource {
    fn new_uuid(&self) -> anyhow::Result<U256> {
        let mut raw = [0u8; 17];
        OsRng
            .try_fill_bytes(&mut raw)
            .context("failed to read entropy for proposal uuid")?;
        // 17 bytes carry 136 random bits; keep the low 130.
        raw[0] &= 0x03;
        Ok(U256::from_be_slice(&raw))
    }
}
