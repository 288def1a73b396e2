//! Core data model for streaming large preimages to the preimage oracle.

mod position;
mod preimage;

pub use position::Position;
pub use preimage::PreimageOracleData;

/// The absorption rate of the keccak-256 sponge. Preimages are streamed to
/// the oracle in blocks of exactly this many bytes.
pub const KECCAK_BLOCK_SIZE_BYTES: usize = 136;
