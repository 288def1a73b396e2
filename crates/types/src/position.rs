use alloy_primitives::U256;

/// A position in a complete binary tree, encoded as a generalized index:
/// the root is 1 and the children of node `n` are `2n` and `2n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(U256);

impl Position {
    /// Creates a [Position] from a generalized index.
    pub const fn from_gindex(gindex: U256) -> Self {
        Self(gindex)
    }

    /// The generalized index of this position.
    pub const fn gindex(&self) -> U256 {
        self.0
    }

    /// Whether this position is the root of the tree. The zero index is
    /// accepted as a root alias alongside the canonical index 1; it never
    /// addresses a valid non-root node.
    pub fn is_root_position(&self) -> bool {
        self.0 <= U256::from(1)
    }
}

impl From<U256> for Position {
    fn from(gindex: U256) -> Self {
        Self::from_gindex(gindex)
    }
}
