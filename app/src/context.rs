//! Execution contexts.

use helix_types::Timestamp;

/// A handle bound to a block height, chain id and timestamp, used for all
/// reads and writes against application state.
///
/// Created once at height 0 right after chain initialization. The context
/// itself is immutable; effects of keeper operations are visible through
/// the shared application store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecContext {
    pub height: u64,
    pub chain_id: String,
    pub time: Timestamp,
}

impl ExecContext {
    pub fn new(height: u64, chain_id: impl Into<String>, time: Timestamp) -> Self {
        Self {
            height,
            chain_id: chain_id.into(),
            time,
        }
    }
}
