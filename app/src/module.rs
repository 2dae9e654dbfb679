//! The module abstraction.
//!
//! Every unit of application logic (auth, bank, staking, ...) implements
//! this trait. The application's module registry drives genesis import and
//! defines the set of top-level keys a genesis document must carry.

use serde_json::Value;

use crate::error::AppError;
use crate::store::MemStore;

pub trait Module: Send + Sync {
    /// Module identifier; the top-level key in the genesis document.
    fn name(&self) -> &'static str;

    /// Default genesis block for this module, ready to serialize.
    fn default_genesis(&self) -> Value;

    /// Import this module's genesis block into application state.
    ///
    /// Called exactly once per chain, during `init_chain`. Implementations
    /// must validate their own invariants and fail loudly; a partial import
    /// leaves the chain unusable.
    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError>;
}

/// Decode a module genesis value, mapping serde failures to a
/// module-attributed genesis error.
pub(crate) fn decode_genesis<T: serde::de::DeserializeOwned>(
    module: &str,
    genesis: Value,
) -> Result<T, AppError> {
    serde_json::from_value(genesis).map_err(|e| AppError::Genesis {
        module: module.to_string(),
        reason: e.to_string(),
    })
}
