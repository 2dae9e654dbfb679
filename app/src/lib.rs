//! In-memory Helix ledger application.
//!
//! A minimal Cosmos-style state machine for integration testing: a module
//! registry where every module owns a default genesis block and a
//! genesis-import routine, an in-memory store, and keeper-style operations
//! (mint, transfer, balance and validator queries, parameter lookup).
//!
//! The application holds no global mutable defaults: the bond denomination
//! and chain identifier are plain values threaded in by the caller.

pub mod app;
pub mod context;
pub mod error;
pub mod module;
pub mod modules;
pub mod store;

pub use app::{
    BlockParams, ConsensusParams, GenesisState, HelixApp, InitChainRequest, InitChainResponse,
    ValidatorUpdate, MINT_AUTHORITY,
};
pub use context::ExecContext;
pub use error::AppError;
pub use module::Module;
pub use store::{BaseAccount, MemStore, StakedValidator};
