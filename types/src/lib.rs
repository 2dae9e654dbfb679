//! Chain-level value types for the Helix test chain.
//!
//! Everything here is plain data: keys, addresses, coin amounts, validator
//! descriptors and timestamps. No I/O, no global state. The bond
//! denomination is threaded explicitly through every consumer instead of
//! living in a process-wide default.

pub mod address;
pub mod chain;
pub mod coin;
pub mod keys;
pub mod time;
pub mod validator;

pub use address::AccountAddress;
pub use chain::{CHAIN_ID, DEFAULT_BOND_DENOM, PLACEHOLDER_DENOM};
pub use coin::{Coin, Coins};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use time::Timestamp;
pub use validator::{ValidatorDescriptor, ValidatorSet};
