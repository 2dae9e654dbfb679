//! Token factory module.
//!
//! The harness uses this module's account as the designated minting
//! authority when funding test accounts.

use helix_types::{Coin, PLACEHOLDER_DENOM};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "tokenfactory";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenfactoryParams {
    pub denom_creation_fee: Vec<Coin>,
}

impl Default for TokenfactoryParams {
    fn default() -> Self {
        Self {
            denom_creation_fee: vec![Coin::new(10_000_000, PLACEHOLDER_DENOM)],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenfactoryGenesis {
    pub params: TokenfactoryParams,
}

pub struct TokenfactoryModule;

impl Module for TokenfactoryModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(TokenfactoryGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: TokenfactoryGenesis = decode_genesis(MODULE_NAME, genesis)?;
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        Ok(())
    }
}
