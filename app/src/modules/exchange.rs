//! Exchange (market) module parameters.

use helix_types::{Coin, PLACEHOLDER_DENOM};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "exchange";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeParams {
    /// Fee charged to list a new market.
    pub market_listing_fee: Coin,
    /// Denomination markets quote against by default.
    pub default_quote_denom: String,
    /// When set, derivative markets launch immediately instead of waiting
    /// for a governance-scheduled activation.
    pub is_instant_market_launch_enabled: bool,
}

impl Default for ExchangeParams {
    fn default() -> Self {
        Self {
            market_listing_fee: Coin::new(1_000_000, PLACEHOLDER_DENOM),
            default_quote_denom: PLACEHOLDER_DENOM.to_string(),
            is_instant_market_launch_enabled: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeGenesis {
    pub params: ExchangeParams,
}

pub struct ExchangeModule;

impl Module for ExchangeModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(ExchangeGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: ExchangeGenesis = decode_genesis(MODULE_NAME, genesis)?;
        if genesis.params.default_quote_denom.is_empty() {
            return Err(AppError::InvalidDenom(genesis.params.default_quote_denom));
        }
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        Ok(())
    }
}
