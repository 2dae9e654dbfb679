//! Execution gas metering parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "metering";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringParams {
    pub is_execution_enabled: bool,
    /// Gas ceiling for all begin-block contract execution combined.
    pub max_begin_block_total_gas: u64,
    /// Gas ceiling for a single contract call.
    pub max_contract_gas_limit: u64,
    pub min_gas_price: u64,
}

impl Default for MeteringParams {
    fn default() -> Self {
        Self {
            is_execution_enabled: false,
            max_begin_block_total_gas: 0,
            max_contract_gas_limit: 0,
            min_gas_price: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringGenesis {
    pub params: MeteringParams,
}

pub struct MeteringModule;

impl Module for MeteringModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(MeteringGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: MeteringGenesis = decode_genesis(MODULE_NAME, genesis)?;
        if genesis.params.is_execution_enabled && genesis.params.max_contract_gas_limit == 0 {
            return Err(AppError::Genesis {
                module: MODULE_NAME.to_string(),
                reason: "execution enabled with zero contract gas limit".to_string(),
            });
        }
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_execution_requires_gas_limit() {
        let store = MemStore::new();
        let genesis = MeteringGenesis {
            params: MeteringParams {
                is_execution_enabled: true,
                ..MeteringParams::default()
            },
        };
        let err = MeteringModule
            .import_genesis(&store, serde_json::json!(genesis))
            .unwrap_err();
        assert!(matches!(err, AppError::Genesis { .. }));
    }
}
