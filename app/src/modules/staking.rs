//! Validator set and bonding parameters.

use helix_types::PLACEHOLDER_DENOM;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::{MemStore, StakedValidator};

pub const MODULE_NAME: &str = "staking";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    pub unbonding_time_secs: u64,
    pub max_validators: u32,
    /// Framework default is the placeholder denom; the genesis assembler
    /// patches this to the configured bond denom before init.
    pub bond_denom: String,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            unbonding_time_secs: 1_814_400, // 21 days
            max_validators: 100,
            bond_denom: PLACEHOLDER_DENOM.to_string(),
        }
    }
}

/// A validator as written into genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub operator_address: String,
    /// Hex-encoded consensus public key.
    pub consensus_pubkey: String,
    pub power: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingGenesis {
    pub params: StakingParams,
    pub validators: Vec<GenesisValidator>,
}

pub struct StakingModule;

impl Module for StakingModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(StakingGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: StakingGenesis = decode_genesis(MODULE_NAME, genesis)?;
        if genesis.params.bond_denom.is_empty() {
            return Err(AppError::InvalidDenom(genesis.params.bond_denom));
        }
        for validator in &genesis.validators {
            if validator.power == 0 {
                return Err(AppError::Genesis {
                    module: MODULE_NAME.to_string(),
                    reason: format!(
                        "validator {} has zero voting power",
                        validator.operator_address
                    ),
                });
            }
        }
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        for validator in genesis.validators {
            store.push_validator(StakedValidator {
                operator_address: validator.operator_address,
                consensus_pubkey: validator.consensus_pubkey,
                power: validator.power,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_validator(power: u64) -> StakingGenesis {
        StakingGenesis {
            params: StakingParams::default(),
            validators: vec![GenesisValidator {
                operator_address: "helixvaloper1abc".to_string(),
                consensus_pubkey: "00".repeat(32),
                power,
            }],
        }
    }

    #[test]
    fn import_records_validators() {
        let store = MemStore::new();
        StakingModule
            .import_genesis(&store, serde_json::json!(one_validator(1)))
            .unwrap();
        let validators = store.validators();
        assert_eq!(validators.len(), 1);
        assert_eq!(validators[0].power, 1);
    }

    #[test]
    fn zero_power_validator_rejected() {
        let store = MemStore::new();
        let err = StakingModule
            .import_genesis(&store, serde_json::json!(one_validator(0)))
            .unwrap_err();
        assert!(matches!(err, AppError::Genesis { .. }));
    }

    #[test]
    fn default_bond_denom_is_placeholder() {
        assert_eq!(StakingParams::default().bond_denom, PLACEHOLDER_DENOM);
    }
}
