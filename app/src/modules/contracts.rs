//! Smart-contract module parameters.
//!
//! Only the permission surface matters to the harness: tests must be able
//! to upload and instantiate contracts without a governance proposal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "contracts";

/// Who may perform a permissioned contract operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    Nobody,
    Everybody,
    Governance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsParams {
    pub code_upload_access: AccessType,
    pub instantiate_default_permission: AccessType,
}

impl Default for ContractsParams {
    fn default() -> Self {
        // Framework default: uploads gated behind governance.
        Self {
            code_upload_access: AccessType::Governance,
            instantiate_default_permission: AccessType::Governance,
        }
    }
}

impl ContractsParams {
    /// Permissive params for test chains: anyone may upload and instantiate.
    pub fn allow_everybody() -> Self {
        Self {
            code_upload_access: AccessType::Everybody,
            instantiate_default_permission: AccessType::Everybody,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsGenesis {
    pub params: ContractsParams,
}

pub struct ContractsModule;

impl Module for ContractsModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(ContractsGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: ContractsGenesis = decode_genesis(MODULE_NAME, genesis)?;
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_everybody_is_permissive() {
        let params = ContractsParams::allow_everybody();
        assert_eq!(params.code_upload_access, AccessType::Everybody);
        assert_eq!(params.instantiate_default_permission, AccessType::Everybody);
    }

    #[test]
    fn access_type_serializes_snake_case() {
        let json = serde_json::to_string(&AccessType::Everybody).unwrap();
        assert_eq!(json, "\"everybody\"");
    }
}
