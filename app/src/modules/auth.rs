//! Account registration module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::{BaseAccount, MemStore};

pub const MODULE_NAME: &str = "auth";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthParams {
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
}

impl Default for AuthParams {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            tx_sig_limit: 7,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGenesis {
    pub params: AuthParams,
    pub accounts: Vec<BaseAccount>,
}

impl AuthGenesis {
    /// Genesis block registering the given accounts with default params.
    pub fn with_accounts(accounts: Vec<BaseAccount>) -> Self {
        Self {
            params: AuthParams::default(),
            accounts,
        }
    }
}

pub struct AuthModule;

impl Module for AuthModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(AuthGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: AuthGenesis = decode_genesis(MODULE_NAME, genesis)?;
        for account in &genesis.accounts {
            if account.address.is_empty() {
                return Err(AppError::Genesis {
                    module: MODULE_NAME.to_string(),
                    reason: "account with empty address".to_string(),
                });
            }
        }
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        for account in genesis.accounts {
            store.put_account(account);
        }
        Ok(())
    }
}
