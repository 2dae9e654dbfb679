//! Balances and supply.

use helix_types::Coin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "bank";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankParams {
    pub default_send_enabled: bool,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            default_send_enabled: true,
        }
    }
}

/// One address and the coins it holds at genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub address: String,
    pub coins: Vec<Coin>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankGenesis {
    pub params: BankParams,
    pub balances: Vec<BalanceRecord>,
    pub supply: Vec<Coin>,
}

pub struct BankModule;

impl Module for BankModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(BankGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: BankGenesis = decode_genesis(MODULE_NAME, genesis)?;
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        for record in genesis.balances {
            for coin in record.coins {
                if coin.denom.is_empty() {
                    return Err(AppError::InvalidDenom(coin.denom));
                }
                store.add_balance(&record.address, &coin.denom, coin.amount)?;
            }
        }
        for coin in genesis.supply {
            store.add_supply(&coin.denom, coin.amount)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_credits_balances_and_supply() {
        let store = MemStore::new();
        let genesis = BankGenesis {
            params: BankParams::default(),
            balances: vec![BalanceRecord {
                address: "helix1aaa".to_string(),
                coins: vec![Coin::new(42, "inj")],
            }],
            supply: vec![Coin::new(42, "inj")],
        };
        BankModule
            .import_genesis(&store, serde_json::json!(genesis))
            .unwrap();
        assert_eq!(store.balance("helix1aaa", "inj"), 42);
        assert_eq!(store.supply_of("inj"), 42);
    }

    #[test]
    fn empty_denom_rejected() {
        let store = MemStore::new();
        let genesis = BankGenesis {
            params: BankParams::default(),
            balances: vec![BalanceRecord {
                address: "helix1aaa".to_string(),
                coins: vec![Coin::new(1, "")],
            }],
            supply: vec![],
        };
        let err = BankModule
            .import_genesis(&store, serde_json::json!(genesis))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDenom(_)));
    }
}
