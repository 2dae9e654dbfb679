//! Thread-safe in-memory application store.
//!
//! One `Mutex<HashMap>` per state domain. Nothing here touches disk; the
//! whole store is released when the owning application is dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::AppError;

/// A basic on-chain account as registered by the auth module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    pub address: String,
    pub account_number: u64,
    pub sequence: u64,
}

impl BaseAccount {
    pub fn new(address: impl Into<String>, account_number: u64) -> Self {
        Self {
            address: address.into(),
            account_number,
            sequence: 0,
        }
    }
}

/// A validator as recorded in staking state after genesis import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakedValidator {
    pub operator_address: String,
    pub consensus_pubkey: String,
    pub power: u64,
}

/// In-memory store backing one application instance.
pub struct MemStore {
    /// (address, denom) -> amount.
    balances: Mutex<HashMap<(String, String), u128>>,
    /// denom -> total supply.
    supply: Mutex<HashMap<String, u128>>,
    /// address -> account record.
    accounts: Mutex<HashMap<String, BaseAccount>>,
    /// Validator set in import order.
    validators: Mutex<Vec<StakedValidator>>,
    /// module name -> current parameter set (JSON form).
    params: Mutex<HashMap<String, Value>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            supply: Mutex::new(HashMap::new()),
            accounts: Mutex::new(HashMap::new()),
            validators: Mutex::new(Vec::new()),
            params: Mutex::new(HashMap::new()),
        }
    }

    pub fn balance(&self, address: &str, denom: &str) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(&(address.to_string(), denom.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Credit an address, failing on u128 overflow.
    pub fn add_balance(&self, address: &str, denom: &str, amount: u128) -> Result<(), AppError> {
        let mut balances = self.balances.lock().unwrap();
        let entry = balances
            .entry((address.to_string(), denom.to_string()))
            .or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| AppError::BalanceOverflow {
                address: address.to_string(),
                denom: denom.to_string(),
            })?;
        Ok(())
    }

    /// Debit an address, failing when the held amount is insufficient.
    pub fn sub_balance(&self, address: &str, denom: &str, amount: u128) -> Result<(), AppError> {
        let mut balances = self.balances.lock().unwrap();
        let key = (address.to_string(), denom.to_string());
        let held = balances.get(&key).copied().unwrap_or(0);
        if held < amount {
            return Err(AppError::InsufficientFunds {
                address: address.to_string(),
                denom: denom.to_string(),
                held,
                needed: amount,
            });
        }
        balances.insert(key, held - amount);
        Ok(())
    }

    pub fn add_supply(&self, denom: &str, amount: u128) -> Result<(), AppError> {
        let mut supply = self.supply.lock().unwrap();
        let entry = supply.entry(denom.to_string()).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| AppError::BalanceOverflow {
                address: "supply".to_string(),
                denom: denom.to_string(),
            })?;
        Ok(())
    }

    pub fn supply_of(&self, denom: &str) -> u128 {
        self.supply.lock().unwrap().get(denom).copied().unwrap_or(0)
    }

    pub fn put_account(&self, account: BaseAccount) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.address.clone(), account);
    }

    pub fn account(&self, address: &str) -> Option<BaseAccount> {
        self.accounts.lock().unwrap().get(address).cloned()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn push_validator(&self, validator: StakedValidator) {
        self.validators.lock().unwrap().push(validator);
    }

    /// Validator set in the order it was imported.
    pub fn validators(&self) -> Vec<StakedValidator> {
        self.validators.lock().unwrap().clone()
    }

    pub fn set_params(&self, module: &str, params: Value) {
        self.params.lock().unwrap().insert(module.to_string(), params);
    }

    pub fn params(&self, module: &str) -> Option<Value> {
        self.params.lock().unwrap().get(module).cloned()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}
