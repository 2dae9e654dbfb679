//! The Helix application: module registry, chain initialization, and
//! keeper-style operations against the in-memory store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde_json::Value;
use tracing::{debug, info};

use helix_types::{AccountAddress, Coins, PublicKey, Timestamp, ValidatorSet};

use crate::context::ExecContext;
use crate::error::AppError;
use crate::module::Module;
use crate::modules::{
    auth, bank, staking, tokenfactory, AuthModule, BalanceRecord, BankGenesis, BankModule,
    ContractsModule, ExchangeModule, GenesisValidator, GovModule, MeteringModule, StakingGenesis,
    StakingModule, TokenfactoryModule,
};
use crate::store::{BaseAccount, MemStore};

/// The one module account allowed to mint during tests.
pub const MINT_AUTHORITY: &str = tokenfactory::MODULE_NAME;

/// The genesis document in structured form: module name -> genesis block.
///
/// `BTreeMap` so serialization order is deterministic across runs.
pub type GenesisState = BTreeMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockParams {
    pub max_bytes: i64,
    /// -1 means unlimited.
    pub max_gas: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub block: BlockParams,
}

/// A validator change delivered with the init request. The harness always
/// sends an empty list; validators come from genesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorUpdate {
    pub pub_key: PublicKey,
    pub power: u64,
}

pub struct InitChainRequest {
    pub chain_id: String,
    pub validators: Vec<ValidatorUpdate>,
    pub consensus_params: ConsensusParams,
    pub app_state_bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct InitChainResponse {
    /// Hash of the applied genesis payload, hex encoded.
    pub app_hash: String,
}

/// One in-memory application instance.
///
/// Owns its store exclusively; dropping the app releases all state. Not
/// intended to be shared across concurrent tests.
pub struct HelixApp {
    chain_id: String,
    store: MemStore,
    modules: Vec<Box<dyn Module>>,
    started: AtomicBool,
    consensus_params: Mutex<Option<ConsensusParams>>,
}

impl HelixApp {
    /// Construct an application with the standard module set.
    pub fn new(store: MemStore, chain_id: impl Into<String>) -> Self {
        let modules: Vec<Box<dyn Module>> = vec![
            Box::new(AuthModule),
            Box::new(BankModule),
            Box::new(StakingModule),
            Box::new(GovModule),
            Box::new(ContractsModule),
            Box::new(ExchangeModule),
            Box::new(MeteringModule),
            Box::new(TokenfactoryModule),
        ];
        Self {
            chain_id: chain_id.into(),
            store,
            modules,
            started: AtomicBool::new(false),
            consensus_params: Mutex::new(None),
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Names of every registered module, in registry order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Default genesis document: every module's default block.
    pub fn default_genesis(&self) -> GenesisState {
        self.modules
            .iter()
            .map(|m| (m.name().to_string(), m.default_genesis()))
            .collect()
    }

    /// Overlay a validator set, genesis accounts and balances onto a base
    /// genesis document.
    ///
    /// This is the standard "genesis with validator set" construction step:
    /// it rewrites the staking block with the given validators, the bank
    /// block with the given balances plus a matching supply, and the auth
    /// block with the given accounts.
    pub fn genesis_with_validators(
        &self,
        mut base: GenesisState,
        validator_set: &ValidatorSet,
        accounts: &[BaseAccount],
        balances: &[BalanceRecord],
    ) -> Result<GenesisState, AppError> {
        let validators = validator_set
            .validators
            .iter()
            .map(|v| GenesisValidator {
                operator_address: AccountAddress::operator_from_public_key(&v.pub_key)
                    .as_str()
                    .to_string(),
                consensus_pubkey: v.pub_key.to_hex(),
                power: v.power,
            })
            .collect();
        let staking_genesis = StakingGenesis {
            validators,
            ..StakingGenesis::default()
        };
        base.insert(
            staking::MODULE_NAME.to_string(),
            serde_json::json!(staking_genesis),
        );

        let mut supply = Coins::new();
        for record in balances {
            for coin in &record.coins {
                supply = supply.checked_push(coin.clone()).ok_or_else(|| {
                    AppError::Genesis {
                        module: bank::MODULE_NAME.to_string(),
                        reason: format!("supply overflow in {}", coin.denom),
                    }
                })?;
            }
        }
        let bank_genesis = BankGenesis {
            balances: balances.to_vec(),
            supply: supply.into_iter().collect(),
            ..BankGenesis::default()
        };
        base.insert(
            bank::MODULE_NAME.to_string(),
            serde_json::json!(bank_genesis),
        );

        let auth_genesis =
            crate::modules::AuthGenesis::with_accounts(accounts.to_vec());
        base.insert(
            auth::MODULE_NAME.to_string(),
            serde_json::json!(auth_genesis),
        );

        Ok(base)
    }

    /// Apply a genesis document and start the chain.
    ///
    /// Rejects a second initialization, a mismatched chain id, any
    /// top-level key with no registered module, and any registered module
    /// with no genesis block. Module imports run in registry order; the
    /// first failure aborts the whole call and the chain stays unstarted.
    pub fn init_chain(&self, req: InitChainRequest) -> Result<InitChainResponse, AppError> {
        if self.started.load(Ordering::SeqCst) {
            return Err(AppError::AlreadyInitialized);
        }
        if req.chain_id != self.chain_id {
            return Err(AppError::ChainIdMismatch {
                expected: self.chain_id.clone(),
                got: req.chain_id,
            });
        }

        let document: BTreeMap<String, Value> = serde_json::from_slice(&req.app_state_bytes)?;

        let registered: Vec<&str> = self.module_names();
        for key in document.keys() {
            if !registered.contains(&key.as_str()) {
                return Err(AppError::UnknownModule(key.clone()));
            }
        }
        for name in &registered {
            if !document.contains_key(*name) {
                return Err(AppError::MissingModule(name.to_string()));
            }
        }

        for module in &self.modules {
            let block = document
                .get(module.name())
                .cloned()
                .unwrap_or(Value::Null);
            debug!(module = module.name(), "importing module genesis");
            module.import_genesis(&self.store, block)?;
        }

        for update in &req.validators {
            self.store.push_validator(crate::store::StakedValidator {
                operator_address: AccountAddress::operator_from_public_key(&update.pub_key)
                    .as_str()
                    .to_string(),
                consensus_pubkey: update.pub_key.to_hex(),
                power: update.power,
            });
        }

        *self.consensus_params.lock().unwrap() = Some(req.consensus_params);
        self.started.store(true, Ordering::SeqCst);

        let app_hash = hash_hex(&req.app_state_bytes);
        info!(chain_id = %self.chain_id, %app_hash, "chain initialized");
        Ok(InitChainResponse { app_hash })
    }

    /// Build an execution context against this (started) application.
    pub fn context_at(&self, height: u64, time: Timestamp) -> Result<ExecContext, AppError> {
        self.ensure_started()?;
        Ok(ExecContext::new(height, self.chain_id.clone(), time))
    }

    pub fn consensus_params(&self) -> Option<ConsensusParams> {
        self.consensus_params.lock().unwrap().clone()
    }

    /// Mint coins into a module account. Only the designated mint
    /// authority may mint.
    pub fn mint_to_module(&self, module: &str, coins: &Coins) -> Result<(), AppError> {
        self.ensure_started()?;
        if module != MINT_AUTHORITY {
            return Err(AppError::UnauthorizedMint(module.to_string()));
        }
        let address = module_address(module);
        for coin in coins.iter() {
            if coin.denom.is_empty() {
                return Err(AppError::InvalidDenom(coin.denom.clone()));
            }
            self.store.add_balance(address.as_str(), &coin.denom, coin.amount)?;
            self.store.add_supply(&coin.denom, coin.amount)?;
        }
        Ok(())
    }

    /// Transfer coins from a module account to a user account.
    pub fn send_from_module(
        &self,
        module: &str,
        to: &AccountAddress,
        coins: &Coins,
    ) -> Result<(), AppError> {
        self.ensure_started()?;
        let from = module_address(module);
        for coin in coins.iter() {
            self.store.sub_balance(from.as_str(), &coin.denom, coin.amount)?;
            self.store.add_balance(to.as_str(), &coin.denom, coin.amount)?;
        }
        Ok(())
    }

    /// Balance held by an address in one denomination.
    pub fn balance_of(&self, address: &AccountAddress, denom: &str) -> Result<u128, AppError> {
        self.ensure_started()?;
        Ok(self.store.balance(address.as_str(), denom))
    }

    /// The full validator set, in store order.
    pub fn all_validators(&self) -> Result<Vec<crate::store::StakedValidator>, AppError> {
        self.ensure_started()?;
        Ok(self.store.validators())
    }

    /// A module's current parameter set in JSON form.
    pub fn module_params(&self, module: &str) -> Result<Value, AppError> {
        self.ensure_started()?;
        self.store
            .params(module)
            .ok_or_else(|| AppError::UnknownModule(module.to_string()))
    }

    fn ensure_started(&self) -> Result<(), AppError> {
        if self.started.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::NotInitialized)
        }
    }
}

/// Deterministic address of a module-owned account.
pub fn module_address(module: &str) -> AccountAddress {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(b"module/");
    hasher.update(module.as_bytes());
    let digest = hasher.finalize();
    AccountAddress::new(format!(
        "{}{}",
        AccountAddress::PREFIX,
        hex::encode(&digest[..20])
    ))
}

fn hash_hex(bytes: &[u8]) -> String {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CHAIN: &str = "helix-777";

    fn consensus_params() -> ConsensusParams {
        ConsensusParams {
            block: BlockParams {
                max_bytes: 22_020_096,
                max_gas: -1,
            },
        }
    }

    fn init_request(app: &HelixApp) -> InitChainRequest {
        let genesis = app.default_genesis();
        InitChainRequest {
            chain_id: TEST_CHAIN.to_string(),
            validators: vec![],
            consensus_params: consensus_params(),
            app_state_bytes: serde_json::to_vec(&genesis).unwrap(),
        }
    }

    fn started_app() -> HelixApp {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let req = init_request(&app);
        app.init_chain(req).unwrap();
        app
    }

    #[test]
    fn init_with_default_genesis_succeeds() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let resp = app.init_chain(init_request(&app)).unwrap();
        assert_eq!(resp.app_hash.len(), 64);
        assert!(app.consensus_params().is_some());
    }

    #[test]
    fn double_init_fails() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        app.init_chain(init_request(&app)).unwrap();
        let err = app.init_chain(init_request(&app)).unwrap_err();
        assert!(matches!(err, AppError::AlreadyInitialized));
    }

    #[test]
    fn chain_id_mismatch_fails() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let mut req = init_request(&app);
        req.chain_id = "helix-1".to_string();
        let err = app.init_chain(req).unwrap_err();
        assert!(matches!(err, AppError::ChainIdMismatch { .. }));
    }

    #[test]
    fn unknown_module_key_fails() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let mut genesis = app.default_genesis();
        genesis.insert("oracle".to_string(), serde_json::json!({}));
        let req = InitChainRequest {
            chain_id: TEST_CHAIN.to_string(),
            validators: vec![],
            consensus_params: consensus_params(),
            app_state_bytes: serde_json::to_vec(&genesis).unwrap(),
        };
        let err = app.init_chain(req).unwrap_err();
        assert!(matches!(err, AppError::UnknownModule(name) if name == "oracle"));
    }

    #[test]
    fn missing_module_key_fails() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let mut genesis = app.default_genesis();
        genesis.remove("gov");
        let req = InitChainRequest {
            chain_id: TEST_CHAIN.to_string(),
            validators: vec![],
            consensus_params: consensus_params(),
            app_state_bytes: serde_json::to_vec(&genesis).unwrap(),
        };
        let err = app.init_chain(req).unwrap_err();
        assert!(matches!(err, AppError::MissingModule(name) if name == "gov"));
    }

    #[test]
    fn keeper_ops_require_started_chain() {
        let app = HelixApp::new(MemStore::new(), TEST_CHAIN);
        let err = app.all_validators().unwrap_err();
        assert!(matches!(err, AppError::NotInitialized));
    }

    #[test]
    fn only_mint_authority_may_mint() {
        let app = started_app();
        let coins = Coins::single(100, "inj");
        let err = app.mint_to_module("bank", &coins).unwrap_err();
        assert!(matches!(err, AppError::UnauthorizedMint(_)));
        app.mint_to_module(MINT_AUTHORITY, &coins).unwrap();
    }

    #[test]
    fn mint_then_send_credits_target() {
        let app = started_app();
        let coins = Coins::single(1_000_000, "inj");
        let target = AccountAddress::from_public_key(&PublicKey([5; 32]));
        app.mint_to_module(MINT_AUTHORITY, &coins).unwrap();
        app.send_from_module(MINT_AUTHORITY, &target, &coins).unwrap();
        assert_eq!(app.balance_of(&target, "inj").unwrap(), 1_000_000);
    }

    #[test]
    fn send_without_float_fails() {
        let app = started_app();
        let coins = Coins::single(1, "inj");
        let target = AccountAddress::from_public_key(&PublicKey([5; 32]));
        let err = app
            .send_from_module(MINT_AUTHORITY, &target, &coins)
            .unwrap_err();
        assert!(matches!(err, AppError::InsufficientFunds { .. }));
    }

    #[test]
    fn module_address_is_stable() {
        assert_eq!(module_address("tokenfactory"), module_address("tokenfactory"));
        assert_ne!(module_address("tokenfactory"), module_address("bank"));
    }
}
