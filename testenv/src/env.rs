//! The test environment facade.
//!
//! The object tests interact with: owns the application instance, the
//! root execution context, the parameter-type registry and the generated
//! key material for the lifetime of one test.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::debug;

use helix_app::modules::tokenfactory;
use helix_app::{AppError, ExecContext, HelixApp, MINT_AUTHORITY};
use helix_types::{AccountAddress, Coins, KeyPair, PrivateKey};

use crate::config::AppConfig;
use crate::error::SetupError;
use crate::factory::new_helix_app;
use crate::genesis::{assemble_genesis, GenesisOptions};
use crate::init::init_chain;
use crate::params::ParamTypeRegistry;

pub struct TestEnv {
    app: HelixApp,
    ctx: ExecContext,
    param_types: ParamTypeRegistry,
    validator_key: KeyPair,
    account_key: KeyPair,
    account_address: AccountAddress,
    bond_denom: String,
    node_home: PathBuf,
}

impl TestEnv {
    /// Bootstrap a fresh test chain with default options.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, SetupError> {
        Self::bootstrap_with(config, GenesisOptions::default())
    }

    /// Bootstrap a fresh test chain.
    ///
    /// Runs the whole pipeline once: construct the application, assemble
    /// genesis, initialize the chain, derive the root context. Every
    /// failure is returned as a structured [`SetupError`]; nothing is
    /// retried and no partially initialized environment escapes.
    pub fn bootstrap_with(
        config: &AppConfig,
        options: GenesisOptions,
    ) -> Result<Self, SetupError> {
        let app = new_helix_app(config);
        let genesis = assemble_genesis(&app, &options)?;
        let ctx = init_chain(&app, genesis.state_bytes)?;
        debug!(account = %genesis.account_address, "test environment ready");

        let mut env = Self {
            app,
            ctx,
            param_types: ParamTypeRegistry::new(),
            validator_key: genesis.validator_key,
            account_key: genesis.account_key,
            account_address: genesis.account_address,
            bond_denom: options.bond_denom,
            node_home: config.home.clone(),
        };
        env.setup_param_types();
        Ok(env)
    }

    /// Register the parameter-set types known out of the box.
    fn setup_param_types(&mut self) {
        self.param_types
            .register::<tokenfactory::TokenfactoryParams>(tokenfactory::MODULE_NAME);
    }

    /// Register an additional module parameter-set type. Re-registering a
    /// module overwrites the previous decoder.
    pub fn register_param_type<P>(&mut self, module: &str)
    where
        P: DeserializeOwned + 'static,
    {
        self.param_types.register::<P>(module);
    }

    /// Read a module's current parameter set through the registry.
    pub fn params<P: 'static>(&self, module: &str) -> Result<P, SetupError> {
        let value = self.app.module_params(module)?;
        self.param_types.decode(module, value)
    }

    /// Fund an account: mint into the designated minting authority, then
    /// transfer to the target. Two steps because no module is pre-seeded
    /// with spendable float. Errors are returned to the caller, not
    /// swallowed.
    pub fn fund_account(&self, address: &AccountAddress, coins: &Coins) -> Result<(), AppError> {
        self.app.mint_to_module(MINT_AUTHORITY, coins)?;
        self.app.send_from_module(MINT_AUTHORITY, address, coins)
    }

    /// Balance of an address in one denomination.
    pub fn balance(&self, address: &AccountAddress, denom: &str) -> Result<u128, AppError> {
        self.app.balance_of(address, denom)
    }

    /// Operator addresses of the full validator set, in store order.
    pub fn validator_addresses(&self) -> Result<Vec<String>, SetupError> {
        let validators = self.app.all_validators()?;
        Ok(validators
            .into_iter()
            .map(|v| v.operator_address)
            .collect())
    }

    /// Private key of the generated validator.
    pub fn validator_private_key(&self) -> &PrivateKey {
        &self.validator_key.private
    }

    /// The pre-funded test account generated at bootstrap.
    pub fn funded_account(&self) -> (&AccountAddress, &KeyPair) {
        (&self.account_address, &self.account_key)
    }

    pub fn app(&self) -> &HelixApp {
        &self.app
    }

    pub fn ctx(&self) -> &ExecContext {
        &self.ctx
    }

    pub fn bond_denom(&self) -> &str {
        &self.bond_denom
    }

    /// Home directory the environment was configured with. Accepted but
    /// never written to; kept for interface compatibility.
    pub fn node_home(&self) -> &PathBuf {
        &self.node_home
    }
}
