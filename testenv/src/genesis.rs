//! Genesis assembly.
//!
//! Builds the complete genesis document for a single-validator test
//! chain: one freshly generated validator with voting power 1, one
//! funded test account, and per-module parameter overrides applied
//! before serialization — the pipeline is write-once, so there is no
//! post-init mutation path for any of this.

use serde_json::Value;
use tracing::debug;

use helix_app::modules::{
    contracts, exchange, gov, metering, BalanceRecord, ContractsGenesis, ContractsParams,
    ExchangeGenesis, ExchangeParams, GovGenesis, GovParams, MeteringGenesis, MeteringParams,
};
use helix_app::{BaseAccount, HelixApp};
use helix_types::{
    AccountAddress, Coin, KeyPair, ValidatorDescriptor, ValidatorSet, DEFAULT_BOND_DENOM,
    PLACEHOLDER_DENOM,
};

use crate::error::SetupError;
use crate::keygen::generate_keypair;

/// Tunables for genesis assembly.
#[derive(Clone, Debug)]
pub struct GenesisOptions {
    /// Bond denomination, threaded explicitly everywhere a denomination
    /// appears (no process-wide default).
    pub bond_denom: String,
    /// Opening balance credited to the generated test account.
    pub initial_balance: u128,
    /// Governance voting period; short so tests never wait on a window.
    pub voting_period_secs: u64,
}

impl Default for GenesisOptions {
    fn default() -> Self {
        Self {
            bond_denom: DEFAULT_BOND_DENOM.to_string(),
            initial_balance: 100_000_000_000_000, // 10^14
            voting_period_secs: 10,
        }
    }
}

/// Output of genesis assembly: the serialized document plus the key
/// material generated along the way.
pub struct AssembledGenesis {
    /// Indented JSON genesis document, ready for the init request.
    pub state_bytes: Vec<u8>,
    pub validator_set: ValidatorSet,
    pub validator_key: KeyPair,
    pub account_key: KeyPair,
    /// Address of the funded test account.
    pub account_address: AccountAddress,
}

/// Assemble a genesis document for the given application.
///
/// The validator identity and the funded test account are distinct keys.
/// Every error is fatal for the bootstrap; there is no partial genesis.
pub fn assemble_genesis(
    app: &HelixApp,
    options: &GenesisOptions,
) -> Result<AssembledGenesis, SetupError> {
    let validator_key = generate_keypair();
    let account_key = generate_keypair();

    let validator_set = ValidatorSet::new(vec![ValidatorDescriptor::new(
        validator_key.public.clone(),
        1,
    )]);

    let account_address = AccountAddress::from_public_key(&account_key.public);
    let account = BaseAccount::new(account_address.as_str(), 0);
    let balance = BalanceRecord {
        address: account_address.as_str().to_string(),
        coins: vec![Coin::new(options.initial_balance, &options.bond_denom)],
    };

    let base = app.default_genesis();
    let mut state =
        app.genesis_with_validators(base, &validator_set, &[account], &[balance])?;

    // Module overrides, applied before serialization.
    state.insert(
        contracts::MODULE_NAME.to_string(),
        serde_json::json!(ContractsGenesis {
            params: ContractsParams::allow_everybody(),
        }),
    );
    state.insert(
        gov::MODULE_NAME.to_string(),
        serde_json::json!(GovGenesis {
            params: GovParams {
                voting_period_secs: options.voting_period_secs,
                ..GovParams::default()
            },
            ..GovGenesis::default()
        }),
    );
    state.insert(
        exchange::MODULE_NAME.to_string(),
        serde_json::json!(ExchangeGenesis {
            params: ExchangeParams {
                is_instant_market_launch_enabled: true,
                ..ExchangeParams::default()
            },
        }),
    );
    state.insert(
        metering::MODULE_NAME.to_string(),
        serde_json::json!(MeteringGenesis {
            params: MeteringParams {
                is_execution_enabled: true,
                max_begin_block_total_gas: 42_000_000,
                max_contract_gas_limit: 3_500_000,
                min_gas_price: 1_000,
            },
        }),
    );

    let mut document = serde_json::to_value(&state)?;
    patch_denom_fields(&mut document, PLACEHOLDER_DENOM, &options.bond_denom);
    let state_bytes = serde_json::to_vec_pretty(&document)?;
    debug!(
        bytes = state_bytes.len(),
        bond_denom = %options.bond_denom,
        "assembled genesis document"
    );

    Ok(AssembledGenesis {
        state_bytes,
        validator_set,
        validator_key,
        account_key,
        account_address,
    })
}

/// Replace `from` with `to` in every denomination-valued field.
///
/// Several module defaults hardcode the placeholder denom, so a structured
/// overlay alone cannot reach them. The patch is scoped to fields whose
/// key is `denom` or ends in `_denom`; any other occurrence of the
/// placeholder string in the document is left untouched.
pub fn patch_denom_fields(value: &mut Value, from: &str, to: &str) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if is_denom_field(key) {
                    if let Value::String(s) = child {
                        if s == from {
                            *s = to.to_string();
                        }
                    }
                } else {
                    patch_denom_fields(child, from, to);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                patch_denom_fields(item, from, to);
            }
        }
        _ => {}
    }
}

fn is_denom_field(key: &str) -> bool {
    key == "denom" || key.ends_with("_denom")
}
