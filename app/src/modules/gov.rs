//! On-chain governance: proposals are out of scope for the test chain, but
//! the module's parameter set (notably the voting period) must import
//! cleanly and be readable back by tests.

use helix_types::{Coin, PLACEHOLDER_DENOM};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::module::{decode_genesis, Module};
use crate::store::MemStore;

pub const MODULE_NAME: &str = "gov";

pub const DEFAULT_STARTING_PROPOSAL_ID: u64 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovParams {
    pub min_deposit: Vec<Coin>,
    pub max_deposit_period_secs: u64,
    pub voting_period_secs: u64,
    /// Quorum in basis points.
    pub quorum_bps: u32,
    /// Pass threshold in basis points.
    pub threshold_bps: u32,
}

impl Default for GovParams {
    fn default() -> Self {
        Self {
            min_deposit: vec![Coin::new(10_000_000, PLACEHOLDER_DENOM)],
            max_deposit_period_secs: 172_800,
            voting_period_secs: 172_800, // 2 days
            quorum_bps: 3_340,
            threshold_bps: 5_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovGenesis {
    pub starting_proposal_id: u64,
    pub deposits: Vec<Value>,
    pub votes: Vec<Value>,
    pub proposals: Vec<Value>,
    pub params: GovParams,
}

impl Default for GovGenesis {
    fn default() -> Self {
        Self {
            starting_proposal_id: DEFAULT_STARTING_PROPOSAL_ID,
            deposits: Vec::new(),
            votes: Vec::new(),
            proposals: Vec::new(),
            params: GovParams::default(),
        }
    }
}

pub struct GovModule;

impl Module for GovModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> Value {
        serde_json::json!(GovGenesis::default())
    }

    fn import_genesis(&self, store: &MemStore, genesis: Value) -> Result<(), AppError> {
        let genesis: GovGenesis = decode_genesis(MODULE_NAME, genesis)?;
        if genesis.params.voting_period_secs == 0 {
            return Err(AppError::Genesis {
                module: MODULE_NAME.to_string(),
                reason: "voting period must be positive".to_string(),
            });
        }
        store.set_params(MODULE_NAME, serde_json::json!(genesis.params));
        Ok(())
    }
}
