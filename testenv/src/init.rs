//! Chain initialization.

use tracing::info;

use helix_app::{
    BlockParams, ConsensusParams, ExecContext, HelixApp, InitChainRequest,
};
use helix_types::Timestamp;

use crate::error::SetupError;

/// Maximum block size submitted with the init request.
pub const MAX_BLOCK_BYTES: i64 = 22_020_096;

/// Unlimited block gas.
pub const UNLIMITED_GAS: i64 = -1;

/// Submit a finished genesis document and derive the first execution
/// context.
///
/// The request carries the fixed chain id, an empty validator-update list
/// (validators come from genesis, not from the init call), and explicit
/// consensus parameters. Any rejection is fatal for the bootstrap.
pub fn init_chain(app: &HelixApp, genesis_bytes: Vec<u8>) -> Result<ExecContext, SetupError> {
    let response = app.init_chain(InitChainRequest {
        chain_id: app.chain_id().to_string(),
        validators: Vec::new(),
        consensus_params: ConsensusParams {
            block: BlockParams {
                max_bytes: MAX_BLOCK_BYTES,
                max_gas: UNLIMITED_GAS,
            },
        },
        app_state_bytes: genesis_bytes,
    })?;
    info!(app_hash = %response.app_hash, "chain started");

    let ctx = app.context_at(0, Timestamp::now())?;
    Ok(ctx)
}
