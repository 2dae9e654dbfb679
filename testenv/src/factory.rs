//! Application factory.

use tracing::debug;

use helix_app::{HelixApp, MemStore};
use helix_types::CHAIN_ID;

use crate::config::AppConfig;

/// Construct one application instance bound to a fresh in-memory store
/// and the fixed test chain id.
///
/// No network listeners are started and no disk I/O happens; logging
/// stays suppressed because the harness never installs a tracing
/// subscriber. Construction itself cannot fail.
pub fn new_helix_app(config: &AppConfig) -> HelixApp {
    debug!(home = %config.home.display(), trace = config.trace, "constructing application");
    HelixApp::new(MemStore::new(), CHAIN_ID)
}
