//! Deterministic bootstrap harness for in-memory Helix test chains.
//!
//! One call to [`TestEnv::bootstrap`] produces a fully initialized
//! application: genesis applied, a single validator with voting power 1,
//! a funded test account, and module parameters tuned for fast test
//! execution (10 second governance voting period, permissive contract
//! uploads, instant market launch). No networking, no disk, no consensus
//! rounds; everything is a blocking in-process call.
//!
//! Bootstrap never panics: every setup failure surfaces as a
//! [`SetupError`] so test runners get a structured cause. There is no
//! retry anywhere; a failed bootstrap indicates a defect, not a
//! transient condition.

pub mod config;
pub mod env;
pub mod error;
pub mod factory;
pub mod genesis;
pub mod init;
pub mod keygen;
pub mod params;

pub use config::AppConfig;
pub use env::TestEnv;
pub use error::SetupError;
pub use factory::new_helix_app;
pub use genesis::{assemble_genesis, AssembledGenesis, GenesisOptions};
pub use init::init_chain;
pub use params::ParamTypeRegistry;
