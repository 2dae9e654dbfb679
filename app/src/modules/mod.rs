//! The module set hosted by the Helix application.

pub mod auth;
pub mod bank;
pub mod contracts;
pub mod exchange;
pub mod gov;
pub mod metering;
pub mod staking;
pub mod tokenfactory;

pub use auth::{AuthGenesis, AuthModule, AuthParams};
pub use bank::{BalanceRecord, BankGenesis, BankModule, BankParams};
pub use contracts::{AccessType, ContractsGenesis, ContractsModule, ContractsParams};
pub use exchange::{ExchangeGenesis, ExchangeModule, ExchangeParams};
pub use gov::{GovGenesis, GovModule, GovParams};
pub use metering::{MeteringGenesis, MeteringModule, MeteringParams};
pub use staking::{GenesisValidator, StakingGenesis, StakingModule, StakingParams};
pub use tokenfactory::{TokenfactoryGenesis, TokenfactoryModule, TokenfactoryParams};
