use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("genesis import failed for module {module}: {reason}")]
    Genesis { module: String, reason: String },

    #[error("unknown module in genesis document: {0}")]
    UnknownModule(String),

    #[error("module {0} registered but missing from genesis document")]
    MissingModule(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("chain id mismatch: expected {expected}, got {got}")]
    ChainIdMismatch { expected: String, got: String },

    #[error("invalid denomination: {0:?}")]
    InvalidDenom(String),

    #[error("insufficient funds: {address} holds {held}{denom}, needs {needed}{denom}")]
    InsufficientFunds {
        address: String,
        denom: String,
        held: u128,
        needed: u128,
    },

    #[error("module {0} is not authorized to mint")]
    UnauthorizedMint(String),

    #[error("balance overflow for {address} in {denom}")]
    BalanceOverflow { address: String, denom: String },

    #[error("chain already initialized")]
    AlreadyInitialized,

    #[error("chain not initialized")]
    NotInitialized,
}
