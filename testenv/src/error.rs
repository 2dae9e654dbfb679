use thiserror::Error;

use helix_app::AppError;

/// A fatal bootstrap failure.
///
/// Setup is one-shot: none of these are retried, and a partially
/// initialized environment is never returned.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("application error: {0}")]
    App(#[from] AppError),

    #[error("no parameter type registered for module {0}")]
    ParamsNotRegistered(String),

    #[error("registered parameter type for module {0} does not match the requested type")]
    ParamTypeMismatch(String),
}
