//! Parameter-type registry.
//!
//! Maps a module name to a decoder for its parameter-set type, so test
//! code can read module parameters back generically after bootstrap.
//! Registering a second decoder for the same module overwrites the first;
//! the newest registration wins.

use std::any::Any;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SetupError;

type Decoder = Box<dyn Fn(Value) -> Result<Box<dyn Any>, serde_json::Error> + Send + Sync>;

#[derive(Default)]
pub struct ParamTypeRegistry {
    decoders: HashMap<String, Decoder>,
}

impl ParamTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the parameter-set type for a module. Overwrites any
    /// previous registration for the same module.
    pub fn register<P>(&mut self, module: &str)
    where
        P: DeserializeOwned + 'static,
    {
        self.decoders.insert(
            module.to_string(),
            Box::new(|value| serde_json::from_value::<P>(value).map(|p| Box::new(p) as Box<dyn Any>)),
        );
    }

    /// Decode a module's parameter set through its registered type.
    pub fn decode<P: 'static>(&self, module: &str, value: Value) -> Result<P, SetupError> {
        let decoder = self
            .decoders
            .get(module)
            .ok_or_else(|| SetupError::ParamsNotRegistered(module.to_string()))?;
        let decoded = decoder(value)?;
        decoded
            .downcast::<P>()
            .map(|p| *p)
            .map_err(|_| SetupError::ParamTypeMismatch(module.to_string()))
    }

    pub fn is_registered(&self, module: &str) -> bool {
        self.decoders.contains_key(module)
    }
}
