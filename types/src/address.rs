//! Account and operator address types with `helix` prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::keys::PublicKey;

/// A Helix account address, always prefixed with `helix1`.
///
/// Derived from the account's public key via Blake2b hashing; the first
/// 20 bytes of the digest are hex encoded after the prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all Helix account addresses.
    pub const PREFIX: &'static str = "helix1";

    /// The prefix for validator operator addresses.
    pub const OPERATOR_PREFIX: &'static str = "helixvaloper1";

    /// Create an account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not carry a recognized prefix.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(
            s.starts_with(Self::PREFIX) || s.starts_with(Self::OPERATOR_PREFIX),
            "address must start with helix1 or helixvaloper1"
        );
        Self(s)
    }

    /// Derive an account address from a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(format!("{}{}", Self::PREFIX, key_fingerprint(public_key)))
    }

    /// Derive the operator (validator) address for a public key.
    ///
    /// Same key material as the account address, different prefix, so the
    /// two never collide in a shared string namespace.
    pub fn operator_from_public_key(public_key: &PublicKey) -> Self {
        Self(format!(
            "{}{}",
            Self::OPERATOR_PREFIX,
            key_fingerprint(public_key)
        ))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a validator operator address.
    pub fn is_operator(&self) -> bool {
        self.0.starts_with(Self::OPERATOR_PREFIX)
    }
}

/// Hex fingerprint of a public key: first 20 bytes of its Blake2b-256 digest.
fn key_fingerprint(public_key: &PublicKey) -> String {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(public_key.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..20])
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
