//! Validator descriptors for genesis construction.

use serde::{Deserialize, Serialize};

use crate::keys::PublicKey;

/// One validator: consensus public key plus voting power.
///
/// Voting power must be at least 1; a zero-power validator is tombstoned
/// by the framework and never what a bootstrap wants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDescriptor {
    pub pub_key: PublicKey,
    pub power: u64,
}

impl ValidatorDescriptor {
    pub fn new(pub_key: PublicKey, power: u64) -> Self {
        debug_assert!(power >= 1, "validator voting power must be >= 1");
        Self { pub_key, power }
    }
}

/// An ordered validator set, as embedded in genesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSet {
    pub validators: Vec<ValidatorDescriptor>,
}

impl ValidatorSet {
    pub fn new(validators: Vec<ValidatorDescriptor>) -> Self {
        Self { validators }
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Total voting power across the set.
    pub fn total_power(&self) -> u64 {
        self.validators.iter().map(|v| v.power).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_validator_set_has_power_one() {
        let set = ValidatorSet::new(vec![ValidatorDescriptor::new(PublicKey([3; 32]), 1)]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_power(), 1);
    }
}
