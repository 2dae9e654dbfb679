//! Coin and coin-set types.
//!
//! Amounts are u128 raw units to avoid floating point. Arithmetic on
//! balances always goes through the checked helpers; overflow is a caller
//! error, never a wraparound.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single denomination + amount pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "string_amount")]
    pub amount: u128,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn checked_add(&self, amount: u128) -> Option<Self> {
        self.amount
            .checked_add(amount)
            .map(|sum| Coin::new(sum, self.denom.clone()))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An ordered collection of coins, one entry per denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a one-denomination coin set.
    pub fn single(amount: u128, denom: impl Into<String>) -> Self {
        Self(vec![Coin::new(amount, denom)])
    }

    /// Add a coin, merging with an existing entry of the same denom.
    ///
    /// Returns `None` on amount overflow.
    pub fn checked_push(mut self, coin: Coin) -> Option<Self> {
        match self.0.iter_mut().find(|c| c.denom == coin.denom) {
            Some(existing) => {
                existing.amount = existing.amount.checked_add(coin.amount)?;
            }
            None => self.0.push(coin),
        }
        Some(self)
    }

    /// Amount held in a given denomination (zero when absent).
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = std::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serialize amounts as decimal strings, the genesis wire convention for
/// integers wider than 64 bits.
mod string_amount {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_serializes_as_string() {
        let coin = Coin::new(100_000_000_000_000, "inj");
        let json = serde_json::to_string(&coin).unwrap();
        assert!(json.contains("\"100000000000000\""));
        let back: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coin);
    }

    #[test]
    fn checked_push_merges_same_denom() {
        let coins = Coins::single(10, "inj")
            .checked_push(Coin::new(5, "inj"))
            .unwrap();
        assert_eq!(coins.amount_of("inj"), 15);
    }

    #[test]
    fn checked_push_overflow_is_none() {
        let coins = Coins::single(u128::MAX, "inj");
        assert!(coins.checked_push(Coin::new(1, "inj")).is_none());
    }

    #[test]
    fn amount_of_missing_denom_is_zero() {
        let coins = Coins::single(10, "inj");
        assert_eq!(coins.amount_of("atom"), 0);
    }
}
