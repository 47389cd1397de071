//! The fungible value primitive.
//!
//! `Value` is the opaque prepaid balance moved between reader deposits,
//! creator vaults and the platform treasury. It is deliberately neither
//! `Copy` nor `Clone`: value moves, it is never duplicated, so conservation
//! across split/join is structural rather than audited after the fact.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from value operations.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("cannot split {needed} from a value holding {available}")]
    InsufficientValue { needed: u128, available: u128 },
}

/// An exact fungible balance in raw units.
///
/// Split and join never lose or create units.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Value(u128);

impl Value {
    /// An empty value.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Mint a value at the system boundary — funds arriving from the
    /// external payment rail.
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Split `amount` off into a new value, leaving the remainder behind.
    pub fn split(&mut self, amount: u128) -> Result<Value, ValueError> {
        if amount > self.0 {
            return Err(ValueError::InsufficientValue {
                needed: amount,
                available: self.0,
            });
        }
        self.0 -= amount;
        Ok(Value(amount))
    }

    /// Join another value into this one. Exact addition.
    pub fn join(&mut self, other: Value) {
        self.0 += other.0;
    }

    /// Drain this value completely, returning everything it held.
    pub fn take_all(&mut self) -> Value {
        Value(std::mem::take(&mut self.0))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} units", self.0)
    }
}
