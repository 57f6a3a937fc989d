// 🪞 Property Account - Field-named accessors
//
// Same contract as GuardedAccount, surfaced through Rust's property
// idiom: the getter is named after the field (`balance()`), the setter
// is `set_balance()`. Callers read it almost like a public attribute;
// the guard still sits on every write.

use serde::{Deserialize, Serialize};

use super::guarded::REJECTION_DIAGNOSTIC;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAccount {
    pub owner: String,
    balance: f64,
}

impl PropertyAccount {
    pub fn new(owner: impl Into<String>, initial_balance: f64) -> Self {
        PropertyAccount {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Applies the guard; returns the diagnostic line when the write is
    /// rejected. Same gate as `GuardedAccount`.
    pub fn try_set_balance(&mut self, new_balance: f64) -> Option<&'static str> {
        if new_balance >= 0.0 {
            self.balance = new_balance;
            None
        } else {
            Some(REJECTION_DIAGNOSTIC)
        }
    }

    /// Assigns iff `new_balance >= 0`; otherwise keeps the prior value
    /// and prints the diagnostic. Never returns an error.
    pub fn set_balance(&mut self, new_balance: f64) {
        if let Some(diagnostic) = self.try_set_balance(new_balance) {
            println!("{diagnostic}");
        }
    }

    /// Unconditional add; the guard applies to assignment only.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }
}

// ============================================================================
// TESTS
// ============================================================================
