// 💳 Account Entity - Encapsulation by visibility
//
// The owner is a plain public field; the balance is private and reachable
// only through `deposit` and `describe`. There is no validation anywhere
// on this variant: deposits of any sign are accepted, and the constructor
// stores the initial balance verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Owner name, readable by anyone. Set once at construction.
    pub owner: String,

    /// Private: no direct read or write from outside this module.
    balance: f64,
}

impl Account {
    pub fn new(owner: impl Into<String>, initial_balance: f64) -> Self {
        Account {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    /// Unconditional add. Negative amounts are accepted and can drive the
    /// balance negative; this variant has no guard at all.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Human-readable balance line, currency suffix included.
    pub fn describe(&self) -> String {
        format!("Balance of {}: {}€", self.owner, self.balance)
    }
}

// ============================================================================
// TESTS
// ============================================================================
