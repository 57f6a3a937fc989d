// 🛡️ Guarded Account - Explicit getter/setter methods
//
// The balance is private and mutated through a designated gate:
// `set_balance` accepts only non-negative values (zero included). A
// rejected write keeps the prior balance and prints a diagnostic line;
// it never returns an error.
//
// `deposit` deliberately does NOT go through `set_balance`. The guard
// applies to direct assignment only, so a negative deposit can still
// drive the balance below zero without any diagnostic.

use serde::{Deserialize, Serialize};

/// The line printed when a negative write is rejected. Both guarded
/// variants emit this exact diagnostic.
pub const REJECTION_DIAGNOSTIC: &str = "❌ Balance cannot be negative";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardedAccount {
    pub owner: String,
    balance: f64,
}

impl GuardedAccount {
    /// The constructor stores the initial balance verbatim; only the
    /// setter validates.
    pub fn new(owner: impl Into<String>, initial_balance: f64) -> Self {
        GuardedAccount {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    /// Read accessor. No side effects.
    pub fn get_balance(&self) -> f64 {
        self.balance
    }

    /// Applies the guard. Returns the diagnostic line when the write is
    /// rejected, `None` when the value was assigned. Split from
    /// `set_balance` the way `Vehicle::start_message` is split from
    /// `start`, so the emission is testable.
    pub fn try_set_balance(&mut self, new_balance: f64) -> Option<&'static str> {
        if new_balance >= 0.0 {
            self.balance = new_balance;
            None
        } else {
            Some(REJECTION_DIAGNOSTIC)
        }
    }

    /// Write accessor with the non-negativity guard. On rejection the
    /// prior value stays in place and one diagnostic line is printed.
    /// Never returns an error.
    pub fn set_balance(&mut self, new_balance: f64) {
        if let Some(diagnostic) = self.try_set_balance(new_balance) {
            println!("{diagnostic}");
        }
    }

    /// Unconditional add, not routed through `set_balance`.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_does_not_validate() {
        // Matches the setter-only guard: a negative initial balance is
        // stored as-is.
        let account = GuardedAccount::new("María", -10.0);
        assert_eq!(account.get_balance(), -10.0);
    }

    #[test]
    fn test_set_balance_accepts_non_negative() {
        let mut account = GuardedAccount::new("María", 500.0);

        account.set_balance(1000.0);
        assert_eq!(account.get_balance(), 1000.0);

        account.set_balance(0.0);
        assert_eq!(account.get_balance(), 0.0);
    }

    #[test]
    fn test_set_balance_rejects_negative_and_keeps_prior_value() {
        let mut account = GuardedAccount::new("María", 500.0);
        account.set_balance(-100.0);
        assert_eq!(account.get_balance(), 500.0);
    }

    #[test]
    fn test_get_balance_is_idempotent() {
        let account = GuardedAccount::new("María", 500.0);
        assert_eq!(account.get_balance(), account.get_balance());
    }

    #[test]
    fn test_deposit_bypasses_the_guard() {
        // The asymmetry from the setter-only guard: deposits are never
        // validated, so the balance can go negative on this path.
        let mut account = GuardedAccount::new("María", 100.0);
        account.deposit(-300.0);
        assert_eq!(account.get_balance(), -200.0);
    }

    #[test]
    fn test_deposit_adds_exactly_the_amount() {
        let mut account = GuardedAccount::new("María", 500.0);
        account.deposit(250.0);
        assert_eq!(account.get_balance(), 750.0);
    }

    #[test]
    fn test_rejected_write_carries_the_diagnostic() {
        let mut account = GuardedAccount::new("María", 500.0);

        assert_eq!(
            account.try_set_balance(-100.0),
            Some(REJECTION_DIAGNOSTIC)
        );
        assert_eq!(account.get_balance(), 500.0);

        // An accepted write emits nothing.
        assert_eq!(account.try_set_balance(1000.0), None);
        assert_eq!(account.get_balance(), 1000.0);
    }
}
