// Entity Models - One bank-account shape, three encapsulation styles
//
// Each variant holds the same data (owner + balance); what differs is
// the mutation surface:
// - Account: private balance, no validation anywhere
// - GuardedAccount: explicit get/set methods, setter-only guard
// - PropertyAccount: field-named accessors, same guard

pub mod vehicle;
pub mod account;
pub mod guarded;
pub mod property;

pub use vehicle::Vehicle;
pub use account::Account;
pub use guarded::{GuardedAccount, REJECTION_DIAGNOSTIC};
pub use property::PropertyAccount;
