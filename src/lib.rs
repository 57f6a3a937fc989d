// Paradigms Primer - Core Library
// Exposes the paradigm comparison helpers and the entity models for the
// demo binary and tests

pub mod paradigms;
pub mod polymorphism;
pub mod entities;

// Re-export commonly used types
pub use paradigms::{imperative_sum, declarative_sum, functional_sum};
pub use polymorphism::{
    Drives, Car, Bicycle, Plane, demo_lines,
    Shape, Rectangle, Circle, Triangle, shape_lines,
};
pub use entities::{Vehicle, Account, GuardedAccount, PropertyAccount, REJECTION_DIAGNOSTIC};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
