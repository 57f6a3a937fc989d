// 🚗 Vehicle Entity - The classic first class
//
// Two descriptive fields set at construction, one action.
// No invariants: whatever you pass in is what it holds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    color: String,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, color: impl Into<String>) -> Self {
        Vehicle {
            make: make.into(),
            color: color.into(),
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// The line printed when the vehicle starts.
    pub fn start_message(&self) -> String {
        format!("The {} starts!", self.make)
    }

    /// Start the vehicle. Sole side effect is one line on stdout.
    pub fn start(&self) {
        println!("{}", self.start_message());
    }
}

// ============================================================================
// TESTS
// ============================================================================
