//! Types library for the expense tracker
//!
//! This library provides the core type definitions shared by the expense
//! tracker crates: the transaction entity the model stores and the error
//! taxonomy the model reports.
//!
//! # Modules
//! - `ids`: Unique identifiers (TransactionId)
//! - `transaction`: Transaction entity and spending categories
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod transaction;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::transaction::*;
    pub use crate::errors::*;
}
