//! Expense Tracker Model
//!
//! In-memory store of expense transactions with a matched-filter index list
//! and synchronous change notification.
//!
//! ```text
//!   add / remove / set filter
//!              │
//!      ┌───────▼────────┐
//!      │TransactionStore│  ← validates, mutates, clears stale indices
//!      └───────┬────────┘
//!              │ update(&store), in registration order
//!   ┌──────────┼──────────┐
//! ┌─▼──┐    ┌──▼─┐     ┌──▼─┐
//! │View│    │View│ ... │View│
//! └────┘    └────┘     └────┘
//! ```
//!
//! The store is single-threaded: listeners are held as `Rc` handles, so it
//! is neither `Send` nor `Sync`.

pub mod listener;
pub mod store;

pub use listener::{SharedListener, TransactionListener};
pub use store::{StoreConfig, TransactionStore};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
