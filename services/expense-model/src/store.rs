//! Observable transaction store
//!
//! Holds the ordered transaction list, the indices of the transactions that
//! match the current external filter, and the registered listeners.
//!
//! Invariants:
//! - Every matched filter index is `< transactions.len()`
//! - Any add or remove clears the matched filter indices
//! - Rejected calls leave all state untouched and notify nobody

use std::fmt;

use expense_types::errors::{InvalidArgument, ModelError, Result};
use expense_types::transaction::Transaction;
use tracing::{debug, info, warn};

use crate::listener::{same_listener, SharedListener, TransactionListener};

/// Configuration for the transaction store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of transactions to pre-allocate room for.
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// In-memory transaction list with change notification.
pub struct TransactionStore {
    /// Transactions in insertion order; duplicates allowed.
    transactions: Vec<Transaction>,
    /// Positions in `transactions` matching the current filter.
    matched_filter_indices: Vec<usize>,
    /// Listeners in registration order.
    listeners: Vec<SharedListener>,
}

impl TransactionStore {
    /// Create an empty store with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        info!(
            initial_capacity = config.initial_capacity,
            "TransactionStore initialized"
        );

        Self {
            transactions: Vec::with_capacity(config.initial_capacity),
            matched_filter_indices: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Create an empty store with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Append a transaction.
    ///
    /// Clears the matched filter indices and notifies every listener.
    /// Fails without side effects when the transaction is absent.
    pub fn add_transaction(&mut self, transaction: impl Into<Option<Transaction>>) -> Result<()> {
        let transaction: Option<Transaction> = transaction.into();
        let Some(transaction) = transaction else {
            warn!("Rejecting absent transaction");
            return Err(InvalidArgument::MissingTransaction.into());
        };

        debug!(
            transaction_id = %transaction.transaction_id,
            len = self.transactions.len() + 1,
            "Transaction added"
        );
        self.transactions.push(transaction);
        // Prior indices may now point at the wrong entries
        self.matched_filter_indices.clear();
        self.notify_all();
        Ok(())
    }

    /// Remove the first transaction equal to `transaction`.
    ///
    /// A missing transaction is not an error. The matched filter indices are
    /// cleared and listeners notified either way. Returns whether an entry
    /// was removed.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        let position = self.transactions.iter().position(|t| t == transaction);
        if let Some(index) = position {
            self.transactions.remove(index);
            debug!(
                transaction_id = %transaction.transaction_id,
                index,
                len = self.transactions.len(),
                "Transaction removed"
            );
        } else {
            debug!(
                transaction_id = %transaction.transaction_id,
                "Transaction to remove not found"
            );
        }

        self.matched_filter_indices.clear();
        self.notify_all();
        position.is_some()
    }

    /// Snapshot of the transactions in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Number of stored transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Replace the matched filter indices wholesale.
    ///
    /// Every index must lie in `0..transaction_count()`. Validation is
    /// all-or-nothing: one bad index rejects the call, keeps the previous
    /// indices and skips notification. An empty list is always accepted.
    pub fn set_matched_filter_indices(&mut self, indices: impl Into<Option<Vec<i64>>>) -> Result<()> {
        let indices: Option<Vec<i64>> = indices.into();
        let Some(indices) = indices else {
            warn!("Rejecting absent matched filter indices");
            return Err(InvalidArgument::MissingIndices.into());
        };

        let len = self.transactions.len();
        let validated = indices
            .iter()
            .map(|&index| {
                usize::try_from(index)
                    .ok()
                    .filter(|&i| i < len)
                    .ok_or_else(|| {
                        warn!(index, len, "Matched filter index out of range");
                        ModelError::from(InvalidArgument::IndexOutOfRange { index, len })
                    })
            })
            .collect::<Result<Vec<usize>>>()?;

        debug!(matched = validated.len(), len, "Matched filter indices replaced");
        self.matched_filter_indices = validated;
        self.notify_all();
        Ok(())
    }

    /// Copy of the current matched filter indices.
    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_filter_indices.clone()
    }

    /// The transactions at the matched filter indices, in index order.
    pub fn matched_transactions(&self) -> Vec<Transaction> {
        self.matched_filter_indices
            .iter()
            .filter_map(|&index| self.transactions.get(index).cloned())
            .collect()
    }

    /// Register a listener for change notification.
    ///
    /// Returns `true` if the listener was added, `false` if it is absent or
    /// already registered.
    pub fn register(&mut self, listener: impl Into<Option<SharedListener>>) -> bool {
        let listener: Option<SharedListener> = listener.into();
        let Some(listener) = listener else {
            return false;
        };
        if self.has_listener(&listener) {
            debug!(listeners = self.listeners.len(), "Listener already registered");
            return false;
        }

        self.listeners.push(listener);
        debug!(listeners = self.listeners.len(), "Listener registered");
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether this exact listener handle is registered.
    pub fn has_listener(&self, listener: &SharedListener) -> bool {
        self.listeners
            .iter()
            .any(|registered| same_listener(registered, listener))
    }

    fn notify_all(&self) {
        for listener in &self.listeners {
            listener.update(self);
        }
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("matched_filter_indices", &self.matched_filter_indices)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
