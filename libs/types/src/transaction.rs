//! Transaction entity and spending categories
//!
//! The model layer stores transactions without looking inside them; it only
//! relies on equality to find the entry to remove.

use crate::ids::TransactionId;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// Parse a category name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Lowercase display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Bills => "bills",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single expense entry
///
/// Equality is structural, but since every transaction gets a fresh
/// [`TransactionId`] only clones of the same entry compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub amount: Decimal,
    pub category: Category,
    pub timestamp: i64, // Unix nanos
}

impl Transaction {
    /// Create a transaction recorded at the given time
    pub fn new(amount: Decimal, category: Category, timestamp: i64) -> Self {
        Self {
            transaction_id: TransactionId::new(),
            amount,
            category,
            timestamp,
        }
    }

    /// Create a transaction recorded now
    pub fn now(amount: Decimal, category: Category) -> Self {
        // Out of range only after 2262
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        Self::new(amount, category, timestamp)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.amount, self.category, self.transaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_creation() {
        let tx = Transaction::new(Decimal::new(1250, 2), Category::Food, 1708123456789000000);

        assert_eq!(tx.amount, Decimal::new(1250, 2));
        assert_eq!(tx.category, Category::Food);
        assert_eq!(tx.timestamp, 1708123456789000000);
    }

    #[test]
    fn test_clone_is_equal_but_new_is_not() {
        let tx = Transaction::new(Decimal::from(20), Category::Bills, 1);
        let same_fields = Transaction::new(Decimal::from(20), Category::Bills, 1);

        assert_eq!(tx, tx.clone());
        assert_ne!(tx, same_fields);
    }

    #[test]
    fn test_transaction_now_has_timestamp() {
        let tx = Transaction::now(Decimal::ONE, Category::Travel);
        assert!(tx.timestamp > 0);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse(" Entertainment "), Some(Category::Entertainment));
        assert_eq!(Category::parse("BILLS"), Some(Category::Bills));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = Transaction::new(Decimal::new(995, 2), Category::Other, 42);
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"OTHER\""));
        assert!(json.contains("\"9.95\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, deserialized);
    }
}
