//! Listener contract for store change notification
//!
//! Views and controllers implement [`TransactionListener`] and register a
//! [`SharedListener`] handle with the store. Handles are compared by
//! identity: registering two handles to the same allocation is a duplicate,
//! two separate allocations are distinct listeners even if they hold equal
//! data.

use std::rc::Rc;

use crate::store::TransactionStore;

/// Receives a callback after every successful store mutation.
///
/// `update` runs synchronously inside the mutating call. Implementations
/// that need to record anything use interior mutability. A panic in
/// `update` unwinds through the mutating call; the store does not isolate
/// listeners from each other.
pub trait TransactionListener {
    fn update(&self, store: &TransactionStore);
}

impl<F> TransactionListener for F
where
    F: Fn(&TransactionStore),
{
    fn update(&self, store: &TransactionStore) {
        self(store)
    }
}

/// Registered listener handle
pub type SharedListener = Rc<dyn TransactionListener>;

/// Identity comparison of two listener handles.
///
/// Compares data pointers only; vtable pointers for the same type may
/// differ across codegen units.
pub(crate) fn same_listener(a: &SharedListener, b: &SharedListener) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
