//! Reusable optimistic-mutation helper for list state.
//!
//! The admin tables and the chat transcript all follow the same shape:
//! apply a local change, call the backend, and either keep the change,
//! reconcile it with the server's answer, or restore the prior snapshot
//! when the server rejects it.

use leptos::prelude::*;

/// An in-flight optimistic edit over a list signal.
///
/// Exactly one of [`commit`](Self::commit), [`commit_with`](Self::commit_with)
/// or [`revert`](Self::revert) should be called once the remote call
/// resolves; dropping the value without either keeps the optimistic change.
pub struct Optimistic<T: Clone + Send + Sync + 'static> {
    list: RwSignal<Vec<T>>,
    prior: Vec<T>,
}

impl<T: Clone + Send + Sync + 'static> Optimistic<T> {
    /// Captures the current list and applies the local change.
    pub fn apply(list: RwSignal<Vec<T>>, change: impl FnOnce(&mut Vec<T>)) -> Self {
        let prior = list.get_untracked();
        list.update(change);
        Self { list, prior }
    }

    /// Keeps the optimistic change as-is.
    pub fn commit(self) {}

    /// Reconciles the list with what the server actually returned.
    pub fn commit_with(self, change: impl FnOnce(&mut Vec<T>)) {
        self.list.update(change);
    }

    /// Restores the pre-mutation snapshot.
    pub fn revert(self) {
        self.list.set(self.prior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        active: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                active: true,
            },
            Row {
                id: 2,
                active: false,
            },
        ]
    }

    #[test]
    fn test_revert_restores_pre_toggle_state() {
        let list = RwSignal::new(rows());

        let txn = Optimistic::apply(list, |items| items[0].active = false);
        assert!(!list.get_untracked()[0].active);

        // Server rejected the toggle: the displayed status must match the
        // pre-toggle value exactly.
        txn.revert();
        assert_eq!(list.get_untracked(), rows());
    }

    #[test]
    fn test_commit_keeps_the_change() {
        let list = RwSignal::new(rows());

        let txn = Optimistic::apply(list, |items| items[0].active = false);
        txn.commit();

        assert!(!list.get_untracked()[0].active);
    }

    #[test]
    fn test_commit_with_reconciles_to_server_truth() {
        let list = RwSignal::new(rows());

        // Optimistically flip row 2 on; the server answers with `false`.
        let txn = Optimistic::apply(list, |items| items[1].active = true);
        txn.commit_with(|items| items[1].active = false);

        assert!(!list.get_untracked()[1].active);
    }
}
