use chrono::{DateTime, Utc};

use crate::models::{NewTransaction, Transaction};

/// Transactions in insertion order, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TransactionStore {
    items: Vec<Transaction>,
}

impl TransactionStore {
    pub(crate) fn from_vec(items: Vec<Transaction>) -> Self {
        Self { items }
    }

    /// Assigns a fresh id and puts the transaction at the front.
    pub(crate) fn add(&mut self, new: NewTransaction, now: DateTime<Utc>) -> String {
        let id = uuid::Uuid::now_v7().to_string();
        self.items
            .insert(0, Transaction::from_new(id.clone(), new, now));
        id
    }

    /// Replaces the entry with the same id. Returns false, leaving the
    /// collection untouched, when no such entry exists.
    pub(crate) fn update(&mut self, txn: Transaction) -> bool {
        match self.items.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub(crate) fn list(&self) -> &[Transaction] {
        &self.items
    }
}
