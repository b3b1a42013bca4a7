mod budgets;
mod codec;
#[cfg(test)]
mod memory;
mod transactions;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Budget, NewTransaction, Transaction};

pub(crate) use budgets::BudgetStore;
#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub(crate) use transactions::TransactionStore;

pub(crate) const TRANSACTIONS_KEY: &str = "finance-transactions";
pub(crate) const BUDGETS_KEY: &str = "finance-budgets";

/// Load-all/save-all persistence seam. Values are whole serialized collections.
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One session over both collections. Every mutation goes through here and
/// is followed by a full overwrite of the affected collection.
pub(crate) struct Ledger<S: KeyValueStore> {
    kv: S,
    transactions: TransactionStore,
    budgets: BudgetStore,
    load_warnings: Vec<String>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Loads both collections. A collection whose stored form cannot be
    /// decoded starts out empty and a warning is recorded; the other one
    /// loads normally.
    pub(crate) fn open(kv: S) -> Result<Self> {
        let mut load_warnings = Vec::new();
        let transactions = load_collection::<Transaction>(&kv, TRANSACTIONS_KEY, &mut load_warnings)?;
        let budgets = load_collection::<Budget>(&kv, BUDGETS_KEY, &mut load_warnings)?;
        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "ledger loaded"
        );
        Ok(Self {
            kv,
            transactions: TransactionStore::from_vec(transactions),
            budgets: BudgetStore::from_vec(budgets),
            load_warnings,
        })
    }

    pub(crate) fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        self.transactions.list()
    }

    pub(crate) fn budgets(&self) -> &BudgetStore {
        &self.budgets
    }

    pub(crate) fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn add_transaction(&mut self, new: NewTransaction) -> Result<String> {
        let id = self.transactions.add(new, chrono::Utc::now());
        tracing::debug!(%id, "transaction added");
        self.save_transactions()?;
        Ok(id)
    }

    /// Full replace by id. Unknown ids are ignored and reported as `false`.
    pub(crate) fn update_transaction(&mut self, txn: Transaction) -> Result<bool> {
        let id = txn.id.clone();
        if !self.transactions.update(txn) {
            tracing::debug!(%id, "update ignored, no such transaction");
            return Ok(false);
        }
        self.save_transactions()?;
        Ok(true)
    }

    pub(crate) fn remove_transaction(&mut self, id: &str) -> Result<bool> {
        if !self.transactions.remove(id) {
            tracing::debug!(%id, "remove ignored, no such transaction");
            return Ok(false);
        }
        self.save_transactions()?;
        Ok(true)
    }

    // ── Budgets ───────────────────────────────────────────────

    /// Returns the id the budget ended up stored under.
    pub(crate) fn upsert_budget(&mut self, budget: Budget) -> Result<String> {
        let id = self.budgets.upsert(budget);
        tracing::debug!(%id, "budget upserted");
        self.save_budgets()?;
        Ok(id)
    }

    pub(crate) fn remove_budget(&mut self, id: &str) -> Result<bool> {
        if !self.budgets.remove(id) {
            tracing::debug!(%id, "remove ignored, no such budget");
            return Ok(false);
        }
        self.save_budgets()?;
        Ok(true)
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> S {
        self.kv
    }

    fn save_transactions(&mut self) -> Result<()> {
        save_collection(&mut self.kv, TRANSACTIONS_KEY, self.transactions.list())
    }

    fn save_budgets(&mut self) -> Result<()> {
        save_collection(&mut self.kv, BUDGETS_KEY, self.budgets.list())
    }
}

fn load_collection<T: DeserializeOwned>(
    kv: &impl KeyValueStore,
    key: &str,
    warnings: &mut Vec<String>,
) -> Result<Vec<T>> {
    let Some(raw) = kv.get(key)? else {
        return Ok(Vec::new());
    };
    match codec::decode(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "unreadable stored collection, starting empty");
            warnings.push(format!("Could not read '{key}' ({e}); starting with an empty list"));
            Ok(Vec::new())
        }
    }
}

fn save_collection<T: Serialize>(kv: &mut impl KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let encoded =
        codec::encode(items).with_context(|| format!("Failed to serialize '{key}'"))?;
    kv.set(key, &encoded)?;
    tracing::debug!(key, count = items.len(), "collection saved");
    Ok(())
}
