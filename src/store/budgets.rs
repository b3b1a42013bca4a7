use crate::models::{Budget, YearMonth};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BudgetStore {
    items: Vec<Budget>,
}

impl BudgetStore {
    pub(crate) fn from_vec(items: Vec<Budget>) -> Self {
        Self { items }
    }

    /// Insert-or-replace keyed on (category, month). A replacement keeps the
    /// stored budget's id and position; the incoming id is dropped.
    /// Returns the id the budget is stored under.
    pub(crate) fn upsert(&mut self, mut budget: Budget) -> String {
        if let Some(existing) = self.items.iter_mut().find(|b| b.same_slot(&budget)) {
            budget.id = existing.id.clone();
            *existing = budget;
            return existing.id.clone();
        }
        let id = budget.id.clone();
        self.items.push(budget);
        id
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|b| b.id != id);
        self.items.len() != before
    }

    pub(crate) fn list(&self) -> &[Budget] {
        &self.items
    }

    pub(crate) fn for_month(&self, month: YearMonth) -> impl Iterator<Item = &Budget> {
        self.items.iter().filter(move |b| b.month == month)
    }
}
