use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortKey {
    #[default]
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Filter and ordering for the transaction listing. The default shows
/// everything, newest date first.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionQuery {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl TransactionQuery {
    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_deref().map_or(true, |c| txn.category == c)
    }

    /// Stable: entries that compare equal keep their stored order.
    pub(crate) fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut out: Vec<&Transaction> = transactions.iter().filter(|t| self.matches(t)).collect();
        out.sort_by(|a, b| {
            let ord = match self.sort {
                SortKey::Date => a.date.cmp(&b.date),
                SortKey::Amount => a.amount.cmp(&b.amount),
            };
            match self.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        out
    }
}
