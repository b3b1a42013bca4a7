use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Budget {
    pub id: String,
    pub category_id: String,
    /// Spending ceiling for the month.
    pub amount: Decimal,
    pub month: YearMonth,
    /// Cached figure carried in storage; progress is always recomputed.
    #[serde(default)]
    pub spent: Decimal,
}

impl Budget {
    pub(crate) fn new(category_id: String, month: YearMonth, amount: Decimal) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            category_id,
            amount,
            month,
            spent: Decimal::ZERO,
        }
    }

    pub(crate) fn same_slot(&self, other: &Budget) -> bool {
        self.category_id == other.category_id && self.month == other.month
    }
}
