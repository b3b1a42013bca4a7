//! Derived figures over the transaction and budget collections. Everything
//! here is a pure function of its arguments.

mod query;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Budget, Category, CategoryDisplay, Transaction, YearMonth};
use crate::store::BudgetStore;

pub(crate) use query::{SortKey, SortOrder, TransactionQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub category_id: String,
    pub name: &'static str,
    pub color: &'static str,
    pub total: Decimal,
    /// Share of the month's expenses, 0-100.
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthTotals {
    pub month: YearMonth,
    pub label: String,
    pub total_expense: Decimal,
    pub total_income: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetProgress {
    pub spent: Decimal,
    /// Unbounded above 100.
    pub percentage: Decimal,
    pub remaining: Decimal,
    pub is_over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetLine<'a> {
    pub budget: &'a Budget,
    pub category: CategoryDisplay,
    pub progress: BudgetProgress,
}

pub(crate) fn monthly_summary(transactions: &[Transaction], month: YearMonth) -> MonthlySummary {
    let (total_income, total_expense) = month_totals(transactions, month);
    MonthlySummary {
        total_income,
        total_expense,
        net_balance: total_income.saturating_sub(total_expense),
        transaction_count: transactions.iter().filter(|t| t.in_month(month)).count(),
    }
}

/// Expense totals per category for one month, largest first. Equal totals
/// keep the order in which their categories first appear.
pub(crate) fn category_breakdown(transactions: &[Transaction], month: YearMonth) -> Vec<CategoryTotal> {
    let mut groups: Vec<(&str, Decimal)> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(month))
    {
        match groups.iter_mut().find(|(id, _)| *id == txn.category) {
            Some((_, total)) => *total = total.saturating_add(txn.amount),
            None => groups.push((txn.category.as_str(), txn.amount)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let grand_total = saturating_sum(groups.iter().map(|(_, total)| *total));
    groups
        .into_iter()
        .map(|(id, total)| {
            let shown = Category::display(id);
            CategoryTotal {
                category_id: id.to_string(),
                name: shown.name,
                color: shown.color,
                total,
                share: percent_of(total, grand_total),
            }
        })
        .collect()
}

/// `n_months` consecutive months ending with the anchor's month, oldest first.
pub(crate) fn monthly_series(
    transactions: &[Transaction],
    n_months: u32,
    anchor: NaiveDate,
) -> Vec<MonthTotals> {
    let last = YearMonth::of(anchor);
    (0..n_months)
        .rev()
        .map(|back| {
            let month = last.minus(back);
            let (total_income, total_expense) = month_totals(transactions, month);
            MonthTotals {
                month,
                label: month.short_label(),
                total_expense,
                total_income,
            }
        })
        .collect()
}

pub(crate) fn budget_progress(budget: &Budget, transactions: &[Transaction]) -> BudgetProgress {
    let spent = saturating_sum(
        transactions
            .iter()
            .filter(|t| {
                t.is_expense() && t.category == budget.category_id && t.in_month(budget.month)
            })
            .map(|t| t.amount),
    );
    BudgetProgress {
        spent,
        percentage: percent_of(spent, budget.amount),
        remaining: budget.amount.saturating_sub(spent).max(Decimal::ZERO),
        is_over_budget: spent > budget.amount,
    }
}

/// Budget-vs-actual rows for every budget set for `month`, in stored order.
pub(crate) fn budget_overview<'a>(
    budgets: &'a BudgetStore,
    transactions: &[Transaction],
    month: YearMonth,
) -> Vec<BudgetLine<'a>> {
    budgets
        .for_month(month)
        .map(|budget| BudgetLine {
            budget,
            category: Category::display(&budget.category_id),
            progress: budget_progress(budget, transactions),
        })
        .collect()
}

fn month_totals(transactions: &[Transaction], month: YearMonth) -> (Decimal, Decimal) {
    transactions
        .iter()
        .filter(|t| t.in_month(month))
        .fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), t| {
            if t.is_income() {
                (income.saturating_add(t.amount), expense)
            } else {
                (income, expense.saturating_add(t.amount))
            }
        })
}

// Stored amounts are not re-validated on load; totals clamp at the
// representable range.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `part / whole * 100`, or zero when `whole` is not positive. Clamps to
/// `Decimal::MAX` when the ratio is too large to represent.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests;
