#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::{TransactionType, UNKNOWN_COLOR, UNKNOWN_NAME};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn month(s: &str) -> YearMonth {
    YearMonth::parse(s).unwrap()
}

fn txn(id: &str, kind: TransactionType, amount: Decimal, cat: &str, on: &str) -> Transaction {
    Transaction {
        id: id.into(),
        kind,
        amount,
        description: format!("txn {id}"),
        date: date(on),
        category: cat.into(),
        created_at: None,
    }
}

fn expense(id: &str, amount: Decimal, cat: &str, on: &str) -> Transaction {
    txn(id, TransactionType::Expense, amount, cat, on)
}

fn income(id: &str, amount: Decimal, cat: &str, on: &str) -> Transaction {
    txn(id, TransactionType::Income, amount, cat, on)
}

fn budget(cat: &str, m: &str, amount: Decimal) -> Budget {
    Budget {
        id: format!("{cat}-{m}"),
        category_id: cat.into(),
        amount,
        month: month(m),
        spent: Decimal::ZERO,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        income("1", dec!(3000), "salary", "2024-03-01"),
        expense("2", dec!(45.20), "food", "2024-03-03"),
        expense("3", dec!(120), "transport", "2024-03-15"),
        expense("4", dec!(14.80), "food", "2024-03-31"),
        income("5", dec!(400), "freelance", "2024-02-28"),
        expense("6", dec!(999), "shopping", "2024-04-01"),
        expense("7", dec!(60), "food", "2023-03-10"),
    ]
}

// ── Monthly summary ───────────────────────────────────────────

#[test]
fn test_monthly_summary_totals() {
    let summary = monthly_summary(&sample(), month("2024-03"));
    assert_eq!(summary.total_income, dec!(3000));
    assert_eq!(summary.total_expense, dec!(180));
    assert_eq!(summary.net_balance, dec!(2820));
    assert_eq!(summary.transaction_count, 4);
}

#[test]
fn test_monthly_summary_empty_month() {
    let summary = monthly_summary(&sample(), month("2025-01"));
    assert_eq!(summary, MonthlySummary::default());
}

#[test]
fn test_monthly_summary_negative_net() {
    let txns = vec![
        income("1", dec!(100), "salary", "2024-05-01"),
        expense("2", dec!(250.50), "bills", "2024-05-02"),
    ];
    let summary = monthly_summary(&txns, month("2024-05"));
    assert_eq!(summary.net_balance, dec!(-150.50));
}

#[test]
fn test_monthly_summary_order_independent() {
    let txns = sample();
    let expected = monthly_summary(&txns, month("2024-03"));

    let mut reversed = txns.clone();
    reversed.reverse();
    assert_eq!(monthly_summary(&reversed, month("2024-03")), expected);

    let mut rotated = txns.clone();
    rotated.rotate_left(3);
    assert_eq!(monthly_summary(&rotated, month("2024-03")), expected);

    let mut swapped = txns;
    swapped.swap(0, 5);
    swapped.swap(2, 6);
    assert_eq!(monthly_summary(&swapped, month("2024-03")), expected);
}

// ── Category breakdown ────────────────────────────────────────

#[test]
fn test_breakdown_groups_and_sorts_descending() {
    let breakdown = category_breakdown(&sample(), month("2024-03"));
    assert_eq!(breakdown.len(), 2);

    assert_eq!(breakdown[0].category_id, "transport");
    assert_eq!(breakdown[0].total, dec!(120));
    assert_eq!(breakdown[0].name, "Transportation");
    assert_eq!(breakdown[0].color, "#F97316");

    assert_eq!(breakdown[1].category_id, "food");
    assert_eq!(breakdown[1].total, dec!(60));
    assert_eq!(breakdown[1].name, "Food & Dining");
}

#[test]
fn test_breakdown_ignores_income() {
    let txns = vec![
        income("1", dec!(10), "salary", "2024-03-01"),
        expense("2", dec!(5), "food", "2024-03-01"),
    ];
    let breakdown = category_breakdown(&txns, month("2024-03"));
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category_id, "food");
}

#[test]
fn test_breakdown_ties_keep_first_seen_order() {
    let txns = vec![
        expense("1", dec!(50), "education", "2024-03-01"),
        expense("2", dec!(80), "bills", "2024-03-02"),
        expense("3", dec!(50), "healthcare", "2024-03-03"),
        expense("4", dec!(50), "food", "2024-03-04"),
    ];
    let ids: Vec<String> = category_breakdown(&txns, month("2024-03"))
        .into_iter()
        .map(|c| c.category_id)
        .collect();
    assert_eq!(ids, ["bills", "education", "healthcare", "food"]);
}

#[test]
fn test_breakdown_unknown_category_placeholder() {
    let txns = vec![expense("1", dec!(25), "pets", "2024-03-01")];
    let breakdown = category_breakdown(&txns, month("2024-03"));
    assert_eq!(breakdown[0].category_id, "pets");
    assert_eq!(breakdown[0].name, UNKNOWN_NAME);
    assert_eq!(breakdown[0].color, UNKNOWN_COLOR);
}

#[test]
fn test_breakdown_shares() {
    let txns = vec![
        expense("1", dec!(75), "food", "2024-03-01"),
        expense("2", dec!(25), "bills", "2024-03-01"),
    ];
    let breakdown = category_breakdown(&txns, month("2024-03"));
    assert_eq!(breakdown[0].share, dec!(75));
    assert_eq!(breakdown[1].share, dec!(25));
}

#[test]
fn test_breakdown_empty() {
    assert!(category_breakdown(&[], month("2024-03")).is_empty());
}

// ── Monthly series ────────────────────────────────────────────

#[test]
fn test_series_empty_transactions() {
    let series = monthly_series(&[], 6, date("2024-03-20"));
    assert_eq!(series.len(), 6);
    assert!(series
        .iter()
        .all(|m| m.total_expense == Decimal::ZERO && m.total_income == Decimal::ZERO));
    let months: Vec<String> = series.iter().map(|m| m.month.to_string()).collect();
    assert_eq!(
        months,
        ["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
    );
}

#[test]
fn test_series_totals_and_labels() {
    let series = monthly_series(&sample(), 3, date("2024-04-15"));
    assert_eq!(series.len(), 3);

    assert_eq!(series[0].label, "Feb 2024");
    assert_eq!(series[0].total_income, dec!(400));
    assert_eq!(series[0].total_expense, Decimal::ZERO);

    assert_eq!(series[1].label, "Mar 2024");
    assert_eq!(series[1].total_income, dec!(3000));
    assert_eq!(series[1].total_expense, dec!(180));

    assert_eq!(series[2].label, "Apr 2024");
    assert_eq!(series[2].total_expense, dec!(999));
}

#[test]
fn test_series_matches_monthly_summary() {
    let txns = sample();
    for entry in monthly_series(&txns, 12, date("2024-06-30")) {
        let summary = monthly_summary(&txns, entry.month);
        assert_eq!(entry.total_income, summary.total_income);
        assert_eq!(entry.total_expense, summary.total_expense);
    }
}

#[test]
fn test_series_zero_months() {
    assert!(monthly_series(&sample(), 0, date("2024-03-01")).is_empty());
}

// ── Budget progress ───────────────────────────────────────────

#[test]
fn test_budget_progress_over_budget() {
    let b = budget("food", "2024-03", dec!(1000));
    let txns = vec![
        expense("1", dec!(700), "food", "2024-03-02"),
        expense("2", dec!(500), "food", "2024-03-20"),
    ];
    let progress = budget_progress(&b, &txns);
    assert_eq!(progress.spent, dec!(1200));
    assert_eq!(progress.percentage, dec!(120));
    assert_eq!(progress.remaining, Decimal::ZERO);
    assert!(progress.is_over_budget);
}

#[test]
fn test_budget_progress_ignores_other_month() {
    let b = budget("food", "2024-03", dec!(500));
    let txns = vec![expense("1", dec!(300), "food", "2024-04-01")];
    let progress = budget_progress(&b, &txns);
    assert_eq!(progress.spent, Decimal::ZERO);
    assert_eq!(progress.percentage, Decimal::ZERO);
    assert_eq!(progress.remaining, dec!(500));
    assert!(!progress.is_over_budget);
}

#[test]
fn test_budget_progress_ignores_other_category_and_income() {
    let b = budget("food", "2024-03", dec!(200));
    let txns = vec![
        expense("1", dec!(50), "food", "2024-03-02"),
        expense("2", dec!(75), "transport", "2024-03-02"),
        income("3", dec!(1000), "salary", "2024-03-02"),
    ];
    let progress = budget_progress(&b, &txns);
    assert_eq!(progress.spent, dec!(50));
    assert_eq!(progress.percentage, dec!(25));
    assert_eq!(progress.remaining, dec!(150));
    assert!(!progress.is_over_budget);
}

#[test]
fn test_budget_progress_exactly_at_limit() {
    let b = budget("bills", "2024-03", dec!(100));
    let txns = vec![expense("1", dec!(100), "bills", "2024-03-05")];
    let progress = budget_progress(&b, &txns);
    assert_eq!(progress.percentage, dec!(100));
    assert_eq!(progress.remaining, Decimal::ZERO);
    assert!(!progress.is_over_budget);
}

#[test]
fn test_budget_progress_zero_amount_guarded() {
    let b = budget("food", "2024-03", Decimal::ZERO);
    let txns = vec![expense("1", dec!(10), "food", "2024-03-05")];
    let progress = budget_progress(&b, &txns);
    assert_eq!(progress.percentage, Decimal::ZERO);
    assert_eq!(progress.spent, dec!(10));
    assert!(progress.is_over_budget);
}

// ── Extreme amounts ───────────────────────────────────────────

#[test]
fn test_monthly_summary_saturates_instead_of_overflowing() {
    let txns = vec![
        expense("1", Decimal::MAX, "food", "2024-03-02"),
        expense("2", Decimal::MAX, "food", "2024-03-03"),
        income("3", dec!(1), "salary", "2024-03-04"),
    ];
    let s = monthly_summary(&txns, month("2024-03"));
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.total_income, dec!(1));
    assert_eq!(s.net_balance, dec!(1) - Decimal::MAX);
    assert_eq!(s.transaction_count, 3);

    let breakdown = category_breakdown(&txns, month("2024-03"));
    assert_eq!(breakdown[0].total, Decimal::MAX);
    assert_eq!(breakdown[0].share, dec!(100));

    let series = monthly_series(&txns, 1, date("2024-03-20"));
    assert_eq!(series[0].total_expense, Decimal::MAX);
}

#[test]
fn test_many_small_amounts_sum_exactly() {
    let txns: Vec<Transaction> = (0..1000)
        .map(|i| expense(&i.to_string(), dec!(0.01), "food", "2024-03-10"))
        .collect();
    let s = monthly_summary(&txns, month("2024-03"));
    assert_eq!(s.total_expense, dec!(10.00));
    assert_eq!(s.transaction_count, 1000);
}

#[test]
fn test_budget_progress_tiny_ceiling_clamps_percentage() {
    let b = budget("food", "2024-03", dec!(0.0001));
    let txns = vec![expense("1", dec!(100000000000000000000000000), "food", "2024-03-05")];
    let p = budget_progress(&b, &txns);
    assert_eq!(p.percentage, Decimal::MAX);
    assert_eq!(p.remaining, Decimal::ZERO);
    assert!(p.is_over_budget);
}

// ── Budget overview ───────────────────────────────────────────

#[test]
fn test_budget_overview_filters_month() {
    let budgets = BudgetStore::from_vec(vec![
        budget("food", "2024-03", dec!(100)),
        budget("food", "2024-04", dec!(100)),
        budget("gone", "2024-03", dec!(40)),
    ]);
    let lines = budget_overview(&budgets, &sample(), month("2024-03"));
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0].category.name, "Food & Dining");
    assert_eq!(lines[0].progress.spent, dec!(60));
    assert_eq!(lines[0].budget.id, "food-2024-03");

    assert!(lines[1].category.is_unknown());
    assert_eq!(lines[1].progress.spent, Decimal::ZERO);
}

// ── Transaction query ─────────────────────────────────────────

#[test]
fn test_query_default_is_date_descending() {
    let txns = sample();
    let ids: Vec<&str> = TransactionQuery::default()
        .apply(&txns)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, ["6", "4", "3", "2", "1", "5", "7"]);
}

#[test]
fn test_query_filters_by_type_and_category() {
    let txns = sample();
    let query = TransactionQuery {
        kind: Some(TransactionType::Expense),
        category: Some("food".into()),
        ..Default::default()
    };
    let ids: Vec<&str> = query.apply(&txns).into_iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["4", "2", "7"]);

    let income_only = TransactionQuery {
        kind: Some(TransactionType::Income),
        ..Default::default()
    };
    assert_eq!(income_only.apply(&txns).len(), 2);
}

#[test]
fn test_query_sort_by_amount_ascending() {
    let txns = sample();
    let query = TransactionQuery {
        sort: SortKey::Amount,
        order: SortOrder::Ascending,
        ..Default::default()
    };
    let amounts: Vec<Decimal> = query.apply(&txns).into_iter().map(|t| t.amount).collect();
    assert_eq!(
        amounts,
        [dec!(14.80), dec!(45.20), dec!(60), dec!(120), dec!(400), dec!(999), dec!(3000)]
    );
}

#[test]
fn test_query_sort_is_stable() {
    let txns = vec![
        expense("a", dec!(10), "food", "2024-03-01"),
        expense("b", dec!(10), "food", "2024-03-01"),
        expense("c", dec!(10), "food", "2024-03-01"),
    ];
    let ids: Vec<&str> = TransactionQuery::default()
        .apply(&txns)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}
