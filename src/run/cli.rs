use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

use super::format::{format_amount, format_percent, progress_bar, truncate};
use super::{EditArgs, KindArg, Session, TransactionArgs};
use crate::aggregate::{self, TransactionQuery};
use crate::models::{Category, Transaction, TransactionType, YearMonth};
use crate::store::{KeyValueStore, Ledger};
use crate::validate::{BudgetForm, TransactionForm};

pub(crate) fn add<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    session: &Session,
    args: TransactionArgs,
    out: &mut impl Write,
) -> Result<()> {
    let form = TransactionForm {
        kind: args.kind.into(),
        amount: args.amount,
        description: args.description,
        category: args.category,
        date: args.date.unwrap_or_else(|| session.today.to_string()),
    };
    let new = form.validate()?;
    let id = ledger.add_transaction(new)?;
    writeln!(out, "Added transaction {id}")?;
    Ok(())
}

pub(crate) fn edit<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    id: &str,
    fields: EditArgs,
    out: &mut impl Write,
) -> Result<()> {
    let Some(existing) = ledger.find_transaction(id) else {
        writeln!(out, "No transaction with id {id}")?;
        return Ok(());
    };

    let kind: TransactionType = fields.kind.map(Into::into).unwrap_or(existing.kind);
    // Switching type clears the category unless a new one is given.
    let category = match fields.category {
        Some(c) => c,
        None if kind != existing.kind => String::new(),
        None => existing.category.clone(),
    };
    let form = TransactionForm {
        kind,
        amount: fields.amount.unwrap_or_else(|| existing.amount.to_string()),
        description: fields
            .description
            .unwrap_or_else(|| existing.description.clone()),
        category,
        date: fields.date.unwrap_or_else(|| existing.date.to_string()),
    };
    let new = form.validate()?;

    let updated = Transaction {
        id: existing.id.clone(),
        kind: new.kind,
        amount: new.amount,
        description: new.description,
        date: new.date,
        category: new.category,
        created_at: existing.created_at,
    };
    if ledger.update_transaction(updated)? {
        writeln!(out, "Updated transaction {id}")?;
    } else {
        writeln!(out, "No transaction with id {id}")?;
    }
    Ok(())
}

pub(crate) fn remove<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    if ledger.remove_transaction(id)? {
        writeln!(out, "Removed transaction {id}")?;
    } else {
        writeln!(out, "No transaction with id {id}")?;
    }
    Ok(())
}

pub(crate) fn list<S: KeyValueStore>(
    ledger: &Ledger<S>,
    session: &Session,
    query: &TransactionQuery,
    out: &mut impl Write,
) -> Result<()> {
    if ledger.transactions().is_empty() {
        writeln!(out, "No transactions yet")?;
        return Ok(());
    }
    let rows = query.apply(ledger.transactions());
    if rows.is_empty() {
        writeln!(out, "No transactions match")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<10}  {:>14}  {:<18}  {:<28}  ID",
        "Date", "Amount", "Category", "Description"
    )?;
    writeln!(out, "{}", "─".repeat(110))?;
    for txn in rows {
        let category = Category::display(&txn.category);
        writeln!(
            out,
            "{:<10}  {:>14}  {:<18}  {:<28}  {}",
            txn.date,
            format_amount(txn.signed_amount(), &session.currency),
            truncate(category.name, 18),
            truncate(&txn.description, 28),
            txn.id,
        )?;
    }
    Ok(())
}

pub(crate) fn summary<S: KeyValueStore>(
    ledger: &Ledger<S>,
    session: &Session,
    month: Option<YearMonth>,
    out: &mut impl Write,
) -> Result<()> {
    let month = month.unwrap_or_else(|| YearMonth::of(session.today));
    let txns = ledger.transactions();
    let totals = aggregate::monthly_summary(txns, month);
    let money = |v| format_amount(v, &session.currency);

    writeln!(out, "fintrack - {}", month.long_label())?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Income:       {}", money(totals.total_income))?;
    writeln!(out, "  Expenses:     {}", money(totals.total_expense))?;
    writeln!(out, "  Net Balance:  {}", money(totals.net_balance))?;
    writeln!(out, "  Transactions: {}", totals.transaction_count)?;

    let breakdown = aggregate::category_breakdown(txns, month);
    if !breakdown.is_empty() {
        writeln!(out)?;
        writeln!(out, "Spending by Category:")?;
        for entry in &breakdown {
            writeln!(
                out,
                "  {:<20} {:>14} {:>7}",
                truncate(entry.name, 20),
                money(entry.total),
                format_percent(entry.share),
            )?;
        }
    }
    Ok(())
}

pub(crate) fn trend<S: KeyValueStore>(
    ledger: &Ledger<S>,
    session: &Session,
    months: u32,
    anchor: Option<NaiveDate>,
    out: &mut impl Write,
) -> Result<()> {
    let series = aggregate::monthly_series(
        ledger.transactions(),
        months,
        anchor.unwrap_or(session.today),
    );
    writeln!(out, "{:<10} {:>14} {:>14}", "Month", "Income", "Expenses")?;
    writeln!(out, "{}", "─".repeat(40))?;
    for entry in &series {
        writeln!(
            out,
            "{:<10} {:>14} {:>14}",
            entry.label,
            format_amount(entry.total_income, &session.currency),
            format_amount(entry.total_expense, &session.currency),
        )?;
    }
    Ok(())
}

pub(crate) fn budget_set<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    session: &Session,
    category: String,
    amount: String,
    month: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let form = BudgetForm {
        category_id: category,
        amount,
        month: month.unwrap_or_else(|| YearMonth::of(session.today).to_string()),
    };
    let budget = form.validate()?;
    let (name, month, limit) = (
        Category::display(&budget.category_id).name,
        budget.month,
        budget.amount,
    );
    let id = ledger.upsert_budget(budget)?;
    writeln!(
        out,
        "Budget for {name} in {}: {} (id {id})",
        month.long_label(),
        format_amount(limit, &session.currency)
    )?;
    Ok(())
}

pub(crate) fn budget_remove<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    if ledger.remove_budget(id)? {
        writeln!(out, "Removed budget {id}")?;
    } else {
        writeln!(out, "No budget with id {id}")?;
    }
    Ok(())
}

pub(crate) fn budget_list<S: KeyValueStore>(
    ledger: &Ledger<S>,
    session: &Session,
    month: Option<YearMonth>,
    out: &mut impl Write,
) -> Result<()> {
    let month = month.unwrap_or_else(|| YearMonth::of(session.today));
    let lines = aggregate::budget_overview(ledger.budgets(), ledger.transactions(), month);
    if lines.is_empty() {
        writeln!(out, "No budgets set for {}", month.long_label())?;
        return Ok(());
    }

    let money = |v| format_amount(v, &session.currency);
    writeln!(out, "Budgets for {}", month.long_label())?;
    writeln!(out, "{}", "─".repeat(40))?;
    for line in &lines {
        let name = if line.category.is_unknown() {
            "Unknown Category"
        } else {
            line.category.name
        };
        let p = &line.progress;
        writeln!(
            out,
            "{} {name}{}",
            line.category.icon.glyph(),
            if p.is_over_budget { "  [OVER BUDGET]" } else { "" }
        )?;
        writeln!(
            out,
            "    {} spent of {}  {} {} used, {} remaining",
            money(p.spent),
            money(line.budget.amount),
            progress_bar(p.percentage, 20),
            format_percent(p.percentage),
            money(p.remaining),
        )?;
        writeln!(out, "    id {}", line.budget.id)?;
    }
    Ok(())
}

pub(crate) fn categories(kind: Option<KindArg>, out: &mut impl Write) -> Result<()> {
    let kinds: Vec<TransactionType> = match kind {
        Some(k) => vec![k.into()],
        None => TransactionType::all().to_vec(),
    };
    for kind in kinds {
        writeln!(out, "{} categories:", capitalize(kind.as_str()))?;
        for cat in Category::by_type(kind) {
            writeln!(
                out,
                "  {} {:<15} {:<18} {}  {}",
                cat.icon.glyph(),
                cat.id,
                cat.name,
                cat.color,
                cat.icon.as_str(),
            )?;
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
