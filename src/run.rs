mod cli;
pub(crate) mod format;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::aggregate::{SortKey, SortOrder, TransactionQuery};
use crate::models::{TransactionType, YearMonth};
use crate::store::{KeyValueStore, Ledger};

/// fintrack - local-only personal finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// File path to the SQLite database (default: platform data directory).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Currency symbol used when printing amounts.
    #[arg(long, global = true, default_value = "₹")]
    pub currency: String,

    /// Print debug logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Record a new transaction.
    Add(TransactionArgs),

    /// Replace the fields of an existing transaction.
    Edit {
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a transaction.
    #[command(alias = "rm")]
    Remove { id: String },

    /// List transactions.
    #[command(alias = "ls")]
    List {
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, default_value_t = SortArg::Date)]
        sort: SortArg,
        /// Ascending instead of descending.
        #[arg(long)]
        asc: bool,
    },

    /// Income, expenses and spending by category for a month.
    #[command(alias = "s")]
    Summary {
        /// Month as YYYY-MM (default: current month).
        month: Option<YearMonth>,
    },

    /// Income and expenses for consecutive months.
    Trend {
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=120))]
        months: u32,
        /// Last day to include, YYYY-MM-DD (default: today).
        #[arg(long)]
        anchor: Option<NaiveDate>,
    },

    /// Manage monthly budgets.
    #[command(subcommand)]
    Budget(BudgetCommand),

    /// Show the category registry.
    Categories {
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum BudgetCommand {
    /// Create or replace the budget for a category and month.
    Set {
        category: String,
        amount: String,
        /// Month as YYYY-MM (default: current month).
        #[arg(long)]
        month: Option<String>,
    },
    /// Delete a budget by id.
    #[command(alias = "rm")]
    Remove { id: String },
    /// Budgets for a month with progress against actual spending.
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        month: Option<YearMonth>,
    },
}

#[derive(Args, Debug)]
pub(crate) struct TransactionArgs {
    #[arg(long = "type", value_enum, default_value_t = KindArg::Expense)]
    pub kind: KindArg,
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: String,
    /// YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EditArgs {
    #[arg(long = "type", value_enum)]
    pub kind: Option<KindArg>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SortArg {
    Date,
    Amount,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Date => SortKey::Date,
            SortArg::Amount => SortKey::Amount,
        }
    }
}

impl SortArg {
    pub(crate) fn order(asc: bool) -> SortOrder {
        if asc {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Settings the command handlers print with.
pub(crate) struct Session {
    pub currency: String,
    pub today: NaiveDate,
}

pub(crate) fn execute<S: KeyValueStore>(
    command: Option<Command>,
    ledger: &mut Ledger<S>,
    session: &Session,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        None => cli::summary(ledger, session, None, out),
        Some(Command::Add(args)) => cli::add(ledger, session, args, out),
        Some(Command::Edit { id, fields }) => cli::edit(ledger, &id, fields, out),
        Some(Command::Remove { id }) => cli::remove(ledger, &id, out),
        Some(Command::List {
            kind,
            category,
            sort,
            asc,
        }) => {
            let query = TransactionQuery {
                kind: kind.map(Into::into),
                category,
                sort: sort.into(),
                order: SortArg::order(asc),
            };
            cli::list(ledger, session, &query, out)
        }
        Some(Command::Summary { month }) => cli::summary(ledger, session, month, out),
        Some(Command::Trend { months, anchor }) => cli::trend(ledger, session, months, anchor, out),
        Some(Command::Budget(BudgetCommand::Set {
            category,
            amount,
            month,
        })) => cli::budget_set(ledger, session, category, amount, month, out),
        Some(Command::Budget(BudgetCommand::Remove { id })) => cli::budget_remove(ledger, &id, out),
        Some(Command::Budget(BudgetCommand::List { month })) => {
            cli::budget_list(ledger, session, month, out)
        }
        Some(Command::Categories { kind }) => cli::categories(kind, out),
    }
}
