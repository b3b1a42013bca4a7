mod budget;
mod category;
mod month;
mod transaction;

pub(crate) use budget::Budget;
pub(crate) use category::{Category, CategoryDisplay};
#[cfg(test)]
pub(crate) use category::{CategoryIcon, UNKNOWN_COLOR, UNKNOWN_NAME};
pub(crate) use month::YearMonth;
pub(crate) use transaction::{NewTransaction, Transaction, TransactionType};
