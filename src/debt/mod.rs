//! Debt data structures, CSV loading and account normalization

mod data;
pub mod loader;
pub mod accounts;

pub use data::Debt;
pub use loader::{load_debts, load_debts_from_reader};
pub use accounts::{AccountKind, AccountRecord, debts_from_accounts, load_accounts, load_accounts_from_reader};
