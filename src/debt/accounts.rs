//! Convert raw account records into debts
//!
//! Account exports carry signed balances: money owed shows up negative on
//! liability accounts. This module picks out the active debt-type accounts
//! with an outstanding balance and flips the sign so the engine sees
//! positive amounts owed.

use super::Debt;
use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of account as recorded by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
    CreditCard,
    Loan,
    Mortgage,
    LineOfCredit,
}

impl AccountKind {
    /// Liability accounts that can be paid down
    pub fn is_debt(&self) -> bool {
        matches!(
            self,
            AccountKind::CreditCard
                | AccountKind::Loan
                | AccountKind::Mortgage
                | AccountKind::LineOfCredit
        )
    }
}

/// Account as exported by the surrounding application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub kind: AccountKind,

    /// Signed balance; negative means money owed
    pub balance: f64,

    /// APR in percent, absent for accounts without interest terms
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub annual_interest_rate: Option<f64>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool { true }

/// Keep active debt accounts that are in the red, with sign-normalized balances
pub fn debts_from_accounts(accounts: &[AccountRecord]) -> Vec<Debt> {
    accounts
        .iter()
        .filter(|a| a.active && a.kind.is_debt() && a.balance < 0.0)
        .map(|a| Debt::new(a.id.clone(), -a.balance, a.annual_interest_rate.unwrap_or(0.0)))
        .collect()
}

/// Read account records from a CSV file
pub fn load_accounts<P: AsRef<Path>>(path: P) -> Result<Vec<AccountRecord>> {
    let file = File::open(path.as_ref())?;
    let accounts = load_accounts_from_reader(file)?;
    info!("Loaded {} accounts from {}", accounts.len(), path.as_ref().display());
    Ok(accounts)
}

/// Read account records from CSV
///
/// Headers: `id,name,kind,balance,annual_interest_rate,active`
pub fn load_accounts_from_reader<R: Read>(reader: R) -> Result<Vec<AccountRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut accounts = Vec::new();
    for row in rdr.deserialize::<AccountRecord>() {
        accounts.push(row?);
    }
    Ok(accounts)
}
