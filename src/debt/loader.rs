//! Load debts from CSV
//!
//! Expected headers: `id,balance,annual_interest_rate`. The rate column may be
//! left empty or omitted, in which case the debt carries no interest.

use super::Debt;
use crate::error::Result;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DebtRow {
    id: String,
    balance: f64,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    annual_interest_rate: Option<f64>,
}

impl From<DebtRow> for Debt {
    fn from(row: DebtRow) -> Self {
        Debt::new(row.id, row.balance, row.annual_interest_rate.unwrap_or(0.0))
    }
}

/// Load debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let file = File::open(path.as_ref())?;
    let debts = load_debts_from_reader(file)?;
    info!("Loaded {} debts from {}", debts.len(), path.as_ref().display());
    Ok(debts)
}

/// Load debts from any CSV reader, validating each row
pub fn load_debts_from_reader<R: Read>(reader: R) -> Result<Vec<Debt>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut debts = Vec::new();
    for row in rdr.deserialize::<DebtRow>() {
        let debt = Debt::from(row?);
        debt.validate()?;
        debts.push(debt);
    }
    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayoffError;

    #[test]
    fn test_load_from_reader() {
        let data = "\
id,balance,annual_interest_rate
visa,2500.00,22.9
car, 8000 ,6.5
family,400,
";
        let debts = load_debts_from_reader(data.as_bytes()).expect("Failed to load");

        assert_eq!(debts.len(), 3);
        assert_eq!(debts[0], Debt::new("visa", 2500.0, 22.9));
        assert_eq!(debts[1].balance, 8000.0);
        assert_eq!(debts[2].annual_interest_rate, 0.0);
    }

    #[test]
    fn test_rate_column_optional() {
        let data = "id,balance\nstudent,12000\n";
        let debts = load_debts_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(debts, vec![Debt::new("student", 12_000.0, 0.0)]);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let data = "id,balance,annual_interest_rate\nbad,-10,5\n";
        let err = load_debts_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PayoffError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_number() {
        let data = "id,balance,annual_interest_rate\nbad,lots,5\n";
        let err = load_debts_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PayoffError::Csv(_)));
    }
}
