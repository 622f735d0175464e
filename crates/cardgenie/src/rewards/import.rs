use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{CardId, SpendCategory, Transaction};

/// Errors raised while importing a card statement export. CSV parsing is
/// the one fallible boundary in the rewards domain; everything downstream
/// of a successful import is total.
#[derive(Debug, thiserror::Error)]
pub enum StatementImportError {
    #[error("failed to read statement csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open statement file: {0}")]
    Io(#[from] std::io::Error),
    #[error("row {row}: invalid date '{value}' (expected YYYY-MM-DD or MM/DD/YYYY)")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: invalid amount '{value}'")]
    InvalidAmount { row: usize, value: String },
}

/// Imports card statement CSV exports into transactions for the spending
/// insights. Expected columns: `Date`, `Merchant`, `Category`, `Amount`,
/// `Card`, `Rewards`; category falls back to the `other` bucket and
/// rewards default to zero when absent.
pub struct StatementImporter;

impl StatementImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Transaction>, StatementImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>, StatementImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut transactions = Vec::new();

        for (index, record) in csv_reader.deserialize::<StatementRow>().enumerate() {
            let row = record?;
            let row_number = index + 1;

            let date = parse_date(&row.date).ok_or_else(|| StatementImportError::InvalidDate {
                row: row_number,
                value: row.date.clone(),
            })?;
            let amount_cents =
                parse_amount_cents(&row.amount).ok_or_else(|| StatementImportError::InvalidAmount {
                    row: row_number,
                    value: row.amount.clone(),
                })?;

            let card_id = match row.card.as_deref() {
                Some(card) => CardId::new(card),
                None => CardId::new("unassigned"),
            };
            let rewards_earned = row
                .rewards
                .as_deref()
                .and_then(|value| value.parse::<u32>().ok())
                .unwrap_or(0);

            transactions.push(Transaction {
                id: format!("stmt-{row_number:04}"),
                date,
                merchant: row.merchant,
                category: SpendCategory::resolve(&row.category),
                amount_cents,
                card_id,
                rewards_earned,
            });
        }

        Ok(transactions)
    }
}

#[derive(Debug, Deserialize)]
struct StatementRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Merchant")]
    merchant: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Card", default, deserialize_with = "empty_string_as_none")]
    card: Option<String>,
    #[serde(rename = "Rewards", default, deserialize_with = "empty_string_as_none")]
    rewards: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").ok()
}

/// Parses a dollar amount ("124.50", "$1,240", "85") into cents. Negative
/// or malformed values are rejected.
fn parse_amount_cents(raw: &str) -> Option<u32> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.split_once('.') {
        Some((dollars, cents)) => {
            let dollars: u32 = dollars.parse().ok()?;
            let cents: u32 = match cents.len() {
                1 => cents.parse::<u32>().ok()? * 10,
                2 => cents.parse().ok()?,
                _ => return None,
            };
            dollars.checked_mul(100)?.checked_add(cents)
        }
        None => cleaned.parse::<u32>().ok()?.checked_mul(100),
    }
}
