//! Input boundary: normalization of raw ledger rows into transaction records
//!
//! Upstream readers (CSV, spreadsheet, whatever) hand over [`RawRow`]s with
//! optional, still-textual fields. Normalization assigns row positions as
//! source ids, truncates timestamps to calendar dates, parses amounts as
//! exact decimals, and fails fast on the first unusable row so the matcher
//! never sees partial input.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{LedgerSide, ReconcileError, ReconcileResult, TransactionRecord};
use crate::utils::validation::parse_amount;

/// A ledger row as delivered by an ingestion collaborator, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Transaction timestamp; only the date portion participates in matching
    pub date: Option<NaiveDateTime>,
    /// Amount as text, parsed to an exact decimal during normalization
    pub amount: Option<String>,
    /// Free-text label; missing descriptions normalize to an empty string
    pub description: Option<String>,
}

impl RawRow {
    /// Convenience constructor for fully populated rows
    pub fn new(date: NaiveDateTime, amount: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            amount: Some(amount.into()),
            description: Some(description.into()),
        }
    }
}

/// Normalize one side's raw rows into matcher-ready transaction records.
///
/// Row positions become `source_id`s, so output ordering stays stable and
/// each record can be traced back to its original line. The first row with a
/// missing date, missing amount, or non-numeric amount aborts the whole
/// normalization with [`ReconcileError::MalformedInput`].
pub fn normalize(side: LedgerSide, rows: &[RawRow]) -> ReconcileResult<Vec<TransactionRecord>> {
    let mut records = Vec::with_capacity(rows.len());

    for (row, raw) in rows.iter().enumerate() {
        let date = raw
            .date
            .ok_or_else(|| ReconcileError::MalformedInput {
                side,
                row,
                reason: "missing date".to_string(),
            })?
            .date();

        let amount_text = raw
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ReconcileError::MalformedInput {
                side,
                row,
                reason: "missing amount".to_string(),
            })?;
        let amount = parse_amount(side, row, amount_text)?;

        let description = raw.description.clone().unwrap_or_default();

        records.push(TransactionRecord::new(row, date, amount, description));
    }

    Ok(records)
}

/// Map a raw column label to its canonical field name, if recognized.
///
/// Labels are trimmed and lowercased before lookup. Besides the canonical
/// English names this resolves the Indonesian labels common in the ledger
/// exports this engine consumes (tanggal, nominal, deskripsi), so upstream
/// readers share one header contract.
pub fn canonical_column(label: &str) -> Option<&'static str> {
    match label.trim().to_lowercase().as_str() {
        "date" | "tanggal" => Some("date"),
        "amount" | "nominal" => Some("amount"),
        "description" | "desc" | "deskripsi" => Some("description"),
        _ => None,
    }
}
