//! Output boundary: flat sheet tables for display or workbook export
//!
//! The export collaborator serializes these sheets into a multi-sheet
//! workbook or renders them as tables; the core only guarantees structured,
//! rectangular string data in report order.

use serde::{Deserialize, Serialize};

use crate::types::ReconciliationReport;

/// Sheet name for the matched pairs table
pub const MATCHED_SHEET: &str = "matched";
/// Sheet name for the invoices with no bank counterpart
pub const UNMATCHED_INVOICES_SHEET: &str = "unmatched invoices";
/// Sheet name for the bank lines never consumed by a match
pub const UNMATCHED_BANK_SHEET: &str = "unmatched bank lines";

/// A flat table: one named sheet of string cells under fixed headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// Render a report as its three output sheets, in the fixed order
/// matched, unmatched invoices, unmatched bank lines.
///
/// Dates are formatted as ISO `YYYY-MM-DD`; amounts keep the decimal
/// precision of the input. Row order equals report order.
pub fn sheets(report: &ReconciliationReport) -> Vec<Sheet> {
    let mut matched = Sheet::new(
        MATCHED_SHEET,
        &[
            "invoice_date",
            "bank_date",
            "amount",
            "invoice_description",
            "bank_description",
        ],
    );
    for pair in &report.matched {
        matched.rows.push(vec![
            pair.invoice_date.to_string(),
            pair.bank_date.to_string(),
            pair.amount.to_string(),
            pair.invoice_description.clone(),
            pair.bank_description.clone(),
        ]);
    }

    let mut unmatched_invoices = Sheet::new(
        UNMATCHED_INVOICES_SHEET,
        &["date", "amount", "description"],
    );
    for record in &report.unmatched_invoices {
        unmatched_invoices.rows.push(vec![
            record.date.to_string(),
            record.amount.to_string(),
            record.description.clone(),
        ]);
    }

    let mut unmatched_bank = Sheet::new(UNMATCHED_BANK_SHEET, &["date", "amount", "description"]);
    for record in &report.unmatched_bank {
        unmatched_bank.rows.push(vec![
            record.date.to_string(),
            record.amount.to_string(),
            record.description.clone(),
        ]);
    }

    vec![matched, unmatched_invoices, unmatched_bank]
}
