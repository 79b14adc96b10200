//! Core types and data structures for the reconciliation engine

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which ledger a record was read from
///
/// Used for error reporting and for keeping the two input collections apart;
/// the matcher itself treats both sides as plain transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerSide {
    /// The invoice ledger (amounts expected to be paid)
    Invoice,
    /// The bank statement ledger (amounts actually seen on the account)
    Bank,
}

impl fmt::Display for LedgerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerSide::Invoice => write!(f, "invoice"),
            LedgerSide::Bank => write!(f, "bank"),
        }
    }
}

/// A single normalized ledger entry, used for both invoice and bank inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Identifier stable within the record's own collection (original row
    /// position). Guarantees each record is matched at most once and keeps
    /// output ordering stable.
    pub source_id: usize,
    /// Calendar date of the transaction; timestamps are truncated to their
    /// date portion at the ingestion boundary
    pub date: NaiveDate,
    /// Signed decimal amount, compared by exact equality
    pub amount: BigDecimal,
    /// Free-text label, carried through but never used for matching
    pub description: String,
}

impl TransactionRecord {
    /// Create a new transaction record
    pub fn new(source_id: usize, date: NaiveDate, amount: BigDecimal, description: String) -> Self {
        Self {
            source_id,
            date,
            amount,
            description,
        }
    }
}

/// A matched pair of exactly one invoice record and one bank record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// `source_id` of the invoice record consumed by this match
    pub invoice_source_id: usize,
    /// `source_id` of the bank record consumed by this match
    pub bank_source_id: usize,
    /// Date recorded on the invoice side
    pub invoice_date: NaiveDate,
    /// Date recorded on the bank side
    pub bank_date: NaiveDate,
    /// The shared amount (equal on both sides by construction)
    pub amount: BigDecimal,
    /// Description from the invoice record
    pub invoice_description: String,
    /// Description from the bank record
    pub bank_description: String,
}

impl MatchRecord {
    /// Build a match record from an invoice record and the bank record it
    /// consumed. Takes ownership of the bank record since it has just been
    /// removed from the available pool.
    pub fn from_pair(invoice: &TransactionRecord, bank: TransactionRecord) -> Self {
        Self {
            invoice_source_id: invoice.source_id,
            bank_source_id: bank.source_id,
            invoice_date: invoice.date,
            bank_date: bank.date,
            amount: bank.amount,
            invoice_description: invoice.description.clone(),
            bank_description: bank.description,
        }
    }
}

/// The three disjoint output collections of one reconciliation run
///
/// Every invoice record appears exactly once across `matched` and
/// `unmatched_invoices`; every bank record exactly once across `matched` and
/// `unmatched_bank`. The collections are newly constructed each run and have
/// no persistence beyond the caller's use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Tolerance window (in days) the run was executed with
    pub tolerance_days: i64,
    /// Matched invoice/bank pairs, in invoice input order
    pub matched: Vec<MatchRecord>,
    /// Invoice records with no bank counterpart, in input order
    pub unmatched_invoices: Vec<TransactionRecord>,
    /// Bank records never consumed by a match, in input order
    pub unmatched_bank: Vec<TransactionRecord>,
}

impl ReconciliationReport {
    /// Number of matched pairs
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Total number of invoice records the run consumed
    pub fn invoice_count(&self) -> usize {
        self.matched.len() + self.unmatched_invoices.len()
    }

    /// Total number of bank records the run consumed
    pub fn bank_count(&self) -> usize {
        self.matched.len() + self.unmatched_bank.len()
    }

    /// Check the partition invariants against the original input sizes
    pub fn verify_partition(&self, invoice_count: usize, bank_count: usize) -> PartitionReport {
        let mut issues = Vec::new();

        if self.invoice_count() != invoice_count {
            issues.push(format!(
                "invoice partition is incomplete: {} matched + {} unmatched != {} input records",
                self.matched.len(),
                self.unmatched_invoices.len(),
                invoice_count
            ));
        }

        if self.bank_count() != bank_count {
            issues.push(format!(
                "bank partition is incomplete: {} matched + {} unmatched != {} input records",
                self.matched.len(),
                self.unmatched_bank.len(),
                bank_count
            ));
        }

        if self.matched.len() > invoice_count.min(bank_count) {
            issues.push(format!(
                "matched set size {} exceeds min(|invoices|, |bank|) = {}",
                self.matched.len(),
                invoice_count.min(bank_count)
            ));
        }

        let mut seen_invoices = HashSet::new();
        let mut seen_bank = HashSet::new();
        for pair in &self.matched {
            if !seen_invoices.insert(pair.invoice_source_id) {
                issues.push(format!(
                    "invoice record {} appears in more than one match",
                    pair.invoice_source_id
                ));
            }
            if !seen_bank.insert(pair.bank_source_id) {
                issues.push(format!(
                    "bank record {} appears in more than one match",
                    pair.bank_source_id
                ));
            }
        }

        PartitionReport {
            is_valid: issues.is_empty(),
            issues,
            matched_count: self.matched.len(),
            unmatched_invoice_count: self.unmatched_invoices.len(),
            unmatched_bank_count: self.unmatched_bank.len(),
        }
    }
}

/// Result of checking a report against the partition invariants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub matched_count: usize,
    pub unmatched_invoice_count: usize,
    pub unmatched_bank_count: usize,
}

/// Errors that can occur in the reconciliation system
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// A raw row lacks a usable date or amount; surfaced before any matching
    /// proceeds, with no partial results
    #[error("malformed {side} record at row {row}: {reason}")]
    MalformedInput {
        side: LedgerSide,
        row: usize,
        reason: String,
    },
    /// Negative tolerance window, rejected before processing
    #[error("tolerance window must be non-negative, got {0} days")]
    InvalidTolerance(i64),
    /// The ingestion collaborator failed to supply rows
    #[error("source error: {0}")]
    Source(String),
    /// The export collaborator failed to accept the report
    #[error("sink error: {0}")]
    Sink(String),
}

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;
