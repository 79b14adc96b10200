//! # Reconciliation Core
//!
//! A library for reconciling two independently recorded transaction ledgers:
//! an invoice set and a bank statement set. The engine identifies which
//! entries represent the same real-world payment and partitions everything
//! else into unmatched collections.
//!
//! ## Features
//!
//! - **Greedy matching engine**: deterministic first-match scan over a
//!   shrinking pool of available bank records, with a configurable date
//!   tolerance window and exact decimal amount equality
//! - **Partition guarantees**: every input record lands in exactly one of
//!   matched, unmatched-invoice, or unmatched-bank, and no bank record is
//!   ever consumed twice
//! - **Ingestion boundary**: fail-fast normalization of raw rows (timestamp
//!   truncation, decimal parsing, localized header aliases)
//! - **Export boundary**: structured sheets ready for tabular display or
//!   multi-sheet workbook serialization
//! - **Collaborator abstraction**: trait-based sources and sinks so the core
//!   stays free of file and network concerns
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{reconcile, TransactionRecord};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//! use std::str::FromStr;
//!
//! let invoices = vec![TransactionRecord::new(
//!     0,
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     BigDecimal::from_str("100.00").unwrap(),
//!     "Invoice A".to_string(),
//! )];
//! let bank = vec![TransactionRecord::new(
//!     0,
//!     NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
//!     BigDecimal::from_str("100.00").unwrap(),
//!     "Incoming transfer".to_string(),
//! )];
//!
//! let report = reconcile(&invoices, &bank, 1).unwrap();
//! assert_eq!(report.matched_count(), 1);
//! ```

pub mod export;
pub mod ingest;
pub mod matcher;
pub mod service;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use export::*;
pub use ingest::*;
pub use matcher::*;
pub use service::*;
pub use traits::*;
pub use types::*;
