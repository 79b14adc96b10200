//! Traits for the ingestion and export collaborator seams
//!
//! The core never touches files or the network itself. Sources and sinks
//! wrap whatever the surrounding application uses (uploaded spreadsheets,
//! databases, HTTP handlers) behind these two traits.

use async_trait::async_trait;

use crate::ingest::RawRow;
use crate::service::ReconciliationRun;
use crate::types::ReconcileResult;

/// Supplies the two raw ledgers for one reconciliation run
///
/// Implementations must preserve the original row order on both sides; the
/// matcher's greedy tie-breaking depends on it.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the invoice rows in their original order
    async fn invoice_rows(&self) -> ReconcileResult<Vec<RawRow>>;

    /// Fetch the bank statement rows in their original order
    async fn bank_rows(&self) -> ReconcileResult<Vec<RawRow>>;
}

/// Receives a finished reconciliation run for presentation or export
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver a completed run to the collaborator
    async fn deliver(&mut self, run: &ReconciliationRun) -> ReconcileResult<()>;
}
