//! In-memory source and sink implementations for testing and examples

use async_trait::async_trait;

use crate::ingest::RawRow;
use crate::service::ReconciliationRun;
use crate::traits::{RecordSource, ReportSink};
use crate::types::ReconcileResult;

/// [`RecordSource`] backed by two in-memory row collections
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    invoices: Vec<RawRow>,
    bank: Vec<RawRow>,
}

impl MemorySource {
    /// Create a source over the given invoice and bank rows
    pub fn new(invoices: Vec<RawRow>, bank: Vec<RawRow>) -> Self {
        Self { invoices, bank }
    }

    /// Append an invoice row
    pub fn push_invoice(&mut self, row: RawRow) {
        self.invoices.push(row);
    }

    /// Append a bank statement row
    pub fn push_bank(&mut self, row: RawRow) {
        self.bank.push(row);
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn invoice_rows(&self) -> ReconcileResult<Vec<RawRow>> {
        Ok(self.invoices.clone())
    }

    async fn bank_rows(&self) -> ReconcileResult<Vec<RawRow>> {
        Ok(self.bank.clone())
    }
}

/// [`ReportSink`] that records every delivered run
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<ReconciliationRun>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All runs delivered so far, in delivery order
    pub fn delivered(&self) -> &[ReconciliationRun] {
        &self.delivered
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn deliver(&mut self, run: &ReconciliationRun) -> ReconcileResult<()> {
        self.delivered.push(run.clone());
        Ok(())
    }
}
