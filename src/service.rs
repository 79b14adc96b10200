//! Reconciliation service orchestrating sources, the matcher, and sinks
//!
//! Each run is stateless: the service pulls fresh copies of both ledgers,
//! normalizes them, runs the matcher, and hands the result on. Concurrent
//! runs need no coordination since nothing is shared between invocations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ingest::normalize;
use crate::matcher::{reconcile, DEFAULT_TOLERANCE_DAYS};
use crate::traits::{RecordSource, ReportSink};
use crate::types::{LedgerSide, ReconcileResult, ReconciliationReport};

/// One completed reconciliation, tagged with a correlation id
///
/// The report itself is fully determined by the inputs; only the id is
/// freshly generated per run, so that sinks and logs can refer to a
/// particular delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationRun {
    /// Correlation id for this run
    pub id: Uuid,
    /// The three output collections
    pub report: ReconciliationReport,
}

/// Stateless reconciliation front door over a [`RecordSource`]
pub struct Reconciler<S: RecordSource> {
    source: S,
    tolerance_days: i64,
}

impl<S: RecordSource> Reconciler<S> {
    /// Create a reconciler with the default one-day tolerance window
    pub fn new(source: S) -> Self {
        Self {
            source,
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
        }
    }

    /// Create a reconciler with a custom tolerance window.
    ///
    /// Negative tolerances are rejected at run time, before any rows are
    /// pulled from the source.
    pub fn with_tolerance(source: S, tolerance_days: i64) -> Self {
        Self {
            source,
            tolerance_days,
        }
    }

    /// The tolerance window this reconciler runs with
    pub fn tolerance_days(&self) -> i64 {
        self.tolerance_days
    }

    /// Pull both ledgers, normalize them, and reconcile.
    ///
    /// Fails fast on the first malformed row of either side; no partial
    /// report is ever produced.
    pub async fn run(&self) -> ReconcileResult<ReconciliationRun> {
        crate::utils::validation::validate_tolerance(self.tolerance_days)?;

        let invoice_rows = self.source.invoice_rows().await?;
        let bank_rows = self.source.bank_rows().await?;

        let invoices = normalize(LedgerSide::Invoice, &invoice_rows)?;
        let bank_lines = normalize(LedgerSide::Bank, &bank_rows)?;

        let report = reconcile(&invoices, &bank_lines, self.tolerance_days)?;

        Ok(ReconciliationRun {
            id: Uuid::new_v4(),
            report,
        })
    }

    /// Run a reconciliation and deliver the result to a sink
    pub async fn run_into<K: ReportSink>(&self, sink: &mut K) -> ReconcileResult<ReconciliationRun> {
        let run = self.run().await?;
        sink.deliver(&run).await?;
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::RawRow;
    use crate::types::ReconcileError;
    use crate::utils::memory_source::{MemorySink, MemorySource};
    use chrono::NaiveDate;

    fn row(day: u32, amount: &str, description: &str) -> RawRow {
        RawRow::new(
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            amount,
            description,
        )
    }

    #[tokio::test]
    async fn runs_end_to_end_over_a_memory_source() {
        let source = MemorySource::new(
            vec![row(10, "100.00", "Invoice A"), row(15, "75.00", "Invoice B")],
            vec![row(11, "100.00", "Transfer")],
        );
        let reconciler = Reconciler::new(source);

        let run = reconciler.run().await.unwrap();

        assert_eq!(run.report.tolerance_days, 1);
        assert_eq!(run.report.matched_count(), 1);
        assert_eq!(run.report.unmatched_invoices.len(), 1);
        assert!(run.report.unmatched_bank.is_empty());
    }

    #[tokio::test]
    async fn custom_tolerance_reaches_the_matcher() {
        let source = MemorySource::new(
            vec![row(10, "100.00", "")],
            vec![row(14, "100.00", "")],
        );

        let strict = Reconciler::new(MemorySource::new(
            vec![row(10, "100.00", "")],
            vec![row(14, "100.00", "")],
        ));
        assert_eq!(strict.run().await.unwrap().report.matched_count(), 0);

        let lenient = Reconciler::with_tolerance(source, 4);
        assert_eq!(lenient.run().await.unwrap().report.matched_count(), 1);
    }

    #[tokio::test]
    async fn negative_tolerance_fails_before_touching_the_source() {
        let source = MemorySource::new(vec![], vec![]);
        let reconciler = Reconciler::with_tolerance(source, -2);

        let err = reconciler.run().await.unwrap_err();
        assert!(matches!(err, ReconcileError::InvalidTolerance(-2)));
    }

    #[tokio::test]
    async fn malformed_row_aborts_the_run() {
        let bad_row = RawRow {
            date: None,
            amount: Some("10.00".to_string()),
            description: None,
        };
        let source = MemorySource::new(vec![bad_row], vec![row(10, "10.00", "")]);
        let reconciler = Reconciler::new(source);

        let err = reconciler.run().await.unwrap_err();
        assert!(matches!(err, ReconcileError::MalformedInput { .. }));
    }

    #[tokio::test]
    async fn run_into_delivers_to_the_sink() {
        let source = MemorySource::new(vec![row(10, "50.00", "")], vec![row(10, "50.00", "")]);
        let reconciler = Reconciler::new(source);
        let mut sink = MemorySink::new();

        let run = reconciler.run_into(&mut sink).await.unwrap();

        assert_eq!(sink.delivered().len(), 1);
        assert_eq!(sink.delivered()[0], run);
    }
}
