//! Integration tests for reconciliation-core

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use reconciliation_core::{
    reconcile, sheets,
    utils::{MemorySink, MemorySource},
    LedgerSide, RawRow, ReconcileError, Reconciler, TransactionRecord,
};
use std::str::FromStr;

fn timestamp(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(14, 45, 0)
        .unwrap()
}

fn row(month: u32, day: u32, amount: &str, description: &str) -> RawRow {
    RawRow::new(timestamp(month, day), amount, description)
}

fn record(source_id: usize, day: u32, amount: &str, description: &str) -> TransactionRecord {
    TransactionRecord::new(
        source_id,
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        BigDecimal::from_str(amount).unwrap(),
        description.to_string(),
    )
}

#[tokio::test]
async fn test_complete_reconciliation_workflow() {
    let source = MemorySource::new(
        vec![
            row(1, 10, "1500.00", "Invoice #1001"),
            row(1, 12, "320.50", "Invoice #1002"),
            row(1, 15, "89.99", "Invoice #1003"),
            row(1, 20, "1500.00", "Invoice #1004"),
        ],
        vec![
            row(1, 11, "1500.00", "TRF IN 1001"),
            row(1, 12, "320.50", "TRF IN 1002"),
            row(1, 28, "45.00", "BANK FEE"),
        ],
    );
    let reconciler = Reconciler::new(source);
    let mut sink = MemorySink::new();

    let run = reconciler.run_into(&mut sink).await.unwrap();

    // Invoices #1001 and #1002 find bank counterparts within one day;
    // #1003 has none and #1004's candidate amount was already consumed.
    assert_eq!(run.report.matched_count(), 2);
    assert_eq!(run.report.unmatched_invoices.len(), 2);
    assert_eq!(run.report.unmatched_bank.len(), 1);
    assert_eq!(run.report.unmatched_bank[0].description, "BANK FEE");

    let check = run.report.verify_partition(4, 3);
    assert!(check.is_valid, "unexpected issues: {:?}", check.issues);

    // The sink received exactly what the run returned.
    assert_eq!(sink.delivered(), &[run.clone()]);

    // The export boundary renders the three fixed sheets in report order.
    let tables = sheets(&run.report);
    assert_eq!(tables[0].name, "matched");
    assert_eq!(tables[0].rows.len(), 2);
    assert_eq!(tables[1].name, "unmatched invoices");
    assert_eq!(tables[1].rows[0][2], "Invoice #1003");
    assert_eq!(tables[2].name, "unmatched bank lines");
    assert_eq!(tables[2].rows[0][2], "BANK FEE");
}

#[tokio::test]
async fn test_malformed_input_yields_no_partial_results() {
    let source = MemorySource::new(
        vec![row(1, 10, "100.00", "fine")],
        vec![
            row(1, 10, "100.00", "fine"),
            row(1, 11, "not a number", "broken"),
        ],
    );
    let reconciler = Reconciler::new(source);
    let mut sink = MemorySink::new();

    let err = reconciler.run_into(&mut sink).await.unwrap_err();

    assert!(matches!(
        err,
        ReconcileError::MalformedInput {
            side: LedgerSide::Bank,
            row: 1,
            ..
        }
    ));
    assert!(sink.delivered().is_empty());
}

#[test]
fn test_matched_outputs_reproduce_the_full_inputs() {
    let invoices: Vec<_> = (0..20)
        .map(|i| record(i, 1 + (i as u32 % 28), "25.00", &format!("inv {i}")))
        .collect();
    let bank: Vec<_> = (0..15)
        .map(|i| record(i, 1 + (i as u32 * 2 % 28), "25.00", &format!("bank {i}")))
        .collect();

    let report = reconcile(&invoices, &bank, 1).unwrap();

    // Matched + unmatched reproduces each input exactly once.
    let mut invoice_ids: Vec<_> = report
        .matched
        .iter()
        .map(|m| m.invoice_source_id)
        .chain(report.unmatched_invoices.iter().map(|r| r.source_id))
        .collect();
    invoice_ids.sort_unstable();
    assert_eq!(invoice_ids, (0..20).collect::<Vec<_>>());

    let mut bank_ids: Vec<_> = report
        .matched
        .iter()
        .map(|m| m.bank_source_id)
        .chain(report.unmatched_bank.iter().map(|r| r.source_id))
        .collect();
    bank_ids.sort_unstable();
    assert_eq!(bank_ids, (0..15).collect::<Vec<_>>());

    assert!(report.matched_count() <= 15);
}

#[test]
fn test_report_round_trips_through_serde() {
    let invoices = vec![record(0, 10, "100.00", "Invoice A")];
    let bank = vec![record(0, 11, "100.00", "Transfer")];
    let report = reconcile(&invoices, &bank, 1).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let decoded: reconciliation_core::ReconciliationReport =
        serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, report);
    assert_eq!(decoded.matched[0].bank_description, "Transfer");
}

#[test]
fn test_sheets_serialize_for_workbook_export() {
    let invoices = vec![record(0, 10, "100.00", "Invoice A")];
    let report = reconcile(&invoices, &[], 1).unwrap();

    let json = serde_json::to_value(sheets(&report)).unwrap();

    assert_eq!(json[1]["name"], "unmatched invoices");
    assert_eq!(json[1]["rows"][0][0], "2024-01-10");
    assert_eq!(json[1]["rows"][0][1], "100.00");
}

#[tokio::test]
async fn test_concurrent_runs_are_independent() {
    let reconciler_a = Reconciler::new(MemorySource::new(
        vec![row(1, 10, "100.00", "a")],
        vec![row(1, 10, "100.00", "a")],
    ));
    let reconciler_b = Reconciler::new(MemorySource::new(
        vec![row(1, 10, "999.00", "b")],
        vec![],
    ));

    let (run_a, run_b) = tokio::join!(reconciler_a.run(), reconciler_b.run());
    let (run_a, run_b) = (run_a.unwrap(), run_b.unwrap());

    assert_eq!(run_a.report.matched_count(), 1);
    assert_eq!(run_b.report.matched_count(), 0);
    assert_eq!(run_b.report.unmatched_invoices.len(), 1);
    assert_ne!(run_a.id, run_b.id);
}
