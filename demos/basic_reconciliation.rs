//! Basic reconciliation example using the pure matcher

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use reconciliation_core::{reconcile, TransactionRecord};
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Reconciliation Core - Basic Example\n");

    let invoices = vec![
        record(0, 10, "1500.00", "Invoice #1001 - Acme Corp")?,
        record(1, 12, "320.50", "Invoice #1002 - Widget Ltd")?,
        record(2, 15, "89.99", "Invoice #1003 - Gizmo GmbH")?,
    ];

    let bank_lines = vec![
        record(0, 11, "1500.00", "TRF IN ACME")?,
        record(1, 12, "320.50", "TRF IN WIDGET")?,
        record(2, 28, "45.00", "MONTHLY FEE")?,
    ];

    let report = reconcile(&invoices, &bank_lines, 1)?;

    println!("✅ Matched ({}):", report.matched_count());
    for pair in &report.matched {
        println!(
            "  {} <-> {}  {}  \"{}\" / \"{}\"",
            pair.invoice_date,
            pair.bank_date,
            pair.amount,
            pair.invoice_description,
            pair.bank_description
        );
    }

    println!("\n❌ Unmatched invoices ({}):", report.unmatched_invoices.len());
    for record in &report.unmatched_invoices {
        println!("  {}  {}  \"{}\"", record.date, record.amount, record.description);
    }

    println!("\n❌ Unmatched bank lines ({}):", report.unmatched_bank.len());
    for record in &report.unmatched_bank {
        println!("  {}  {}  \"{}\"", record.date, record.amount, record.description);
    }

    let check = report.verify_partition(invoices.len(), bank_lines.len());
    println!(
        "\n🔎 Partition check: {}",
        if check.is_valid { "ok" } else { "FAILED" }
    );

    Ok(())
}

fn record(
    source_id: usize,
    day: u32,
    amount: &str,
    description: &str,
) -> Result<TransactionRecord, Box<dyn std::error::Error>> {
    Ok(TransactionRecord::new(
        source_id,
        NaiveDate::from_ymd_opt(2024, 1, day).ok_or("invalid date")?,
        BigDecimal::from_str(amount)?,
        description.to_string(),
    ))
}
