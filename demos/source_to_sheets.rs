//! Full pipeline example: raw rows -> reconciler -> export sheets

use chrono::NaiveDate;
use reconciliation_core::utils::{MemorySink, MemorySource};
use reconciliation_core::{sheets, RawRow, Reconciler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Reconciliation Core - Source to Sheets Example\n");

    let mut source = MemorySource::default();
    source.push_invoice(row(1, 10, "2750.00", "Invoice #2001")?);
    source.push_invoice(row(1, 14, "460.00", "Invoice #2002")?);
    source.push_invoice(row(1, 14, "460.00", "Invoice #2003")?);
    source.push_bank(row(1, 9, "2750.00", "INCOMING 2001")?);
    source.push_bank(row(1, 15, "460.00", "INCOMING 2002")?);
    source.push_bank(row(1, 31, "12.50", "CARD FEE")?);

    // Two-day window so the 2750.00 transfer booked one day early still counts.
    let reconciler = Reconciler::with_tolerance(source, 2);
    let mut sink = MemorySink::new();

    let run = reconciler.run_into(&mut sink).await?;
    println!("Run {} finished, {} pair(s) matched.\n", run.id, run.report.matched_count());

    for sheet in sheets(&run.report) {
        println!("=== {} ===", sheet.name);
        println!("{}", sheet.headers.join(" | "));
        for row in &sheet.rows {
            println!("{}", row.join(" | "));
        }
        println!();
    }

    Ok(())
}

fn row(
    month: u32,
    day: u32,
    amount: &str,
    description: &str,
) -> Result<RawRow, Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2024, month, day)
        .ok_or("invalid date")?
        .and_hms_opt(10, 0, 0)
        .ok_or("invalid time")?;
    Ok(RawRow::new(date, amount, description))
}
