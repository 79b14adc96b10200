//! Greedy reconciliation matcher for invoice and bank statement ledgers
//!
//! For every invoice record, the matcher scans a shrinking pool of available
//! bank records and consumes the first one with an equal amount inside the
//! date tolerance window. Each bank record is consumed at most once, and
//! every input record lands in exactly one of the three output collections.

use chrono::Duration;

use crate::types::{MatchRecord, ReconciliationReport, ReconcileResult, TransactionRecord};
use crate::utils::validation::validate_tolerance;

/// Default tolerance window: a bank entry dated one day before or after the
/// invoice date still matches
pub const DEFAULT_TOLERANCE_DAYS: i64 = 1;

/// Reconcile two transaction ledgers into matched and unmatched collections.
///
/// The algorithm is a greedy single pass, order-dependent by design:
///
/// 1. All bank lines start in an available pool, in input order.
/// 2. Invoices are visited in their given input order, never sorted.
/// 3. Each invoice consumes the first pool entry whose amount is exactly
///    equal and whose date lies within `invoice.date ± tolerance_days`
///    inclusive; the consumed entry leaves the pool for good.
/// 4. Invoices with no candidate fall through to `unmatched_invoices`;
///    whatever survives in the pool becomes `unmatched_bank`.
///
/// When several pool entries qualify, the earliest one in the pool's current
/// order wins. This is deterministic but makes no attempt at a globally
/// optimal assignment (such as minimizing total date drift), and callers
/// relying on the output must not expect one.
///
/// Cost is O(|invoices| × |pool|), which is fine for the human-reviewed
/// ledger sizes this engine targets.
pub fn reconcile(
    invoices: &[TransactionRecord],
    bank_lines: &[TransactionRecord],
    tolerance_days: i64,
) -> ReconcileResult<ReconciliationReport> {
    validate_tolerance(tolerance_days)?;
    let window = Duration::days(tolerance_days);

    let mut available: Vec<TransactionRecord> = bank_lines.to_vec();
    let mut matched = Vec::new();
    let mut unmatched_invoices = Vec::new();

    for invoice in invoices {
        let earliest = invoice.date - window;
        let latest = invoice.date + window;

        let candidate = available.iter().position(|bank| {
            bank.amount == invoice.amount && bank.date >= earliest && bank.date <= latest
        });

        match candidate {
            Some(index) => {
                // Removal preserves the relative order of the remaining pool.
                let bank = available.remove(index);
                matched.push(MatchRecord::from_pair(invoice, bank));
            }
            None => unmatched_invoices.push(invoice.clone()),
        }
    }

    Ok(ReconciliationReport {
        tolerance_days,
        matched,
        unmatched_invoices,
        unmatched_bank: available,
    })
}
