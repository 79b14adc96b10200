//! Validation utilities shared by the ingestion boundary and the matcher

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::types::{LedgerSide, ReconcileError, ReconcileResult};

/// Validate that a tolerance window is non-negative
pub fn validate_tolerance(tolerance_days: i64) -> ReconcileResult<()> {
    if tolerance_days < 0 {
        Err(ReconcileError::InvalidTolerance(tolerance_days))
    } else {
        Ok(())
    }
}

/// Parse an amount field as an exact decimal.
///
/// The row and side only feed the error message; the caller has already
/// trimmed the text and ruled out empty input.
pub fn parse_amount(side: LedgerSide, row: usize, text: &str) -> ReconcileResult<BigDecimal> {
    BigDecimal::from_str(text).map_err(|_| ReconcileError::MalformedInput {
        side,
        row,
        reason: format!("amount '{text}' is not numeric"),
    })
}
