//! Bearing and distance between two named marks.

use serde::Serialize;

use super::error::{CalculationError, CalculationResult};
use crate::geodesy;
use crate::models::Mark;
use crate::store::find_by_name;

/// Result of a single mark-to-mark calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCalculation {
    pub from: Mark,
    pub to: Mark,
    pub bearing: f64,
    pub distance: f64,
}

/// Resolve `from` and `to` in `marks` and compute bearing and distance.
///
/// The first unresolved id (checking `from` first) is reported.
pub fn calculate_pair(marks: &[Mark], from: &str, to: &str) -> CalculationResult<PairCalculation> {
    let from_mark = find_by_name(marks, from)
        .ok_or_else(|| CalculationError::MarkNotFound(from.to_string()))?;
    let to_mark = find_by_name(marks, to)
        .ok_or_else(|| CalculationError::MarkNotFound(to.to_string()))?;

    Ok(PairCalculation {
        bearing: geodesy::bearing(from_mark.position(), to_mark.position()),
        distance: geodesy::distance(from_mark.position(), to_mark.position()),
        from: from_mark.clone(),
        to: to_mark.clone(),
    })
}
