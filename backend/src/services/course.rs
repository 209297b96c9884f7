//! Course builder: turns an ordered list of mark references into legs.

use std::collections::BTreeMap;
use tracing::debug;

use super::error::{CalculationError, CalculationResult};
use crate::geodesy::{self, round_to_hundredths};
use crate::models::{CourseMarkRef, Leg, LegEndpoint, Mark, MarkTag};
use crate::store::find_by_name;

/// Build the legs of a course.
///
/// `course` must name at least two marks and every id must resolve in
/// `marks`; otherwise nothing is built. N marks give N-1 legs. The first
/// leg's origin is tagged Start and the last leg's destination Finish.
pub fn build_course(marks: &[Mark], course: &[CourseMarkRef]) -> CalculationResult<Vec<Leg>> {
    if course.len() < 2 {
        return Err(CalculationError::TooFewMarks(course.len()));
    }

    let resolved = course
        .iter()
        .map(|r| {
            find_by_name(marks, &r.mark_id)
                .map(|mark| (mark, r.rounding))
                .ok_or_else(|| CalculationError::MarkNotFound(r.mark_id.clone()))
        })
        .collect::<CalculationResult<Vec<_>>>()?;

    let last_leg = resolved.len() - 2;
    let legs: Vec<Leg> = resolved
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, from_rounding) = pair[0];
            let (to, to_rounding) = pair[1];
            let from_tag = (i == 0).then_some(MarkTag::Start);
            let to_tag = (i == last_leg).then_some(MarkTag::Finish);

            Leg {
                leg_number: i + 1,
                from: LegEndpoint::new(from, from_rounding, from_tag),
                to: LegEndpoint::new(to, to_rounding, to_tag),
                bearing: geodesy::bearing(from.position(), to.position()),
                distance: geodesy::distance(from.position(), to.position()),
            }
        })
        .collect();

    debug!(marks = course.len(), legs = legs.len(), "Built course");
    Ok(legs)
}

/// Tags per mark id, with Start and Finish on the same mark merged into
/// Start/Finish. Used when rendering a closed loop course.
pub fn combined_tags(legs: &[Leg]) -> BTreeMap<String, MarkTag> {
    let mut tags: BTreeMap<String, MarkTag> = BTreeMap::new();
    let endpoints = legs.iter().flat_map(|leg| [&leg.from, &leg.to]);

    for endpoint in endpoints {
        if let Some(tag) = endpoint.tag {
            tags.entry(endpoint.name.clone())
                .and_modify(|existing| *existing = existing.combine(tag))
                .or_insert(tag);
        }
    }
    tags
}

/// Sum of leg distances in nautical miles, rounded to 2 decimals.
pub fn total_distance(legs: &[Leg]) -> f64 {
    round_to_hundredths(legs.iter().map(|leg| leg.distance).sum())
}
