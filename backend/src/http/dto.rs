//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies keep their fields optional so that a missing field is
//! reported as a 400 with an `error` body rather than a bare
//! deserialization rejection.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{CourseMarkRef, Leg, Mark, MarkTag};

/// Query parameters for `GET /marks`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarksQuery {
    /// Comma separated zone characters, e.g. `1,2`
    #[serde(default)]
    pub zones: Option<String>,
}

/// Response for `GET /marks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksResponse {
    /// Marks in the selected zones (all marks when no zone is named)
    pub marks: Vec<Mark>,
    /// Every zone present in the waypoint file
    pub zones: BTreeSet<char>,
}

/// Request body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalculateRequest {
    #[serde(default)]
    pub mark1: Option<String>,
    #[serde(default)]
    pub mark2: Option<String>,
}

/// Response for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub bearing: f64,
    pub distance: f64,
    pub mark1: Mark,
    pub mark2: Mark,
}

/// Request body for `POST /lookup/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LookupRequest {
    #[serde(default)]
    pub from_mark: Option<String>,
    #[serde(default)]
    pub to_mark: Option<String>,
}

/// Response for `POST /lookup/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub bearing: f64,
    pub distance: f64,
}

/// Request body for `POST /course`.
///
/// `course` carries per-mark rounding. The older `marks` form is a plain
/// list of names, all left to starboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CourseRequest {
    #[serde(default)]
    pub course: Option<Vec<CourseMarkRef>>,
    #[serde(default)]
    pub marks: Option<Vec<String>>,
}

impl CourseRequest {
    /// The requested course, or `None` if neither form was supplied.
    ///
    /// Mark names are trimmed, as for the other endpoints.
    pub fn into_refs(self) -> Option<Vec<CourseMarkRef>> {
        let refs = match (self.course, self.marks) {
            (Some(course), _) => course,
            (None, Some(names)) => names.into_iter().map(CourseMarkRef::starboard).collect(),
            (None, None) => return None,
        };
        Some(
            refs.into_iter()
                .map(|r| CourseMarkRef::new(trim_id(&r.mark_id), r.rounding))
                .collect(),
        )
    }
}

/// Response for `POST /course`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub legs: Vec<Leg>,
    /// Sum of leg distances in nautical miles
    pub total_distance: f64,
    /// Display tag per mark, with Start/Finish merged on a closed loop
    pub mark_tags: BTreeMap<String, MarkTag>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Mark source description
    pub source: String,
    /// Number of marks loaded, or the load error
    pub marks: String,
}

/// Extract a required, non-blank field from an optional request value.
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.map(|v| trim_id(&v)).filter(|v| !v.is_empty())
}

/// Mark ids in requests are matched after trimming surrounding whitespace.
fn trim_id(id: &str) -> String {
    id.trim().to_string()
}
