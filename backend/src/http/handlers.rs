//! HTTP handlers for the REST API and pages.
//!
//! Every handler loads the mark list from the injected store, then delegates
//! to the service layer. Nothing is cached between requests here; caching,
//! if any, is the store's concern.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use tracing::debug;

use super::dto::{
    required, CalculateRequest, CalculateResponse, CourseRequest, CourseResponse, HealthResponse,
    LookupRequest, LookupResponse, MarksQuery, MarksResponse,
};
use super::error::AppError;
use super::pages;
use super::state::AppState;
use crate::services;
use crate::store::{self, parse_zone_list};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the waypoint file currently loads. A load failure keeps
/// the endpoint up but turns the status to `degraded`.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let (status, marks) = match state.store.load().await {
        Ok(marks) => ("ok", marks.len().to_string()),
        Err(e) => ("degraded", format!("error: {}", e)),
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.store.describe(),
        marks,
    }))
}

// =============================================================================
// Marks
// =============================================================================

/// GET /marks?zones=1,2
///
/// Marks in the named zones plus the full zone list. Without a `zones`
/// value (absent or blank) every mark is returned.
pub async fn list_marks(
    State(state): State<AppState>,
    Query(query): Query<MarksQuery>,
) -> HandlerResult<MarksResponse> {
    let all = state.store.load().await?;
    let zones = store::zones(&all);

    let marks = match query.zones.as_deref().and_then(parse_zone_list) {
        Some(selected) => store::filter_by_zone(&all, &selected),
        None => all,
    };

    Ok(Json(MarksResponse { marks, zones }))
}

// =============================================================================
// Calculations
// =============================================================================

/// POST /calculate
///
/// Bearing and distance between `mark1` and `mark2`, echoing both marks.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> HandlerResult<CalculateResponse> {
    let Json(request) = payload?;
    let (Some(mark1), Some(mark2)) = (required(request.mark1), required(request.mark2)) else {
        return Err(AppError::BadRequest("Both mark1 and mark2 are required".to_string()));
    };

    let marks = state.store.load().await?;
    let calc = services::calculate_pair(&marks, &mark1, &mark2)?;
    debug!(from = %mark1, to = %mark2, bearing = calc.bearing, distance = calc.distance, "Calculated pair");

    Ok(Json(CalculateResponse {
        bearing: calc.bearing,
        distance: calc.distance,
        mark1: calc.from,
        mark2: calc.to,
    }))
}

/// POST /lookup/calculate
///
/// Bearing and distance from `from_mark` to `to_mark`.
pub async fn lookup_calculate(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> HandlerResult<LookupResponse> {
    let Json(request) = payload?;
    let (Some(from), Some(to)) = (required(request.from_mark), required(request.to_mark)) else {
        return Err(AppError::BadRequest("Both from_mark and to_mark are required".to_string()));
    };

    let marks = state.store.load().await?;
    let calc = services::calculate_pair(&marks, &from, &to)?;

    Ok(Json(LookupResponse {
        bearing: calc.bearing,
        distance: calc.distance,
    }))
}

/// POST /course
///
/// Legs of a course given as `{course: [{name, rounding}, ...]}`.
pub async fn build_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> HandlerResult<CourseResponse> {
    let Json(request) = payload?;
    let course = request
        .into_refs()
        .ok_or_else(|| AppError::BadRequest("A course of at least two marks is required".to_string()))?;

    let marks = state.store.load().await?;
    let legs = services::build_course(&marks, &course)?;

    Ok(Json(CourseResponse {
        total_distance: services::total_distance(&legs),
        mark_tags: services::combined_tags(&legs),
        legs,
    }))
}

// =============================================================================
// Pages
// =============================================================================

/// GET /
///
/// The lookup calculator is the home page.
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/lookup")])
}

/// GET /lookup
pub async fn lookup_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let marks = state.store.load().await?;
    Ok(Html(pages::render_lookup(&marks)))
}

/// GET /course-builder
pub async fn course_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let marks = state.store.load().await?;
    Ok(Html(pages::render_course_builder(&marks)))
}
