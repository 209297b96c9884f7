//! # markcalc
//!
//! Bearing, distance and course-leg calculator for sailing race marks.
//!
//! Race officers pick marks (buoys) from a GPX waypoint file and get the
//! compass bearing and great-circle distance between them, or the full
//! leg table of a course with start and finish tagged.
//!
//! ## Architecture
//!
//! - [`geodesy`]: initial bearing and haversine distance
//! - [`models`]: marks, rounding sides, course references and legs
//! - [`store`]: where marks come from (GPX file or in-memory)
//! - [`services`]: pair lookup and course building over a mark list
//! - [`config`]: TOML + environment configuration for the server
//! - [`http`]: axum router, handlers and pages

pub mod config;
pub mod geodesy;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
