//! Service layer: bearing/distance calculations over a loaded mark list.
//!
//! Services are pure functions over `&[Mark]`; the HTTP handlers load the
//! marks from the store and pass them in.

pub mod course;
pub mod error;
pub mod lookup;

pub use course::{build_course, combined_tags, total_distance};
pub use error::{CalculationError, CalculationResult};
pub use lookup::{calculate_pair, PairCalculation};
