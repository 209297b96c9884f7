//! HTTP server module.
//!
//! An axum router over the mark store and the calculation services. Handlers
//! receive the store through [`AppState`]; there is no global state.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers, pages)           │
//! │  - JSON parsing and error mapping            │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  Service Layer (services/)                   │
//! │  - pair lookup, course building              │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  Mark Store (store/)                         │
//! │  - GpxFileStore / InMemoryMarkStore          │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
