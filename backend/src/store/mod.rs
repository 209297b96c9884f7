//! Mark store: where the list of marks comes from.
//!
//! The HTTP layer only sees the [`MarkStore`] trait. Implementations:
//! - [`GpxFileStore`]: reads a GPX waypoint file, either on every request or
//!   when the file's modification time changes
//! - [`InMemoryMarkStore`]: fixed list for tests and embedding

pub mod error;
pub mod gpx_file;
pub mod memory;
pub mod query;

use async_trait::async_trait;

pub use error::{StoreError, StoreResult};
pub use gpx_file::{GpxFileStore, ReloadPolicy};
pub use memory::InMemoryMarkStore;
pub use query::{filter_by_zone, find_by_name, parse_zone_list, zones};

use crate::models::Mark;

/// Source of the ordered mark list.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one instance can back every
/// request handler.
#[async_trait]
pub trait MarkStore: Send + Sync {
    /// Load every mark, in file order.
    ///
    /// Either the whole list is returned or an error; a malformed source
    /// never yields a partial list.
    async fn load(&self) -> StoreResult<Vec<Mark>>;

    /// Short human-readable description of the source, used in logs.
    fn describe(&self) -> String;
}
