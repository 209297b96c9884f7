//! Domain types shared by the mark store, the course builder and the HTTP layer.

pub mod course;
pub mod mark;

pub use course::*;
pub use mark::*;
