//! Data models
//!
//! Wire types of the admin API plus the gallery catalog types.
//! All record IDs are `i64`.

pub mod catering;
pub mod gallery;
pub mod reservation;
pub mod stats;
pub mod status;

// Re-exports
pub use catering::*;
pub use gallery::*;
pub use reservation::*;
pub use stats::*;
pub use status::*;
