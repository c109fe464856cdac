//! Shared types for the Bistro admin and gallery clients
//!
//! Wire models returned by the admin API, the status lifecycle tables,
//! the list filtering engine and the static gallery catalog.

pub mod catalog;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use filter::{DateRange, FilterState, Listing, StatusFilter, select_visible};
pub use serde::{Deserialize, Serialize};
