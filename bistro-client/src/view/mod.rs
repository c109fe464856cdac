//! View state for the admin dashboard and the public gallery

pub mod admin;
pub mod gallery;

pub use admin::{AdminTab, AdminView, Overview, Row};
pub use gallery::{
    GalleryView, Lightbox, ShareCapability, ShareOutcome, SharePayload, SharePlatform,
};
