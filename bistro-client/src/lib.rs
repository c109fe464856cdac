//! Bistro Client - admin back-office client and gallery view
//!
//! Talks to the restaurant backend's admin API (login, reservations,
//! catering requests, dashboard stats) and drives the public gallery view.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod render;
pub mod session;
pub mod token;
pub mod view;

pub use auth::AuthGate;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{AdminCollection, AdminData, AdminSession, RefreshReport};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use view::{AdminTab, AdminView, GalleryView, Lightbox, ShareCapability, ShareOutcome};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models::{
    CateringRequest, CateringStatus, DashboardStats, Reservation, ReservationStatus, StatusAction,
};
