//! In-process admin backend for integration tests
//!
//! Serves the admin API on an ephemeral port. Individual endpoints can be
//! switched to fail, and every PATCH is recorded.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{
    CateringRequest, CateringStatus, DashboardStats, Reservation, ReservationStatus,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "token-123";
/// Username the backend answers with an empty 200 body
pub const SILENT_USER: &str = "silent";

/// Endpoint that can be switched to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Reservations,
    Catering,
    Stats,
    Patch,
}

/// Recorded PATCH call
#[derive(Debug, Clone, PartialEq)]
pub struct PatchCall {
    pub collection: String,
    pub id: i64,
    pub body: Value,
}

#[derive(Default)]
pub struct Backend {
    pub reservations: Mutex<Vec<Reservation>>,
    pub catering: Mutex<Vec<CateringRequest>>,
    pub stats: Mutex<DashboardStats>,
    failing: Mutex<HashSet<Endpoint>>,
    patches: Mutex<Vec<PatchCall>>,
}

impl Backend {
    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().remove(&endpoint);
    }

    pub fn patches(&self) -> Vec<PatchCall> {
        self.patches.lock().unwrap().clone()
    }

    fn is_failing(&self, endpoint: Endpoint) -> bool {
        self.failing.lock().unwrap().contains(&endpoint)
    }
}

pub struct MockServer {
    pub base_url: String,
    pub backend: Arc<Backend>,
}

/// Start the backend with the default fixtures
pub async fn spawn() -> MockServer {
    let backend = Arc::new(Backend {
        reservations: Mutex::new(reservations()),
        catering: Mutex::new(catering()),
        stats: Mutex::new(DashboardStats {
            today_reservations: 2,
            pending_count: 3,
            monthly_revenue: 18250.5,
            total_customers: 412,
        }),
        ..Default::default()
    });

    let app = Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/verify", post(verify))
        .route("/api/admin/reservations", get(list_reservations))
        .route("/api/admin/reservations/{id}", patch(patch_record))
        .route("/api/admin/catering", get(list_catering))
        .route("/api/admin/catering/{id}", patch(patch_record))
        .route("/api/admin/stats", get(stats))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{}", addr),
        backend,
    }
}

/// Base URL nothing listens on
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn reservation(id: i64, name: &str, status: ReservationStatus) -> Reservation {
    Reservation {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        time: "20:00".to_string(),
        party_size: 2,
        status,
        special_requests: None,
        created_at: None,
    }
}

fn reservations() -> Vec<Reservation> {
    vec![
        reservation(1, "John Smith", ReservationStatus::Pending),
        reservation(2, "Maria Johnson", ReservationStatus::Pending),
        reservation(3, "Ana Lopez", ReservationStatus::Confirmed),
        reservation(4, "Tom Baker", ReservationStatus::Completed),
    ]
}

fn catering() -> Vec<CateringRequest> {
    vec![CateringRequest {
        id: 10,
        name: "Acme Corp".to_string(),
        email: "events@acme.example".to_string(),
        phone: "555-0199".to_string(),
        organization: Some("Acme".to_string()),
        event_type: "corporate".to_string(),
        event_date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
        event_time: "18:00".to_string(),
        guest_count: 60,
        status: CateringStatus::Pending,
        details: None,
    }]
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

fn authorize(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|h| h.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "Invalid token")),
    }
}

async fn login(Json(req): Json<LoginRequest>) -> (StatusCode, Json<Value>) {
    if req.username == SILENT_USER {
        return (StatusCode::OK, Json(json!({})));
    }
    if req.username == USERNAME && req.password == PASSWORD {
        (StatusCode::OK, Json(json!(LoginResponse::ok(TOKEN))))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!(LoginResponse::error("Invalid credentials"))),
        )
    }
}

async fn verify(headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    Ok(Json(json!({ "valid": true })))
}

async fn list_reservations(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    if backend.is_failing(Endpoint::Reservations) {
        return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"));
    }
    Ok(Json(json!(*backend.reservations.lock().unwrap())))
}

async fn list_catering(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    if backend.is_failing(Endpoint::Catering) {
        return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"));
    }
    Ok(Json(json!(*backend.catering.lock().unwrap())))
}

async fn stats(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    if backend.is_failing(Endpoint::Stats) {
        return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"));
    }
    Ok(Json(json!(*backend.stats.lock().unwrap())))
}

async fn patch_record(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    uri: axum::http::Uri,
    Json(body): Json<Value>,
) -> ApiResult {
    authorize(&headers)?;
    let collection = uri
        .path()
        .trim_start_matches("/api/admin/")
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();
    backend.patches.lock().unwrap().push(PatchCall {
        collection,
        id,
        body,
    });
    if backend.is_failing(Endpoint::Patch) {
        return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Update failed"));
    }
    Ok(Json(json!({ "success": true })))
}
