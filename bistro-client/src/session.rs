//! Authenticated admin session
//!
//! Owns the dashboard data (reservations, catering requests, stats) and the
//! calls that refresh and mutate it. Failures are logged and leave the
//! affected slice as it was; nothing is changed optimistically.

use serde::de::DeserializeOwned;
use shared::Listing;
use shared::client::StatusUpdate;
use shared::models::{
    CateringRequest, CateringStatus, DashboardStats, Lifecycle, Reservation, ReservationStatus,
    StatusAction,
};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientError, ClientResult};

pub(crate) const RESERVATIONS_PATH: &str = "/api/admin/reservations";
pub(crate) const CATERING_PATH: &str = "/api/admin/catering";
pub(crate) const STATS_PATH: &str = "/api/admin/stats";

/// Dashboard data held by the admin view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminData {
    pub reservations: Vec<Reservation>,
    pub catering: Vec<CateringRequest>,
    /// `None` until the first successful stats fetch
    pub stats: Option<DashboardStats>,
}

/// Record collection served under `/api/admin/{PATH}`
pub trait AdminCollection: Listing + DeserializeOwned + Send + Sync + 'static {
    const PATH: &'static str;

    fn records(data: &AdminData) -> &[Self];
    fn records_mut(data: &mut AdminData) -> &mut Vec<Self>;
}

impl AdminCollection for Reservation {
    const PATH: &'static str = RESERVATIONS_PATH;

    fn records(data: &AdminData) -> &[Self] {
        &data.reservations
    }

    fn records_mut(data: &mut AdminData) -> &mut Vec<Self> {
        &mut data.reservations
    }
}

impl AdminCollection for CateringRequest {
    const PATH: &'static str = CATERING_PATH;

    fn records(data: &AdminData) -> &[Self] {
        &data.catering
    }

    fn records_mut(data: &mut AdminData) -> &mut Vec<Self> {
        &mut data.catering
    }
}

/// Which dashboard slices were updated by a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshReport {
    pub reservations: bool,
    pub catering: bool,
    pub stats: bool,
}

impl RefreshReport {
    /// All three fetches succeeded
    pub fn is_complete(&self) -> bool {
        self.reservations && self.catering && self.stats
    }
}

/// Replace the status of the record with `id`; `false` when no record matches
pub fn patch_status<T: Listing>(records: &mut [T], id: i64, status: T::Status) -> bool {
    match records.iter_mut().find(|record| record.id() == id) {
        Some(record) => {
            record.set_status(status);
            true
        }
        None => false,
    }
}

/// Admin session over an authenticated HTTP client
#[derive(Debug, Clone)]
pub struct AdminSession<H = NetworkHttpClient> {
    http: H,
    data: AdminData,
}

impl<H: HttpClient> AdminSession<H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            data: AdminData::default(),
        }
    }

    pub fn data(&self) -> &AdminData {
        &self.data
    }

    /// Fetch reservations, catering requests and stats concurrently.
    ///
    /// Each result is applied on its own; a failed fetch is logged and
    /// leaves its slice at the previous value.
    pub async fn refresh(&mut self) -> RefreshReport {
        let (reservations, catering, stats) = tokio::join!(
            self.http.get::<Vec<Reservation>>(RESERVATIONS_PATH),
            self.http.get::<Vec<CateringRequest>>(CATERING_PATH),
            self.http.get::<DashboardStats>(STATS_PATH),
        );

        let mut report = RefreshReport::default();
        match reservations {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Reservations loaded");
                self.data.reservations = records;
                report.reservations = true;
            }
            Err(e) => tracing::warn!("Failed to fetch reservations: {}", e),
        }
        match catering {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Catering requests loaded");
                self.data.catering = records;
                report.catering = true;
            }
            Err(e) => tracing::warn!("Failed to fetch catering requests: {}", e),
        }
        match stats {
            Ok(stats) => {
                self.data.stats = Some(stats);
                report.stats = true;
            }
            Err(e) => tracing::warn!("Failed to fetch dashboard stats: {}", e),
        }
        report
    }

    /// `PATCH /api/admin/{collection}/{id}` with `{status}`.
    ///
    /// On success the matching local record takes the new status and every
    /// other record is left untouched. On failure nothing local changes.
    /// Concurrent duplicate calls are not deduplicated.
    pub async fn update_status<T: AdminCollection>(
        &mut self,
        id: i64,
        status: T::Status,
    ) -> ClientResult<()> {
        let kind = <T::Status as Lifecycle>::KIND;
        let path = format!("{}/{}", T::PATH, id);
        if let Err(e) = self.http.patch(&path, &StatusUpdate { status }).await {
            tracing::warn!(kind, id, %status, "Status update failed: {}", e);
            return Err(e);
        }

        if patch_status(T::records_mut(&mut self.data), id, status) {
            tracing::info!(kind, id, %status, "Status updated");
        } else {
            tracing::debug!(kind, id, "Updated record is not loaded locally");
        }
        Ok(())
    }

    /// Apply an operator action, refusing actions the record's current
    /// status does not offer before any request is sent.
    pub async fn apply_action<T: AdminCollection>(
        &mut self,
        id: i64,
        action: StatusAction,
    ) -> ClientResult<T::Status> {
        let kind = <T::Status as Lifecycle>::KIND;
        let current = T::records(&self.data)
            .iter()
            .find(|record| record.id() == id)
            .map(|record| record.status())
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", kind, id)))?;

        let next = current
            .transition(action)
            .ok_or_else(|| ClientError::InvalidTransition {
                kind,
                status: current.to_string(),
                action,
            })?;

        self.update_status::<T>(id, next).await?;
        Ok(next)
    }

    pub async fn update_reservation_status(
        &mut self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<()> {
        self.update_status::<Reservation>(id, status).await
    }

    pub async fn update_catering_status(
        &mut self,
        id: i64,
        status: CateringStatus,
    ) -> ClientResult<()> {
        self.update_status::<CateringRequest>(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reservation(id: i64, status: ReservationStatus) -> Reservation {
        Reservation {
            id,
            name: format!("Guest {}", id),
            email: format!("guest{}@example.com", id),
            phone: "555".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            time: "20:00".to_string(),
            party_size: 2,
            status,
            special_requests: None,
            created_at: None,
        }
    }

    #[test]
    fn test_patch_status_changes_exactly_one_record() {
        let before: Vec<Reservation> = (1..=4)
            .map(|id| reservation(id, ReservationStatus::Pending))
            .collect();
        let mut after = before.clone();

        assert!(patch_status(&mut after, 3, ReservationStatus::Confirmed));

        let changed: Vec<i64> = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| b != a)
            .map(|(_, a)| a.id)
            .collect();
        assert_eq!(changed, vec![3]);
        assert_eq!(after[2].status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_patch_status_unknown_id_changes_nothing() {
        let before = vec![reservation(1, ReservationStatus::Pending)];
        let mut after = before.clone();
        assert!(!patch_status(&mut after, 99, ReservationStatus::Cancelled));
        assert_eq!(before, after);
    }

    #[test]
    fn test_refresh_report_completeness() {
        let report = RefreshReport {
            reservations: true,
            catering: false,
            stats: true,
        };
        assert!(!report.is_complete());
        assert!(RefreshReport {
            reservations: true,
            catering: true,
            stats: true
        }
        .is_complete());
    }
}
