//! Admin view state
//!
//! Active tab plus one filter state per table. Rows are derived from the
//! session data on demand, each carrying the actions its status allows.

use chrono::NaiveDateTime;
use shared::models::{
    CateringRequest, CateringStatus, DashboardStats, Lifecycle, Reservation, ReservationStatus,
    StatusAction,
};
use shared::{DateRange, FilterState, Listing, StatusFilter, select_visible};
use std::fmt;

use crate::session::AdminData;

/// Admin dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Reservations,
    Catering,
}

impl AdminTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Reservations => "reservations",
            AdminTab::Catering => "catering",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Table row: a record and the actions offered for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a, T> {
    pub record: &'a T,
    pub actions: &'static [StatusAction],
}

impl<'a, T: Listing> Row<'a, T> {
    pub fn new(record: &'a T) -> Self {
        Self {
            record,
            actions: record.status().allowed_actions(),
        }
    }
}

/// Overview tab summary
#[derive(Debug, Clone, PartialEq)]
pub struct Overview<'a> {
    pub stats: Option<&'a DashboardStats>,
    pub pending_reservations: usize,
    pub pending_catering: usize,
    /// Reservations for today, in list order
    pub today: Vec<&'a Reservation>,
}

/// Admin dashboard view state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminView {
    tab: AdminTab,
    reservation_filters: FilterState<ReservationStatus>,
    catering_filters: FilterState<CateringStatus>,
}

impl AdminView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn reservation_filters(&self) -> &FilterState<ReservationStatus> {
        &self.reservation_filters
    }

    pub fn catering_filters(&self) -> &FilterState<CateringStatus> {
        &self.catering_filters
    }

    pub fn set_reservation_filters(&mut self, filters: FilterState<ReservationStatus>) {
        self.reservation_filters = filters;
    }

    pub fn set_catering_filters(&mut self, filters: FilterState<CateringStatus>) {
        self.catering_filters = filters;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        match self.tab {
            AdminTab::Reservations => self.reservation_filters.search = term,
            AdminTab::Catering => self.catering_filters.search = term,
            AdminTab::Overview => {}
        }
    }

    /// Reset the active table's filters
    pub fn clear_filters(&mut self) {
        match self.tab {
            AdminTab::Reservations => self.reservation_filters = FilterState::default(),
            AdminTab::Catering => self.catering_filters = FilterState::default(),
            AdminTab::Overview => {}
        }
    }

    pub fn reservation_rows<'a>(
        &self,
        data: &'a AdminData,
        now: NaiveDateTime,
    ) -> Vec<Row<'a, Reservation>> {
        select_visible(&data.reservations, &self.reservation_filters, now)
            .into_iter()
            .map(Row::new)
            .collect()
    }

    pub fn catering_rows<'a>(
        &self,
        data: &'a AdminData,
        now: NaiveDateTime,
    ) -> Vec<Row<'a, CateringRequest>> {
        select_visible(&data.catering, &self.catering_filters, now)
            .into_iter()
            .map(Row::new)
            .collect()
    }

    pub fn overview<'a>(&self, data: &'a AdminData, now: NaiveDateTime) -> Overview<'a> {
        let today_filter =
            FilterState::<ReservationStatus>::new().with_date_range(DateRange::Today);
        let pending_catering = FilterState::<CateringStatus>::new()
            .with_status(StatusFilter::Only(CateringStatus::Pending));
        let pending_reservations = FilterState::<ReservationStatus>::new()
            .with_status(StatusFilter::Only(ReservationStatus::Pending));

        Overview {
            stats: data.stats.as_ref(),
            pending_reservations: select_visible(&data.reservations, &pending_reservations, now)
                .len(),
            pending_catering: select_visible(&data.catering, &pending_catering, now).len(),
            today: select_visible(&data.reservations, &today_filter, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn reservation(id: i64, name: &str, status: ReservationStatus, day: u32) -> Reservation {
        Reservation {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            time: "20:00".to_string(),
            party_size: 2,
            status,
            special_requests: None,
            created_at: None,
        }
    }

    fn data() -> AdminData {
        AdminData {
            reservations: vec![
                reservation(1, "John", ReservationStatus::Pending, 16),
                reservation(2, "Maria", ReservationStatus::Confirmed, 16),
                reservation(3, "Ana", ReservationStatus::Completed, 2),
            ],
            catering: vec![],
            stats: None,
        }
    }

    #[test]
    fn test_rows_carry_actions_for_status() {
        let data = data();
        let view = AdminView::new();
        let rows = view.reservation_rows(&data, now());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].actions, &[StatusAction::Confirm, StatusAction::Cancel]);
        assert_eq!(rows[1].actions, &[StatusAction::Complete]);
        assert!(rows[2].actions.is_empty());
    }

    #[test]
    fn test_search_applies_to_active_tab_only() {
        let data = data();
        let mut view = AdminView::new();

        view.set_search("maria");
        assert_eq!(view.reservation_rows(&data, now()).len(), 3);

        view.set_tab(AdminTab::Reservations);
        view.set_search("maria");
        let rows = view.reservation_rows(&data, now());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, 2);

        view.clear_filters();
        assert_eq!(view.reservation_rows(&data, now()).len(), 3);
    }

    #[test]
    fn test_overview_counts() {
        let data = data();
        let overview = AdminView::new().overview(&data, now());

        assert_eq!(overview.pending_reservations, 1);
        assert_eq!(overview.pending_catering, 0);
        assert_eq!(
            overview.today.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(overview.stats.is_none());
    }
}
