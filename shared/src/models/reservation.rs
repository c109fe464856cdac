//! Reservation Model (餐桌预约)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::{Lifecycle, StatusAction};
use crate::ModelError;
use crate::util::deserialize_calendar_date;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownStatus {
                kind: Self::KIND,
                value: s.to_string(),
            })
    }
}

impl Lifecycle for ReservationStatus {
    const KIND: &'static str = "reservation";

    fn allowed_actions(self) -> &'static [StatusAction] {
        match self {
            ReservationStatus::Pending => &[StatusAction::Confirm, StatusAction::Cancel],
            ReservationStatus::Confirmed => &[StatusAction::Complete],
            ReservationStatus::Cancelled | ReservationStatus::Completed => &[],
        }
    }

    fn target(action: StatusAction) -> Option<Self> {
        Some(match action {
            StatusAction::Confirm => ReservationStatus::Confirmed,
            StatusAction::Cancel => ReservationStatus::Cancelled,
            StatusAction::Complete => ReservationStatus::Completed,
        })
    }
}

/// Table reservation as returned by `GET /api/admin/reservations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    /// Customer name
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Reservation day
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    /// Arrival time as entered by the customer (HH:MM)
    pub time: String,
    pub party_size: u32,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_actions_per_status() {
        assert_eq!(
            ReservationStatus::Pending.allowed_actions(),
            &[StatusAction::Confirm, StatusAction::Cancel]
        );
        assert_eq!(
            ReservationStatus::Confirmed.allowed_actions(),
            &[StatusAction::Complete]
        );
        assert!(ReservationStatus::Cancelled.allowed_actions().is_empty());
        assert!(ReservationStatus::Completed.allowed_actions().is_empty());
    }

    #[test]
    fn test_transitions_are_monotonic() {
        use ReservationStatus::*;

        assert_eq!(Pending.transition(StatusAction::Confirm), Some(Confirmed));
        assert_eq!(Pending.transition(StatusAction::Cancel), Some(Cancelled));
        assert_eq!(Pending.transition(StatusAction::Complete), None);
        assert_eq!(Confirmed.transition(StatusAction::Complete), Some(Completed));
        assert_eq!(Confirmed.transition(StatusAction::Cancel), None);
        assert_eq!(Completed.transition(StatusAction::Confirm), None);
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn test_deserialize_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "John Smith",
            "email": "john@example.com",
            "phone": "555-0101",
            "date": "2026-10-16T00:00:00.000Z",
            "time": "19:30",
            "partySize": 4,
            "status": "confirmed"
        }"#;

        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.id, 7);
        assert_eq!(reservation.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(reservation.party_size, 4);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.special_requests, None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("CANCELLED".parse(), Ok(ReservationStatus::Cancelled));
        assert_eq!(
            "seated".parse::<ReservationStatus>(),
            Err(ModelError::UnknownStatus {
                kind: "reservation",
                value: "seated".to_string()
            })
        );
    }
}
