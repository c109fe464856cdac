//! Catering Request Model (外烩/餐饮服务请求)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::{Lifecycle, StatusAction};
use crate::ModelError;
use crate::util::deserialize_calendar_date;

/// Catering request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CateringStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl CateringStatus {
    pub const ALL: [CateringStatus; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            CateringStatus::Pending => "pending",
            CateringStatus::Confirmed => "confirmed",
            CateringStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CateringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CateringStatus {
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

impl Lifecycle for CateringStatus {
    const KIND: &'static str = "catering";

    fn allowed_actions(self) -> &'static [StatusAction] {
        match self {
            CateringStatus::Pending => &[StatusAction::Confirm, StatusAction::Cancel],
            CateringStatus::Confirmed | CateringStatus::Cancelled => &[],
        }
    }

    fn target(action: StatusAction) -> Option<Self> {
        match action {
            StatusAction::Confirm => Some(CateringStatus::Confirmed),
            StatusAction::Cancel => Some(CateringStatus::Cancelled),
            StatusAction::Complete => None,
        }
    }
}

/// Catering request as returned by `GET /api/admin/catering`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringRequest {
    pub id: i64,
    /// Contact person
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Free-form event type ("wedding", "corporate", ...)
    pub event_type: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub event_date: NaiveDate,
    pub event_time: String,
    pub guest_count: u32,
    pub status: CateringStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
