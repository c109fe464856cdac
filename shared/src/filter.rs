//! List filtering engine
//!
//! [`select_visible`] narrows a list of records by a [`FilterState`]. It is a
//! pure function of its inputs (the current time included) so the admin
//! tables can be recomputed on every filter change and tested without any
//! view around them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;
use crate::models::{CateringRequest, Lifecycle, Reservation};

/// Record that can be listed, filtered and status-patched by id
pub trait Listing {
    type Status: Lifecycle;

    fn id(&self) -> i64;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
    fn name(&self) -> &str;
    fn email(&self) -> &str;

    /// Day the date range filter looks at. `None` opts the record kind out
    /// of date filtering.
    fn scheduled_on(&self) -> Option<NaiveDate> {
        None
    }
}

impl Listing for Reservation {
    type Status = crate::models::ReservationStatus;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn scheduled_on(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl Listing for CateringRequest {
    type Status = crate::models::CateringStatus;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }
}

// =============================================================================
// Filter criteria
// =============================================================================

/// Status criterion: everything, or one exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Lifecycle> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl<S: Lifecycle> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: Lifecycle + FromStr<Err = ModelError>,
{
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Date range criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    /// Currently unrestricted: no calendar-month predicate exists yet
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [Self::All, Self::Today, Self::Week, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    /// Whether `date` falls inside the range as seen at `now`.
    ///
    /// `Week` compares the start of `date` against `now - 7 days` and has no
    /// upper bound, so upcoming dates stay visible.
    pub fn contains(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        match self {
            DateRange::Today => date == now.date(),
            DateRange::Week => date.and_time(NaiveTime::MIN) >= now - TimeDelta::days(7),
            DateRange::Month | DateRange::All => true,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownDateRange(s.to_string()))
    }
}

/// Combination of status, date and text criteria for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<S> {
    pub status: StatusFilter<S>,
    pub date_range: DateRange,
    /// Free-text term, matched against name and email
    pub search: String,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            date_range: DateRange::All,
            search: String::new(),
        }
    }
}

impl<S: Lifecycle> FilterState<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter<S>) -> Self {
        self.status = status;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any criterion narrows the list
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All
            || self.date_range != DateRange::All
            || !self.search.trim().is_empty()
    }

    /// AND of the status, date and search predicates
    pub fn matches<T>(&self, record: &T, now: NaiveDateTime) -> bool
    where
        T: Listing<Status = S>,
    {
        self.matches_with_term(record, now, &self.search_term())
    }

    /// Lowercased search text, empty when only whitespace was entered.
    /// Surrounding spaces in a real term are part of the substring.
    fn search_term(&self) -> String {
        if self.search.trim().is_empty() {
            String::new()
        } else {
            self.search.to_lowercase()
        }
    }

    /// `term` is the output of `search_term`
    fn matches_with_term<T>(&self, record: &T, now: NaiveDateTime, term: &str) -> bool
    where
        T: Listing<Status = S>,
    {
        self.status.matches(record.status())
            && record
                .scheduled_on()
                .is_none_or(|date| self.date_range.contains(date, now))
            && (term.is_empty()
                || record.name().to_lowercase().contains(term)
                || record.email().to_lowercase().contains(term))
    }
}

/// Visible subset of `records` under `filters`, in input order
pub fn select_visible<'a, T: Listing>(
    records: &'a [T],
    filters: &FilterState<T::Status>,
    now: NaiveDateTime,
) -> Vec<&'a T> {
    let term = filters.search_term();
    records
        .iter()
        .filter(|record| filters.matches_with_term(*record, now, &term))
        .collect()
}
