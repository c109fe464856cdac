//! Status lifecycle (预约/餐饮状态流转)
//!
//! Every record kind has its own exhaustive status enum. The actions an
//! operator may take are a total function of the current status, so the
//! set of buttons a view offers never depends on string matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Operator action on a record's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
}

impl StatusAction {
    pub const ALL: [StatusAction; 3] = [Self::Confirm, Self::Cancel, Self::Complete];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "confirm",
            StatusAction::Cancel => "cancel",
            StatusAction::Complete => "complete",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownAction(s.to_string()))
    }
}

/// Status domain of a record kind.
///
/// Transitions are monotonic: a status only ever moves forward through
/// the actions returned by [`Lifecycle::allowed_actions`].
pub trait Lifecycle:
    Copy + Eq + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Record kind name used in messages (`"reservation"`, `"catering"`)
    const KIND: &'static str;

    /// Actions the operator may take from this status
    fn allowed_actions(self) -> &'static [StatusAction];

    /// Status reached by `action`, regardless of the current status.
    /// `None` when the action does not exist in this domain.
    fn target(action: StatusAction) -> Option<Self>;

    /// Status reached by applying `action` from `self`, if allowed.
    fn transition(self, action: StatusAction) -> Option<Self> {
        if self.allowed_actions().contains(&action) {
            Self::target(action)
        } else {
            None
        }
    }

    /// Whether no further action is possible
    fn is_terminal(self) -> bool {
        self.allowed_actions().is_empty()
    }
}
