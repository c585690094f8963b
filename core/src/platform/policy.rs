//! Notification policy service collaborator
//!
//! Do Not Disturb control: the capability query for notification-policy
//! access and the interruption-filter mutator. Filter values follow the
//! platform notification-manager constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which notifications may interrupt the user while the filter is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterruptionFilter {
    /// Filter state could not be determined
    Unknown,
    /// Allow all notifications
    All,
    /// Priority notifications only
    Priority,
    /// Block all notifications
    None,
    /// Alarms only
    Alarms,
}

impl InterruptionFilter {
    /// Raw platform value for this filter
    pub const fn as_raw(self) -> i64 {
        match self {
            InterruptionFilter::Unknown => 0,
            InterruptionFilter::All => 1,
            InterruptionFilter::Priority => 2,
            InterruptionFilter::None => 3,
            InterruptionFilter::Alarms => 4,
        }
    }

    /// Decode a raw platform value
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(InterruptionFilter::Unknown),
            1 => Some(InterruptionFilter::All),
            2 => Some(InterruptionFilter::Priority),
            3 => Some(InterruptionFilter::None),
            4 => Some(InterruptionFilter::Alarms),
            _ => Option::None,
        }
    }
}

impl fmt::Display for InterruptionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::All => write!(f, "All"),
            Self::Priority => write!(f, "Priority"),
            Self::None => write!(f, "None"),
            Self::Alarms => write!(f, "Alarms"),
        }
    }
}

/// Do Not Disturb policy surface owned by the operating system.
///
/// `set_interruption_filter` silently does nothing at the OS level when the
/// app lacks policy access; the dispatcher additionally gates the call so a
/// denied grant never turns into an error.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPolicyService: Send + Sync {
    /// Whether the app currently holds notification-policy access
    fn is_policy_access_granted(&self) -> bool;
    /// Replace the active interruption filter
    fn set_interruption_filter(&self, filter: InterruptionFilter);
}
