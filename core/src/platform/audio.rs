//! Audio service collaborator
//!
//! Read/write access to the device-wide alert mode, behind a trait the
//! embedding platform implements over its audio manager. Raw values follow
//! the platform convention: silent = 0, vibrate = 1, normal = 2.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device-wide audio alert mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingerMode {
    /// No sound, no vibration
    Silent,
    /// Vibration only
    Vibrate,
    /// Full sound
    Normal,
}

impl RingerMode {
    /// Raw platform value for this mode
    pub const fn as_raw(self) -> i64 {
        match self {
            RingerMode::Silent => 0,
            RingerMode::Vibrate => 1,
            RingerMode::Normal => 2,
        }
    }

    /// Decode a raw platform value.
    ///
    /// Returns `None` for anything outside the three defined modes; callers
    /// decide the fallback (the channel layer substitutes `Normal`).
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(RingerMode::Silent),
            1 => Some(RingerMode::Vibrate),
            2 => Some(RingerMode::Normal),
            _ => None,
        }
    }
}

impl Default for RingerMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for RingerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "Silent"),
            Self::Vibrate => write!(f, "Vibrate"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

/// Ringer state owned by the operating system.
///
/// Both operations are direct synchronous passthroughs to the platform audio
/// manager and cannot fail.
#[cfg_attr(test, mockall::automock)]
pub trait AudioService: Send + Sync {
    /// Current ringer mode
    fn ringer_mode(&self) -> RingerMode;
    /// Replace the ringer mode
    fn set_ringer_mode(&self, mode: RingerMode);
}
