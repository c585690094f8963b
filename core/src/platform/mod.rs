//! Platform service collaborators
//!
//! The operating-system services the dispatcher drives, behind traits the
//! embedding platform implements:
//! - Audio manager: ringer mode read/write
//! - Notification policy manager: DND access query, interruption filter
//! - Settings launcher: policy-access grant screen
//!
//! All mutated state (ringer mode, interruption filter) belongs to the
//! operating system; this crate holds only the service handles.

pub mod audio;
pub mod launcher;
pub mod policy;

pub use audio::{AudioService, RingerMode};
pub use launcher::SettingsLauncher;
pub use policy::{InterruptionFilter, NotificationPolicyService};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Platform API level reported by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Android 6.0, the first release with interruption-filter control
    pub const MARSHMALLOW: ApiLevel = ApiLevel(23);

    /// Whether this release supports setting the interruption filter
    pub fn supports_interruption_filter(self) -> bool {
        self >= Self::MARSHMALLOW
    }
}

impl std::fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// Handles to the system services plus the host-reported API level.
///
/// Built once by the embedding platform and handed to the bridge. The
/// dispatcher keeps no other state between invocations.
#[derive(Clone)]
pub struct SystemServices {
    pub audio: Arc<dyn AudioService>,
    pub policy: Arc<dyn NotificationPolicyService>,
    pub launcher: Arc<dyn SettingsLauncher>,
    pub api_level: ApiLevel,
}

impl SystemServices {
    pub fn new(
        audio: Arc<dyn AudioService>,
        policy: Arc<dyn NotificationPolicyService>,
        launcher: Arc<dyn SettingsLauncher>,
        api_level: ApiLevel,
    ) -> Self {
        Self {
            audio,
            policy,
            launcher,
            api_level,
        }
    }
}
