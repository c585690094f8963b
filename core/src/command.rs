//! Typed command set for the system-control channel
//!
//! The five wire methods as an exhaustive enum, so every variant is handled
//! at compile time. Parsing substitutes the documented defaults for missing
//! or unreadable arguments and never fails on argument content; only an
//! unknown method name parses to `None`, which the dispatcher answers with
//! the not-implemented marker.

use crate::channel::MethodCall;
use crate::platform::RingerMode;

pub const METHOD_CHECK_POLICY_ACCESS: &str = "checkPolicyAccess";
pub const METHOD_OPEN_POLICY_SETTINGS: &str = "openPolicySettings";
pub const METHOD_GET_RINGER_MODE: &str = "getRingerMode";
pub const METHOD_SET_RINGER_MODE: &str = "setRingerMode";
pub const METHOD_SET_DND: &str = "setDnd";

/// One recognized channel command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemCommand {
    /// Query whether notification-policy access is granted
    CheckPolicyAccess,
    /// Open the policy-access grant screen
    OpenPolicySettings,
    /// Read the current ringer mode
    GetRingerMode,
    /// Write the ringer mode
    SetRingerMode { mode: RingerMode },
    /// Toggle Do Not Disturb
    SetDnd { enabled: bool },
}

impl SystemCommand {
    /// Parse a wire call into a command.
    ///
    /// Returns `None` for a method outside the contract. Argument defects
    /// are absorbed here: a `mode` that is absent, null, non-integer, or
    /// outside the defined ringer modes becomes `Normal`; an `enabled` that
    /// is absent, null, or non-boolean becomes `false`.
    pub fn from_call(call: &MethodCall) -> Option<Self> {
        match call.method.as_str() {
            METHOD_CHECK_POLICY_ACCESS => Some(Self::CheckPolicyAccess),
            METHOD_OPEN_POLICY_SETTINGS => Some(Self::OpenPolicySettings),
            METHOD_GET_RINGER_MODE => Some(Self::GetRingerMode),
            METHOD_SET_RINGER_MODE => {
                let mode = call
                    .argument_i64("mode")
                    .and_then(RingerMode::from_raw)
                    .unwrap_or_default();
                Some(Self::SetRingerMode { mode })
            }
            METHOD_SET_DND => {
                let enabled = call.argument_bool("enabled").unwrap_or(false);
                Some(Self::SetDnd { enabled })
            }
            _ => None,
        }
    }

    /// Wire name for this command
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::CheckPolicyAccess => METHOD_CHECK_POLICY_ACCESS,
            Self::OpenPolicySettings => METHOD_OPEN_POLICY_SETTINGS,
            Self::GetRingerMode => METHOD_GET_RINGER_MODE,
            Self::SetRingerMode { .. } => METHOD_SET_RINGER_MODE,
            Self::SetDnd { .. } => METHOD_SET_DND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_parse_argument_less_methods() {
        assert_eq!(
            SystemCommand::from_call(&MethodCall::new("checkPolicyAccess")),
            Some(SystemCommand::CheckPolicyAccess)
        );
        assert_eq!(
            SystemCommand::from_call(&MethodCall::new("openPolicySettings")),
            Some(SystemCommand::OpenPolicySettings)
        );
        assert_eq!(
            SystemCommand::from_call(&MethodCall::new("getRingerMode")),
            Some(SystemCommand::GetRingerMode)
        );
    }

    #[test]
    fn test_parse_set_ringer_mode() {
        let call = MethodCall::new("setRingerMode").with_argument("mode", json!(0));
        assert_eq!(
            SystemCommand::from_call(&call),
            Some(SystemCommand::SetRingerMode {
                mode: RingerMode::Silent
            })
        );
    }

    #[test]
    fn test_set_ringer_mode_defaults_to_normal() {
        // Absent, null, wrong type, and out-of-range all read as "normal"
        let defects = [
            MethodCall::new("setRingerMode"),
            MethodCall::new("setRingerMode").with_argument("mode", Value::Null),
            MethodCall::new("setRingerMode").with_argument("mode", json!("loud")),
            MethodCall::new("setRingerMode").with_argument("mode", json!(9)),
        ];
        for call in defects {
            assert_eq!(
                SystemCommand::from_call(&call),
                Some(SystemCommand::SetRingerMode {
                    mode: RingerMode::Normal
                })
            );
        }
    }

    #[test]
    fn test_parse_set_dnd() {
        let call = MethodCall::new("setDnd").with_argument("enabled", json!(true));
        assert_eq!(
            SystemCommand::from_call(&call),
            Some(SystemCommand::SetDnd { enabled: true })
        );
    }

    #[test]
    fn test_set_dnd_defaults_to_disabled() {
        let defects = [
            MethodCall::new("setDnd"),
            MethodCall::new("setDnd").with_argument("enabled", Value::Null),
            MethodCall::new("setDnd").with_argument("enabled", json!(1)),
        ];
        for call in defects {
            assert_eq!(
                SystemCommand::from_call(&call),
                Some(SystemCommand::SetDnd { enabled: false })
            );
        }
    }

    #[test]
    fn test_unknown_method_is_none() {
        assert_eq!(SystemCommand::from_call(&MethodCall::new("reboot")), None);
        assert_eq!(SystemCommand::from_call(&MethodCall::new("")), None);
        // Method names are case-sensitive
        assert_eq!(
            SystemCommand::from_call(&MethodCall::new("GetRingerMode")),
            None
        );
    }

    #[test]
    fn test_method_name_roundtrip() {
        let commands = [
            SystemCommand::CheckPolicyAccess,
            SystemCommand::OpenPolicySettings,
            SystemCommand::GetRingerMode,
            SystemCommand::SetRingerMode {
                mode: RingerMode::Silent,
            },
            SystemCommand::SetDnd { enabled: true },
        ];
        for command in commands {
            let call = MethodCall::new(command.method_name());
            let parsed = SystemCommand::from_call(&call).unwrap();
            assert_eq!(parsed.method_name(), command.method_name());
        }
    }
}
