//! System-control dispatcher
//!
//! Maps each recognized command to exactly one service call. No recognized
//! command can fail observably: argument defects were already defaulted at
//! parse time, and the DND toggle degrades to a silent no-op when the
//! release or the granted permissions cannot honor it.

use crate::channel::{MethodCall, MethodCallHandler, MethodReply};
use crate::command::SystemCommand;
use crate::platform::{InterruptionFilter, SystemServices};

/// Handles system-control calls against the platform services
pub struct SystemControlHandler {
    services: SystemServices,
}

impl SystemControlHandler {
    pub fn new(services: SystemServices) -> Self {
        Self { services }
    }

    fn execute(&self, command: SystemCommand) -> MethodReply {
        match command {
            SystemCommand::CheckPolicyAccess => {
                // The collaborator's answer is reported untransformed
                let granted = self.services.policy.is_policy_access_granted();
                MethodReply::ok(granted)
            }
            SystemCommand::OpenPolicySettings => {
                self.services.launcher.open_policy_access_settings();
                MethodReply::empty()
            }
            SystemCommand::GetRingerMode => {
                let mode = self.services.audio.ringer_mode();
                MethodReply::ok(mode.as_raw())
            }
            SystemCommand::SetRingerMode { mode } => {
                self.services.audio.set_ringer_mode(mode);
                MethodReply::empty()
            }
            SystemCommand::SetDnd { enabled } => {
                // Always a success reply, even when the change is skipped.
                // Callers that need the grant state query checkPolicyAccess.
                if self.services.api_level.supports_interruption_filter()
                    && self.services.policy.is_policy_access_granted()
                {
                    let filter = if enabled {
                        InterruptionFilter::None
                    } else {
                        InterruptionFilter::All
                    };
                    self.services.policy.set_interruption_filter(filter);
                } else {
                    tracing::debug!(
                        enabled,
                        api_level = %self.services.api_level,
                        "dnd change skipped"
                    );
                }
                MethodReply::empty()
            }
        }
    }
}

impl MethodCallHandler for SystemControlHandler {
    fn on_method_call(&self, call: MethodCall) -> MethodReply {
        match SystemCommand::from_call(&call) {
            Some(command) => {
                tracing::debug!(method = command.method_name(), "executing command");
                self.execute(command)
            }
            None => {
                tracing::debug!(method = %call.method, "method not implemented");
                MethodReply::NotImplemented
            }
        }
    }
}
