//! System settings launcher collaborator

/// Fire-and-forget access to the system settings UI.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsLauncher: Send + Sync {
    /// Present the policy-access grant screen in a new task context.
    ///
    /// The launch outcome is not observable from here; the caller re-queries
    /// the grant state with `checkPolicyAccess` once the user returns.
    fn open_policy_access_settings(&self);
}
