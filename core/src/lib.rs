// Silentmode core — platform channel shim for ringer and DND control
//
// One named channel, five commands, zero state. The operating-system
// services behind the commands are collaborators the embedding platform
// injects; everything here is contract, codec, and dispatch.

pub mod channel;
pub mod command;
pub mod handler;
pub mod platform;

use std::sync::Arc;
use thiserror::Error;

pub use channel::{codec, MethodCall, MethodCallHandler, MethodChannel, MethodReply};
pub use command::SystemCommand;
pub use handler::SystemControlHandler;
pub use platform::{
    ApiLevel, AudioService, InterruptionFilter, NotificationPolicyService, RingerMode,
    SettingsLauncher, SystemServices,
};

/// Channel name shared with the application layer
pub const CHANNEL_NAME: &str = "com.silentmode/system";

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors surfaced to the host transport.
///
/// Command handling itself never fails; these cover only frames the codec
/// cannot process.
#[derive(Debug, Error, Clone)]
pub enum ChannelError {
    #[error("Frame too large: {0} bytes")]
    FrameTooLarge(usize),

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// BRIDGE
// ============================================================================

/// The platform-side end of the system-control channel.
///
/// The embedding platform builds one of these around its service handles
/// during engine configuration and feeds it every frame arriving on
/// [`CHANNEL_NAME`]. Calls are synchronous and independent; the bridge holds
/// no state between them.
pub struct SilentModeBridge {
    channel: MethodChannel,
}

impl SilentModeBridge {
    /// Wire the dispatcher to the named channel
    pub fn new(services: SystemServices) -> Self {
        // Initialize tracing (idempotent)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .try_init();

        let channel = MethodChannel::new(CHANNEL_NAME);
        channel.set_handler(Some(Arc::new(SystemControlHandler::new(services))));

        tracing::info!(channel = CHANNEL_NAME, "silentmode bridge ready");
        Self { channel }
    }

    /// Handle one request frame and return the encoded reply
    pub fn handle_message(&self, frame: &[u8]) -> Result<Vec<u8>, ChannelError> {
        self.channel.dispatch(frame)
    }

    /// Name of the underlying channel
    pub fn channel_name(&self) -> &str {
        self.channel.name()
    }
}
