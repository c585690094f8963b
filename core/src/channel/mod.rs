//! Named bidirectional message channel
//!
//! Pairs a fixed channel name with a call handler. The host messenger feeds
//! encoded request frames to [`MethodChannel::dispatch`] and ships the
//! returned frame back to the application layer. Each call is handled to
//! completion on the calling thread before the next is accepted; nothing
//! here suspends or spawns background work.

pub mod codec;
pub mod types;

pub use types::{MethodCall, MethodReply};

use crate::ChannelError;
use parking_lot::RwLock;
use std::sync::Arc;

/// Receives decoded calls from a channel
pub trait MethodCallHandler: Send + Sync {
    /// Handle one call to completion on the calling thread
    fn on_method_call(&self, call: MethodCall) -> MethodReply;
}

/// A named request/response channel between the application layer and
/// platform code.
pub struct MethodChannel {
    name: String,
    handler: RwLock<Option<Arc<dyn MethodCallHandler>>>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: RwLock::new(None),
        }
    }

    /// Channel name shared with the application layer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install or clear the call handler.
    ///
    /// At most one handler is active; setting a new one replaces the
    /// previous.
    pub fn set_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) {
        *self.handler.write() = handler;
    }

    /// Decode one request frame, route it, and encode the reply.
    ///
    /// A channel with no handler replies `NotImplemented`, the same marker
    /// an unknown method name produces. Codec failures are returned to the
    /// host transport and never reach a handler.
    pub fn dispatch(&self, frame: &[u8]) -> Result<Vec<u8>, ChannelError> {
        let call = codec::decode_call(frame)?;
        tracing::debug!(channel = %self.name, method = %call.method, "dispatching method call");

        let handler = self.handler.read().clone();
        let reply = match handler {
            Some(handler) => handler.on_method_call(call),
            None => {
                tracing::warn!(channel = %self.name, method = %call.method, "no handler registered");
                MethodReply::NotImplemented
            }
        };

        codec::encode_reply(&reply)
    }
}
