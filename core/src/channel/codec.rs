// Channel codec — JSON framing with size limits to prevent abuse

use super::types::{MethodCall, MethodReply};
use crate::ChannelError;

/// Maximum encoded frame size: 64 KB
/// Channel traffic is small control messages; anything larger is hostile.
pub const MAX_FRAME_SIZE: usize = 64 * 1024;

/// Serialize a MethodCall to bytes (JSON)
pub fn encode_call(call: &MethodCall) -> Result<Vec<u8>, ChannelError> {
    let bytes =
        serde_json::to_vec(call).map_err(|e| ChannelError::Serialization(e.to_string()))?;

    if bytes.len() > MAX_FRAME_SIZE {
        return Err(ChannelError::FrameTooLarge(bytes.len()));
    }

    Ok(bytes)
}

/// Deserialize bytes to a MethodCall
pub fn decode_call(bytes: &[u8]) -> Result<MethodCall, ChannelError> {
    if bytes.len() > MAX_FRAME_SIZE {
        return Err(ChannelError::FrameTooLarge(bytes.len()));
    }

    serde_json::from_slice(bytes).map_err(|e| ChannelError::MalformedFrame(e.to_string()))
}

/// Serialize a MethodReply to bytes (JSON)
pub fn encode_reply(reply: &MethodReply) -> Result<Vec<u8>, ChannelError> {
    let bytes =
        serde_json::to_vec(reply).map_err(|e| ChannelError::Serialization(e.to_string()))?;

    if bytes.len() > MAX_FRAME_SIZE {
        return Err(ChannelError::FrameTooLarge(bytes.len()));
    }

    Ok(bytes)
}

/// Deserialize bytes to a MethodReply
pub fn decode_reply(bytes: &[u8]) -> Result<MethodReply, ChannelError> {
    if bytes.len() > MAX_FRAME_SIZE {
        return Err(ChannelError::FrameTooLarge(bytes.len()));
    }

    serde_json::from_slice(bytes).map_err(|e| ChannelError::MalformedFrame(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_roundtrip() {
        let call = MethodCall::new("setRingerMode").with_argument("mode", json!(0));
        let bytes = encode_call(&call).unwrap();
        let restored = decode_call(&bytes).unwrap();

        assert_eq!(call, restored);
    }

    #[test]
    fn test_reply_roundtrip() {
        for reply in [
            MethodReply::ok(true),
            MethodReply::ok(1),
            MethodReply::empty(),
            MethodReply::NotImplemented,
        ] {
            let bytes = encode_reply(&reply).unwrap();
            assert_eq!(decode_reply(&bytes).unwrap(), reply);
        }
    }

    #[test]
    fn test_reject_oversized_decode() {
        let big = vec![b' '; MAX_FRAME_SIZE + 1];
        assert!(matches!(
            decode_call(&big),
            Err(ChannelError::FrameTooLarge(_))
        ));
        assert!(matches!(
            decode_reply(&big),
            Err(ChannelError::FrameTooLarge(_))
        ));
    }

    #[test]
    fn test_reject_oversized_encode() {
        let mut call = MethodCall::new("setRingerMode");
        call = call.with_argument("mode", json!("x".repeat(MAX_FRAME_SIZE)));
        assert!(matches!(
            encode_call(&call),
            Err(ChannelError::FrameTooLarge(_))
        ));
    }

    #[test]
    fn test_reject_malformed_call() {
        assert!(matches!(
            decode_call(b"not json"),
            Err(ChannelError::MalformedFrame(_))
        ));
        // Valid JSON, wrong shape
        assert!(matches!(
            decode_call(b"[1, 2, 3]"),
            Err(ChannelError::MalformedFrame(_))
        ));
    }

    #[test]
    fn test_decode_call_without_arguments_key() {
        let call = decode_call(br#"{"method": "checkPolicyAccess"}"#).unwrap();
        assert_eq!(call.method, "checkPolicyAccess");
        assert!(call.arguments.is_none());
    }
}
