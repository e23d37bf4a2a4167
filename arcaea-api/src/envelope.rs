//! Response envelope decoding.
//!
//! Every JSON endpoint wraps its payload in the same envelope:
//!
//! ```json
//! { "status": 0, "content": { ... } }
//! { "status": -3, "message": "user not found" }
//! ```
//!
//! `status >= 0` means success and `content` carries the endpoint-specific
//! payload; `status < 0` means the service rejected the request and `message`
//! says why. [`decode`] centralizes that branch for all endpoints, mapping an
//! envelope that violates the contract (missing `status`, an error without a
//! `message`, a success without `content`) to
//! [`ArcaeaError::Malformed`](crate::ArcaeaError::Malformed) instead of
//! panicking on a missing field.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ArcaeaError, Result};

#[derive(Debug, Deserialize)]
struct Envelope {
    status: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    content: Option<Value>,
}

/// Decode a raw response body into the `content` of a success envelope.
///
/// Returns [`ArcaeaError::Api`](crate::ArcaeaError::Api) when the envelope
/// reports a negative status, and
/// [`ArcaeaError::Malformed`](crate::ArcaeaError::Malformed) when the body is
/// not a valid envelope for either branch.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| ArcaeaError::Malformed(format!("invalid envelope: {e}")))?;

    if envelope.status < 0 {
        let message = envelope.message.ok_or_else(|| {
            ArcaeaError::Malformed(format!(
                "error status {} without a message",
                envelope.status
            ))
        })?;
        return Err(ArcaeaError::Api {
            code: envelope.status,
            message,
        });
    }

    // A success with no content is a server contract violation, not an empty
    // result: empty results come back as empty structures inside `content`.
    let content = envelope.content.ok_or_else(|| {
        ArcaeaError::Malformed(format!(
            "success status {} without content",
            envelope.status
        ))
    })?;
    serde_json::from_value(content)
        .map_err(|e| ArcaeaError::Malformed(format!("unexpected content shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Title {
        title: String,
    }

    #[test]
    fn success_envelope_yields_content() {
        let body = br#"{"status":0,"content":{"title":"Fracture Ray"}}"#;
        let content: Title = decode(body).unwrap();
        assert_eq!(content.title, "Fracture Ray");
    }

    #[test]
    fn negative_status_maps_to_api_error() {
        let body = br#"{"status":-1,"message":"song not found"}"#;
        let err = decode::<Title>(body).unwrap_err();
        match err {
            ArcaeaError::Api { code, message } => {
                assert_eq!(code, -1);
                assert_eq!(message, "song not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_content_is_malformed() {
        let err = decode::<Title>(br#"{"status":0}"#).unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let err = decode::<Title>(br#"{"status":0,"content":null}"#).unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn error_status_without_message_is_malformed() {
        let err = decode::<Title>(br#"{"status":-23}"#).unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn missing_status_is_malformed() {
        let err = decode::<Title>(br#"{"content":{"title":"x"}}"#).unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode::<Title>(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn content_shape_mismatch_is_malformed() {
        let err = decode::<Title>(br#"{"status":0,"content":[1,2,3]}"#).unwrap_err();
        assert!(matches!(err, ArcaeaError::Malformed(_)));
    }

    #[test]
    fn empty_structure_content_is_a_valid_success() {
        #[derive(Debug, Deserialize)]
        struct Aliases {
            alias: Vec<String>,
        }
        let body = br#"{"status":0,"content":{"alias":[]}}"#;
        let content: Aliases = decode(body).unwrap();
        assert!(content.alias.is_empty());
    }
}
