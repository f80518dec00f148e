//! Turns raw C-CEX answers into payloads or typed failures.

use serde_json::Value;
use tracing::warn;

use crate::error::{CcexError, Result};
use crate::request::CallStyle;
use crate::transport::RawResponse;

/// Marker found in the exchange's (non-JSON) maintenance page.
pub const MAINTENANCE_MARKER: &str = "Maintenance";

const UNKNOWN_ERROR: &str = "Unknown error";

/// Decode `raw` according to `style`.
///
/// The HTTP status is not consulted: the exchange reports failures in the body.
pub fn normalize(raw: RawResponse, style: CallStyle) -> Result<Value> {
    if !raw.status.is_success() {
        warn!(status = %raw.status, "C-CEX answered with a non-success status");
    }

    if raw.body.contains(MAINTENANCE_MARKER) {
        warn!("C-CEX is in maintenance mode");
        return Err(CcexError::ExchangeUnavailable { message: raw.body });
    }

    let data: Value = match serde_json::from_str(&raw.body) {
        Ok(data) => data,
        Err(source) => {
            return Err(CcexError::MalformedResponse {
                source,
                response: Box::new(raw),
            })
        }
    };

    match style {
        CallStyle::Ticker => Ok(data),
        CallStyle::Api => unwrap_envelope(data),
    }
}

/// Unwrap a `{success, message, result}` envelope.
fn unwrap_envelope(data: Value) -> Result<Value> {
    if data.get("success") != Some(&Value::Bool(true)) {
        let message = match data.get("message") {
            Some(Value::String(message)) => message.clone(),
            None | Some(Value::Null) => UNKNOWN_ERROR.to_string(),
            Some(other) => other.to_string(),
        };
        warn!(message = %message, "C-CEX rejected the call");
        return Err(CcexError::ApiRejected {
            message,
            body: data,
        });
    }

    match data {
        Value::Object(mut envelope) => Ok(envelope.remove("result").unwrap_or(Value::Null)),
        _ => Ok(Value::Null),
    }
}

/// Take `field` out of an object payload, `Null` when it is missing.
pub fn extract(payload: Value, field: &str) -> Value {
    match payload {
        Value::Object(mut map) => map.remove(field).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use reqwest::StatusCode;
    use serde_json::json;

    fn ok(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::OK, body)
    }

    #[test]
    fn test_success_envelope_returns_result() {
        let payload = normalize(ok(r#"{"success": true, "result": {"x": 1}}"#), CallStyle::Api)
            .unwrap();
        assert_eq!(payload, json!({"x": 1}));
    }

    #[test]
    fn test_success_without_result_is_null() {
        let payload = normalize(ok(r#"{"success": true}"#), CallStyle::Api).unwrap();
        assert_eq!(payload, Value::Null);
    }

    #[test]
    fn test_rejection_carries_message_and_body() {
        let err = normalize(ok(r#"{"success": false, "message": "bad nonce"}"#), CallStyle::Api)
            .unwrap_err();
        match err {
            CcexError::ApiRejected { message, body } => {
                assert_eq!(message, "bad nonce");
                assert_eq!(body, json!({"success": false, "message": "bad nonce"}));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejection_without_message() {
        let err = normalize(ok(r#"{"success": false}"#), CallStyle::Api).unwrap_err();
        assert!(matches!(err, CcexError::ApiRejected { ref message, .. } if message == "Unknown error"));

        let err = normalize(ok(r#"{"success": false, "message": null}"#), CallStyle::Api)
            .unwrap_err();
        assert!(matches!(err, CcexError::ApiRejected { ref message, .. } if message == "Unknown error"));
    }

    #[test]
    fn test_rejection_with_non_string_message() {
        let err = normalize(ok(r#"{"success": false, "message": 42}"#), CallStyle::Api)
            .unwrap_err();
        assert!(matches!(err, CcexError::ApiRejected { ref message, .. } if message == "42"));
    }

    #[test]
    fn test_success_must_be_exactly_true() {
        for body in [
            r#"{"success": "true", "result": 1}"#,
            r#"{"success": 1, "result": 1}"#,
            r#"{"result": 1}"#,
            r#"[1, 2, 3]"#,
        ] {
            let err = normalize(ok(body), CallStyle::Api).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ApiRejected, "body: {}", body);
        }
    }

    #[test]
    fn test_maintenance_page() {
        let body = "<html><body>Site is under Maintenance, back soon</body></html>";
        for style in [CallStyle::Api, CallStyle::Ticker] {
            let err = normalize(ok(body), style).unwrap_err();
            match err {
                CcexError::ExchangeUnavailable { message } => assert_eq!(message, body),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_maintenance_checked_regardless_of_status() {
        let raw = RawResponse::new(StatusCode::SERVICE_UNAVAILABLE, "Maintenance");
        let err = normalize(raw, CallStyle::Api).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExchangeUnavailable);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        for style in [CallStyle::Api, CallStyle::Ticker] {
            let err = normalize(ok("not valid json"), style).unwrap_err();
            match err {
                CcexError::MalformedResponse { response, .. } => {
                    assert_eq!(response.body, "not valid json");
                    assert_eq!(response.status, StatusCode::OK);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_ticker_returned_verbatim() {
        let body = r#"{"ticker": {"high": 0.016, "low": 0.01560006}}"#;
        let payload = normalize(ok(body), CallStyle::Ticker).unwrap();
        assert_eq!(payload, json!({"ticker": {"high": 0.016, "low": 0.01560006}}));
    }

    #[test]
    fn test_ticker_with_success_false_is_not_rejected() {
        let payload = normalize(ok(r#"{"success": false}"#), CallStyle::Ticker).unwrap();
        assert_eq!(payload, json!({"success": false}));
    }

    #[test]
    fn test_extract() {
        assert_eq!(extract(json!({"uuid": "2137716"}), "uuid"), json!("2137716"));
        assert_eq!(extract(json!({"other": 1}), "uuid"), Value::Null);
        assert_eq!(extract(Value::Null, "uuid"), Value::Null);
    }
}
