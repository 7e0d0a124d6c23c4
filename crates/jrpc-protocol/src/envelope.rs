use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default endpoint the client posts to when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/jrpc";

/// Request envelope sent for every call, regardless of operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Name of the remote operation.
    pub name: String,
    /// Operation-specific argument; a scalar or a mapping with named fields.
    pub arg: Value,
}

impl CallRequest {
    pub fn new(name: impl Into<String>, arg: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            arg: arg.into(),
        }
    }
}

/// Response envelope returned for every call.
///
/// Exactly one of `result`/`error` is meaningful: a truthy `error` (non-null,
/// non-empty) signals failure and `result` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl CallResponse {
    pub fn success(result: impl Into<Value>) -> Self {
        Self {
            result: result.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: Value::Null,
            error: Some(message.into()),
        }
    }

    /// Whether the envelope signals a server-reported failure.
    pub fn is_error(&self) -> bool {
        matches!(&self.error, Some(message) if !message.is_empty())
    }

    /// Unwrap the envelope into the raw result or the server's error message.
    pub fn into_result(self) -> Result<Value, String> {
        match self.error {
            Some(message) if !message.is_empty() => Err(message),
            _ => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let req = CallRequest::new("addition", json!({"a": 2.0, "b": 3.0}));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"name\":\"addition\""));
        assert!(json.contains("\"a\":2.0"));
    }

    #[test]
    fn test_request_scalar_arg() {
        let req = CallRequest::new("uppercase", "abc");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"uppercase","arg":"abc"}"#);
    }

    #[test]
    fn test_response_success_deserialization() {
        let resp: CallResponse = serde_json::from_str(r#"{"result":"ABC","error":null}"#).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.into_result().unwrap(), json!("ABC"));
    }

    #[test]
    fn test_response_error_deserialization() {
        let resp: CallResponse =
            serde_json::from_str(r#"{"result":null,"error":"division by zero"}"#).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.into_result().unwrap_err(), "division by zero");
    }

    #[test]
    fn test_empty_error_is_success() {
        // The reference client gates on truthiness, so "" never signals failure
        let resp: CallResponse = serde_json::from_str(r#"{"result":5,"error":""}"#).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.into_result().unwrap(), json!(5));
    }

    #[test]
    fn test_missing_fields_default() {
        let resp: CallResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn test_failure_constructor() {
        let resp = CallResponse::failure("boom");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"result":null,"error":"boom"}"#);
    }
}
