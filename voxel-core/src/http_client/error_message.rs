//! Turning a non-2xx response into one human-readable message.
//!
//! The message is picked by walking [`EXTRACTION_ORDER`] and taking the first
//! strategy that yields something:
//!
//! 1. [`MessageSource::Detail`]: truthy `detail` field of a JSON body
//! 2. [`MessageSource::Message`]: truthy `message` field of a JSON body
//! 3. [`MessageSource::StatusText`]: the reason phrase, only when the body is
//!    not usable JSON
//! 4. [`MessageSource::Default`]: `HTTP error! status: <code>`
//!
//! ```rust
//! use voxel_core::http_client::normalize_error_message;
//!
//! assert_eq!(normalize_error_message(404, "Not Found", br#"{"detail":"not found"}"#), "not found");
//! assert_eq!(normalize_error_message(500, "Internal Server Error", b"<html>"), "Internal Server Error");
//! assert_eq!(normalize_error_message(500, "", b""), "HTTP error! status: 500");
//! ```

use serde_json::Value;

/// Where an error message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// `detail` field of the JSON body
    Detail,
    /// `message` field of the JSON body
    Message,
    /// HTTP reason phrase
    StatusText,
    /// `HTTP error! status: <code>`
    Default,
}

/// Order in which message sources are tried.
pub const EXTRACTION_ORDER: [MessageSource; 4] = [
    MessageSource::Detail,
    MessageSource::Message,
    MessageSource::StatusText,
    MessageSource::Default,
];

/// A failed response, with the body parsed at most once.
#[derive(Debug)]
pub struct ErrorResponse<'a> {
    status: u16,
    status_text: &'a str,
    /// `None` when the body is not JSON, or is JSON `null`.
    parsed: Option<Value>,
}

impl<'a> ErrorResponse<'a> {
    /// Parses the body; parse failures are absorbed here.
    pub fn new(status: u16, status_text: &'a str, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body)
            .ok()
            .filter(|value| !value.is_null());
        Self {
            status,
            status_text,
            parsed,
        }
    }

    /// Returns the message and the source it came from.
    pub fn resolve(&self) -> (String, MessageSource) {
        EXTRACTION_ORDER
            .iter()
            .find_map(|source| self.extract(*source).map(|message| (message, *source)))
            .unwrap_or_else(|| (self.default_message(), MessageSource::Default))
    }

    fn extract(&self, source: MessageSource) -> Option<String> {
        match source {
            MessageSource::Detail => self.field("detail"),
            MessageSource::Message => self.field("message"),
            MessageSource::StatusText => match self.parsed {
                Some(_) => None,
                None if self.status_text.is_empty() => None,
                None => Some(self.status_text.to_string()),
            },
            MessageSource::Default => Some(self.default_message()),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        let value = self.parsed.as_ref()?.get(name)?;
        if !is_truthy(value) {
            return None;
        }
        Some(match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    fn default_message(&self) -> String {
        format!("HTTP error! status: {}", self.status)
    }
}

/// JSON values that count as "present": non-empty strings, non-zero
/// numbers, `true`, and any array or object.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normalizes a failed response into a single message.
pub fn normalize_error_message(status: u16, status_text: &str, body: &[u8]) -> String {
    ErrorResponse::new(status, status_text, body).resolve().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins() {
        let body = br#"{"detail":"Project not found","message":"ignored"}"#;
        let (message, source) = ErrorResponse::new(404, "Not Found", body).resolve();
        assert_eq!(message, "Project not found");
        assert_eq!(source, MessageSource::Detail);
    }

    #[test]
    fn test_message_when_no_detail() {
        let body = br#"{"message":"Invalid token"}"#;
        let (message, source) = ErrorResponse::new(401, "Unauthorized", body).resolve();
        assert_eq!(message, "Invalid token");
        assert_eq!(source, MessageSource::Message);
    }

    #[test]
    fn test_empty_detail_falls_through_to_message() {
        let body = br#"{"detail":"","message":"fallback"}"#;
        assert_eq!(normalize_error_message(400, "Bad Request", body), "fallback");
    }

    #[test]
    fn test_json_without_known_fields_uses_default_not_status_text() {
        let body = br#"{"error":"something"}"#;
        let (message, source) = ErrorResponse::new(418, "I'm a teapot", body).resolve();
        assert_eq!(message, "HTTP error! status: 418");
        assert_eq!(source, MessageSource::Default);
    }

    #[test]
    fn test_non_json_uses_status_text() {
        let (message, source) =
            ErrorResponse::new(502, "Bad Gateway", b"<html>upstream down</html>").resolve();
        assert_eq!(message, "Bad Gateway");
        assert_eq!(source, MessageSource::StatusText);
    }

    #[test]
    fn test_non_json_without_status_text_uses_default() {
        assert_eq!(
            normalize_error_message(500, "", b""),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn test_json_null_body_treated_as_unparseable() {
        assert_eq!(
            normalize_error_message(503, "Service Unavailable", b"null"),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_structured_detail_is_serialized() {
        let body = br#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#;
        let message = normalize_error_message(422, "Unprocessable Entity", body);
        assert!(message.starts_with('['));
        assert!(message.contains("field required"));
    }

    #[test]
    fn test_scalar_json_body_uses_default() {
        assert_eq!(
            normalize_error_message(400, "Bad Request", b"\"plain string\""),
            "HTTP error! status: 400"
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(false)));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(is_truthy(&serde_json::json!(7)));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(is_truthy(&serde_json::json!([])));
    }
}
