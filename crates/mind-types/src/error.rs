use serde_json::Value;
use thiserror::Error;

/// Failure of a request against the backend API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("validation failed: {message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-2xx response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(error_message)
            .unwrap_or_default();

        match status {
            401 => ApiError::Unauthorized,
            400 => ApiError::Validation {
                fields: parsed.as_ref().map(field_messages).unwrap_or_default(),
                message,
            },
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Text to show the user; the backend's own message wins when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation { message, fields } => {
                if !message.is_empty() {
                    message.clone()
                } else if !fields.is_empty() {
                    fields.join(" ")
                } else {
                    fallback.to_string()
                }
            }
            ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::Server { message, .. }
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }

    /// Every message the backend reported, for forms that list them all.
    pub fn messages(&self, fallback: &str) -> Vec<String> {
        match self {
            ApiError::Validation { fields, .. } if !fields.is_empty() => fields.clone(),
            other => vec![other.user_message(fallback)],
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn error_message(body: &Value) -> Option<String> {
    ["error", "detail"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Flattens `{"errors": {"field": ["msg", ...] | "msg"}}` into a message list.
fn field_messages(body: &Value) -> Vec<String> {
    let Some(errors) = body.get("errors").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut messages = Vec::new();
    for value in errors.values() {
        match value {
            Value::Array(items) => messages.extend(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string),
            ),
            Value::String(message) => messages.push(message.clone()),
            _ => {}
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_ignores_body() {
        assert_eq!(
            ApiError::from_response(401, r#"{"detail":"token expired"}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn validation_collects_field_errors() {
        let err = ApiError::from_response(
            400,
            r#"{"errors":{"email":["already registered"],"password":"too common"}}"#,
        );
        assert_eq!(
            err.messages("fallback"),
            vec!["already registered".to_string(), "too common".to_string()]
        );
        assert_eq!(err.user_message("fallback"), "already registered too common");
    }

    #[test]
    fn backend_error_field_is_preferred() {
        let err = ApiError::from_response(404, r#"{"error":"Invite link has expired"}"#);
        assert_eq!(err.user_message("Invalid token"), "Invite link has expired");

        let err = ApiError::from_response(403, r#"{"error":"admins only"}"#);
        assert_eq!(err, ApiError::Forbidden("admins only".into()));
    }

    #[test]
    fn non_json_body_falls_back() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: String::new()
            }
        );
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Try again"),
            "Try again"
        );
    }
}
