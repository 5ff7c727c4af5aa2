//! Greeting API client
//!
//! One request, one payload. The HTTP exchange sits behind [`Transport`] so
//! the decode and error rules can be driven without a browser.

use gloo_net::http::Request;
use serde::Deserialize;

/// Shown when a failure carries no description of its own.
pub const FALLBACK_ERROR: &str = "Failed to fetch data from API";

/// Payload of `GET /api/hello`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String, // ISO-8601, as sent by the backend
    pub version: String,
}

impl GreetingResponse {
    fn validate(&self) -> Result<(), ApiError> {
        let fields = [
            ("message", &self.message),
            ("timestamp", &self.timestamp),
            ("version", &self.version),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ApiError::DecodeFailed(format!(
                    "greeting response has an empty `{}` field",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error! status: {status}")]
    RequestFailed { status: u16 },

    #[error("{0}")]
    DecodeFailed(String),

    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// Text for the error panel.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            text
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // `message` only; Display would prepend the JS error name
            gloo_net::Error::JsError(e) => ApiError::Network(e.message),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError>;
}

/// Browser `fetch` via gloo-net.
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let resp = Request::get(url).send().await?;
        let status = resp.status();

        // Error bodies are never shown, so don't bother reading them.
        if !resp.ok() {
            return Ok(RawResponse {
                status,
                body: String::new(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::DecodeFailed(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Turn a completed exchange into a greeting.
pub fn decode_greeting(raw: &RawResponse) -> Result<GreetingResponse, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::RequestFailed { status: raw.status });
    }

    let greeting: GreetingResponse =
        serde_json::from_str(&raw.body).map_err(|e| ApiError::DecodeFailed(e.to_string()))?;
    greeting.validate()?;
    Ok(greeting)
}

pub async fn fetch_greeting<T: Transport>(
    transport: &T,
    url: &str,
) -> Result<GreetingResponse, ApiError> {
    let raw = transport.get(url).await?;
    decode_greeting(&raw)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;

    pub(crate) const HELLO_BODY: &str =
        r#"{"message":"Hello","timestamp":"2025-01-01T00:00:00Z","version":"1.0"}"#;

    /// In-memory backend for driving the fetch pipeline.
    pub(crate) enum MockBackend {
        Respond { status: u16, body: &'static str },
        Refuse(&'static str),
    }

    impl Transport for MockBackend {
        async fn get(&self, _url: &str) -> Result<RawResponse, ApiError> {
            match self {
                MockBackend::Respond { status, body } => Ok(RawResponse {
                    status: *status,
                    body: body.to_string(),
                }),
                MockBackend::Refuse(reason) => Err(ApiError::Network(reason.to_string())),
            }
        }
    }

    fn fetch(backend: MockBackend) -> Result<GreetingResponse, ApiError> {
        block_on(fetch_greeting(&backend, "http://localhost:8000/api/hello"))
    }

    #[test]
    fn ok_response_decodes_all_fields() {
        let greeting = fetch(MockBackend::Respond { status: 200, body: HELLO_BODY }).unwrap();
        assert_eq!(greeting.message, "Hello");
        assert_eq!(greeting.timestamp, "2025-01-01T00:00:00Z");
        assert_eq!(greeting.version, "1.0");
    }

    #[test]
    fn any_2xx_counts_as_success() {
        assert!(fetch(MockBackend::Respond { status: 203, body: HELLO_BODY }).is_ok());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"message":"Hi","timestamp":"2025-12-26T10:00:00","version":"1.0.0","docs":"/docs"}"#;
        let greeting = fetch(MockBackend::Respond { status: 200, body }).unwrap();
        assert_eq!(greeting.version, "1.0.0");
    }

    #[test]
    fn server_error_carries_status() {
        let err = fetch(MockBackend::Respond { status: 500, body: "boom" }).unwrap_err();
        assert_eq!(err, ApiError::RequestFailed { status: 500 });
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn redirect_status_is_not_success() {
        let err = fetch(MockBackend::Respond { status: 304, body: "" }).unwrap_err();
        assert_eq!(err, ApiError::RequestFailed { status: 304 });
    }

    #[test]
    fn non_json_body_is_decode_failure() {
        let err = fetch(MockBackend::Respond { status: 200, body: "<html>nope</html>" }).unwrap_err();
        assert!(matches!(err, ApiError::DecodeFailed(_)));
    }

    #[test]
    fn missing_field_is_decode_failure() {
        let body = r#"{"message":"Hello","version":"1.0"}"#;
        let err = fetch(MockBackend::Respond { status: 200, body }).unwrap_err();
        match err {
            ApiError::DecodeFailed(text) => assert!(text.contains("timestamp")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_field_is_decode_failure() {
        let body = r#"{"message":"","timestamp":"2025-01-01T00:00:00Z","version":"1.0"}"#;
        let err = fetch(MockBackend::Respond { status: 200, body }).unwrap_err();
        assert_eq!(
            err,
            ApiError::DecodeFailed("greeting response has an empty `message` field".into())
        );
    }

    #[test]
    fn refused_connection_keeps_its_description() {
        let err = fetch(MockBackend::Refuse("Failed to fetch")).unwrap_err();
        assert_eq!(err.user_message(), "Failed to fetch");
    }

    #[test]
    fn transport_error_text_is_passed_through() {
        let err = ApiError::from(gloo_net::Error::GlooError("Failed to fetch".into()));
        assert_eq!(err, ApiError::Network("Failed to fetch".into()));
        assert_eq!(err.user_message(), "Failed to fetch");
    }

    #[test]
    fn failure_without_description_uses_fallback() {
        let err = fetch(MockBackend::Refuse("")).unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR);
        assert_eq!(ApiError::DecodeFailed("  ".into()).user_message(), FALLBACK_ERROR);
    }
}
