/// Backend chat client: one JSON POST per question over the browser fetch API
use crate::chat_data::{ChatRequest, ChatResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Default chat endpoint of the local RAG backend
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

/// Error type for all backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Network-level failure or an unusable browser environment
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success HTTP status
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// JSON serialization / deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client for the backend chat endpoint. The endpoint is fixed at
/// construction time; no retries, no timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendClient {
    endpoint: String,
}

impl BackendClient {
    pub fn new(endpoint: impl Into<String>) -> BackendClient {
        BackendClient {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one question about a video and return the answer text.
    /// An absent or empty answer field resolves to the fixed fallback.
    pub async fn ask(&self, video_id: &str, question: &str) -> Result<String, BackendError> {
        let payload = serde_json::to_string(&ChatRequest {
            video_id: video_id.to_string(),
            question: question.to_string(),
        })?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&payload));

        let request =
            Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| BackendError::Transport("no window object".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(BackendError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| BackendError::Transport("response body is not text".to_string()))?;

        interpret_body(&body)
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        BackendClient::new(DEFAULT_ENDPOINT)
    }
}

/// Interpret a successful response body. Separated from the fetch so the
/// wire contract is testable without a browser.
fn interpret_body(body: &str) -> Result<String, BackendError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    Ok(response.answer_or_fallback())
}

fn js_error(value: JsValue) -> BackendError {
    BackendError::Transport(format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_data::FALLBACK_ANSWER;

    #[test]
    fn test_interpret_body_with_answer() {
        assert_eq!(interpret_body(r#"{"answer": "42"}"#).unwrap(), "42");
    }

    #[test]
    fn test_interpret_body_without_answer() {
        assert_eq!(interpret_body("{}").unwrap(), FALLBACK_ANSWER);
        assert_eq!(interpret_body(r#"{"answer": ""}"#).unwrap(), FALLBACK_ANSWER);
        assert_eq!(interpret_body(r#"{"answer": null}"#).unwrap(), FALLBACK_ANSWER);
    }

    #[test]
    fn test_interpret_body_malformed() {
        assert!(matches!(
            interpret_body("not json"),
            Err(BackendError::Serialization(_))
        ));
        assert!(matches!(
            interpret_body(""),
            Err(BackendError::Serialization(_))
        ));
    }

    #[test]
    fn test_status_error_display() {
        let err = BackendError::Status(500);
        assert_eq!(err.to_string(), "backend returned HTTP 500");
    }

    #[test]
    fn test_client_endpoint() {
        assert_eq!(BackendClient::default().endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(
            BackendClient::new("http://localhost:9000/chat").endpoint(),
            "http://localhost:9000/chat"
        );
    }
}
