//! # Gemini chat client
//!
//! [`ChatClient::get_reply`] sends one user message to the `generateContent` endpoint
//! and returns the first candidate's text.
//!
//! - Without a configured API key it returns [`UNCONFIGURED_REPLY`] and never touches
//!   the network.
//! - One POST per call. No retries, no timeout, no streaming.
//! - A non-2xx status is not an error by itself: the body is still parsed, and an error
//!   body (which has no candidates) becomes [`ChatError::NoResponse`].

use reqwest::Client;
use store::ChatConfig;
use thiserror::Error;

use crate::models::{GenerateRequest, GenerateResponse};

/// Reply used when no API key is configured.
pub const UNCONFIGURED_REPLY: &str =
    "Please configure your Gemini API key in site.toml to enable AI responses.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("No response from Gemini API")]
    NoResponse,
    #[error("Gemini API response had no text part")]
    MalformedResponse,
}

/// Client for the generative-text endpoint.
#[derive(Clone, Debug)]
pub struct ChatClient {
    config: ChatConfig,
    http: Client,
}

impl PartialEq for ChatClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    /// Ask the model for a reply to `message`.
    pub async fn get_reply(&self, message: &str) -> Result<String, ChatError> {
        if !self.is_configured() {
            tracing::debug!("No Gemini API key configured, returning canned reply");
            return Ok(UNCONFIGURED_REPLY.to_string());
        }

        let response = self
            .http
            .post(self.config.generate_url())
            .query(&[("key", self.config.api_key.trim())])
            .json(&GenerateRequest::from_message(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Gemini API returned HTTP {status}");
        }

        let body: GenerateResponse = response.json().await?;
        extract_reply(body)
    }
}

/// Pull the reply text out of a parsed response.
pub fn extract_reply(body: GenerateResponse) -> Result<String, ChatError> {
    if body.candidates.is_empty() {
        return Err(ChatError::NoResponse);
    }
    body.first_text()
        .map(str::to_string)
        .ok_or(ChatError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// One request as the mock endpoint saw it.
    #[derive(Clone, Debug)]
    struct CapturedRequest {
        call: String,
        key: Option<String>,
        body: Value,
    }

    #[derive(Clone)]
    struct MockState {
        status: StatusCode,
        reply: Value,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
    }

    fn config(api_key: &str, endpoint: &str) -> ChatConfig {
        ChatConfig {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            ..ChatConfig::default()
        }
    }

    async fn generate(
        State(state): State<MockState>,
        Path(call): Path<String>,
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        state.requests.lock().expect("requests lock").push(CapturedRequest {
            call,
            key: query.get("key").cloned(),
            body,
        });
        (state.status, Json(state.reply.clone()))
    }

    /// Start a Gemini stand-in that answers every call with `status` and `reply`.
    /// Returns the endpoint to configure and the requests it receives.
    async fn spawn_mock_server(
        status: StatusCode,
        reply: Value,
    ) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            reply,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1beta/models/{call}", post(generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server listener");
        let address: SocketAddr = listener.local_addr().expect("mock listener local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("run mock server");
        });
        (format!("http://{address}/v1beta/models"), requests)
    }

    #[tokio::test]
    async fn test_unconfigured_client_skips_network() {
        // Port 1 on localhost refuses connections, so any request would fail
        let client = ChatClient::new(config("YOUR_GEMINI_API_KEY", "http://127.0.0.1:1"));
        assert!(!client.is_configured());

        for message in ["hello", "", "<script>"] {
            let reply = client.get_reply(message).await.unwrap();
            assert_eq!(reply, UNCONFIGURED_REPLY);
        }

        let client = ChatClient::new(config("", "http://127.0.0.1:1"));
        assert_eq!(client.get_reply("hi").await.unwrap(), UNCONFIGURED_REPLY);
    }

    #[tokio::test]
    async fn test_configured_client_returns_first_candidate() {
        let reply = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Hi there!" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        let (endpoint, requests) = spawn_mock_server(StatusCode::OK, reply).await;
        let client = ChatClient::new(config("test-key", &endpoint));

        assert_eq!(client.get_reply("Hello").await.unwrap(), "Hi there!");

        let requests = requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].call, "gemini-1.5-flash:generateContent");
        assert_eq!(requests[0].key.as_deref(), Some("test-key"));
        assert_eq!(
            requests[0].body,
            json!({ "contents": [ { "parts": [ { "text": "Hello" } ] } ] })
        );
    }

    #[tokio::test]
    async fn test_error_status_without_candidates_is_no_response() {
        let reply = json!({ "error": { "code": 403, "message": "denied" } });
        let (endpoint, requests) = spawn_mock_server(StatusCode::FORBIDDEN, reply).await;
        let client = ChatClient::new(config("test-key", &endpoint));

        let err = client.get_reply("Hello").await.unwrap_err();
        assert!(matches!(err, ChatError::NoResponse));
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = ChatClient::new(config("test-key", "http://127.0.0.1:1"));
        let err = client.get_reply("Hello").await.unwrap_err();
        assert!(matches!(err, ChatError::Request(_)));
    }

    #[test]
    fn test_extract_reply() {
        assert!(matches!(
            extract_reply(GenerateResponse::default()),
            Err(ChatError::NoResponse)
        ));

        let empty_candidate: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [ {} ] })).unwrap();
        assert!(matches!(
            extract_reply(empty_candidate),
            Err(ChatError::MalformedResponse)
        ));

        let ok: GenerateResponse = serde_json::from_value(json!({
            "candidates": [ { "content": { "parts": [ { "text": "yes" } ] } } ]
        }))
        .unwrap();
        assert_eq!(extract_reply(ok).unwrap(), "yes");
    }
}
