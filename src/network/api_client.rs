use std::fmt;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestInit, RequestMode, Response};

use crate::models::StudentResult;

/// Error taxonomy for the one read endpoint. All variants are handled the
/// same way by the views (log, empty collection); keeping them distinct
/// makes the logs useful.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The fetch promise rejected: network failure, CORS, or an abort.
    Network(String),
    /// The server answered with a non-2xx status.
    Http { status: u16, status_text: String },
    /// The body did not deserialize into the expected record shape.
    MalformedPayload(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "network error: {}", detail),
            FetchError::Http { status, status_text } => {
                write!(f, "request failed: {} {}", status, status_text)
            }
            FetchError::MalformedPayload(detail) => {
                write!(f, "malformed results payload: {}", detail)
            }
        }
    }
}

// REST API client for the portal backend.
pub struct ApiClient;

impl ApiClient {
    // Get the base URL for API calls
    fn api_base_url() -> String {
        super::get_api_base_url()
    }

    /// Fetch the results collection for one student. The caller supplies the
    /// bearer credential read by the session guard and, optionally, an abort
    /// signal bound to the view's lifetime.
    pub async fn get_student_results(
        student_id: &str,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<StudentResult>, FetchError> {
        let url = format!(
            "{}/results?student_id={}",
            Self::api_base_url(),
            student_id
        );
        let body = Self::fetch_json(&url, "GET", token, signal).await?;
        parse_results(&body)
    }

    // Helper to make authenticated fetch requests and return the body text.
    async fn fetch_json(
        url: &str,
        method: &str,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<String, FetchError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        opts.set_signal(signal);

        let headers = Headers::new().map_err(js_err)?;
        headers
            .append("Authorization", &format!("Bearer {}", token))
            .map_err(js_err)?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;

        let window = web_sys::window().ok_or_else(|| FetchError::Network("no global window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;

        if !resp.ok() {
            return Err(FetchError::Http {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

/// Schema-validation boundary: strict deserialization of the results body.
/// A shape mismatch is a typed error, never an unguarded field access later.
pub fn parse_results(body: &str) -> Result<Vec<StudentResult>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))
}

fn js_err(value: JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", value))
}
