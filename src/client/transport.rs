use std::sync::Arc;

use tracing::debug;

use crate::core::error::{BreachCheckError, Result};
use crate::utils::http::{HttpClient, HttpResponse};

/// Body of a successful response.
///
/// Almost every endpoint returns JSON; the pwned-passwords range endpoint
/// returns plain text, so a failed JSON parse falls back to `Text`.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

/// Minimal GET-only REST client bound to one base URL.
///
/// `get` returns `Ok(None)` for HTTP 404 — callers must treat that as
/// "no data", never as failure. Any other non-2xx status is an error.
pub struct RestClient {
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
    http: Arc<HttpClient>,
}

impl RestClient {
    pub fn new(base_url: &str, api_key: Option<String>, user_agent: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            user_agent: user_agent.to_string(),
            http: Arc::new(HttpClient::new()),
        }
    }

    /// Perform a GET request against `{base_url}{endpoint}`.
    pub async fn get(&self, endpoint: &str) -> Result<Option<Payload>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        // curl is sync, so run the transfer on the blocking pool
        let response = tokio::task::spawn_blocking({
            let http = Arc::clone(&self.http);
            let url = url.clone();
            let user_agent = self.user_agent.clone();
            let api_key = self.api_key.clone();
            move || {
                let mut headers: Vec<(&str, &str)> = vec![("user-agent", user_agent.as_str())];
                if let Some(ref key) = api_key {
                    headers.push(("hibp-api-key", key.as_str()));
                }
                http.get(&url, &headers)
            }
        })
        .await
        .map_err(|e| BreachCheckError::Unknown(format!("Task join error: {}", e)))??;

        interpret_response(&url, &response)
    }
}

/// Map a raw response onto the absent / data / error split.
fn interpret_response(url: &str, response: &HttpResponse) -> Result<Option<Payload>> {
    if response.is_not_found() {
        return Ok(None);
    }

    if !response.is_success() {
        return Err(BreachCheckError::Http(format!(
            "HTTP {} for {}",
            response.status_code, url
        )));
    }

    // Try JSON first, fall back to plain text
    match serde_json::from_slice(&response.body) {
        Ok(value) => Ok(Some(Payload::Json(value))),
        Err(_) => Ok(Some(Payload::Text(response.text()?))),
    }
}
