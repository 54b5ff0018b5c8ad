use reqwest::header::{HeaderValue, COOKIE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin wrapper around `reqwest::Client` bound to the backend base URL.
///
/// Every request carries a fresh UUID v7 `X-Request-Id` and, when
/// configured, the session cookie. Responses are returned as raw JSON so
/// each feature client can decode its own payload shape.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, with `query` pairs URL-encoded
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }
        url
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request_id = Uuid::now_v7().to_string();
        let mut builder = self
            .client
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id);

        if let Some(cookie) = &self.session_cookie {
            match HeaderValue::from_str(cookie) {
                Ok(value) => builder = builder.header(COOKIE, value),
                Err(_) => tracing::warn!("Session cookie contains invalid header characters; not sent"),
            }
        }

        builder
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path, query);
        tracing::debug!("GET {}", url);

        let response = self.request(Method::GET, &url).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", url, e);
            AppError::Http(e)
        })?;

        Self::read_json(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.url(path, &[]);
        tracing::debug!("POST {}", url);

        let response = self
            .request(Method::POST, &url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request to {} failed: {}", url, e);
                AppError::Http(e)
            })?;

        Self::read_json(response).await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value> {
        let url = self.url(path, &[]);
        tracing::debug!("POST (multipart) {}", url);

        let response = self
            .request(Method::POST, &url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request to {} failed: {}", url, e);
                AppError::Http(e)
            })?;

        Self::read_json(response).await
    }

    /// The backend reports application errors in-band, so a JSON body is
    /// returned whatever the status; a non-JSON body is a transport failure.
    async fn read_json(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.map_err(AppError::Http)?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                if !status.is_success() {
                    tracing::warn!("Backend answered HTTP {} with a JSON body", status);
                }
                Ok(value)
            }
            Err(_) if !status.is_success() => {
                tracing::error!("Backend error: HTTP {} - {}", status, body);
                Err(AppError::Transport(format!("HTTP {} - {}", status, body)))
            }
            Err(e) => {
                tracing::error!("Failed to parse backend response: {}", e);
                Err(AppError::Decode(format!("Failed to parse response: {}", e)))
            }
        }
    }
}
