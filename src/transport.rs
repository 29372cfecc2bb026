//! HTTP execution layer
//!
//! Thin wrapper around reqwest: resolves endpoint paths against the
//! configured base URL, attaches the bearer token, and converts
//! transport-level failures into domain errors. Swapping the HTTP
//! implementation means replacing this module only; nothing else in the
//! crate touches reqwest request types.

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{OnefootballError, Result};
use crate::response::ApiResponse;

/// HTTP transport bound to a base URL
///
/// Holds the reqwest client (and with it the connection pool) plus the
/// resolved base URL. Cheap to clone; all methods take `&self`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    ///
    /// # Errors
    ///
    /// Returns [`OnefootballError::Network`] if the underlying HTTP client
    /// cannot be constructed (e.g. no TLS backend available).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("onefootball-network/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// GET `path` with query parameters
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        debug!("GET {}", path);
        let request = self.http.get(self.endpoint(path)?).query(query);
        self.execute(request, token).await
    }

    /// POST a JSON body to `path`
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<ApiResponse> {
        debug!("POST {}", path);
        let request = self.http.post(self.endpoint(path)?).json(body);
        self.execute(request, token).await
    }

    /// PATCH a JSON body to `path`
    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<ApiResponse> {
        debug!("PATCH {}", path);
        let request = self.http.patch(self.endpoint(path)?).json(body);
        self.execute(request, token).await
    }

    /// DELETE `path`
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<ApiResponse> {
        debug!("DELETE {}", path);
        let request = self.http.delete(self.endpoint(path)?);
        self.execute(request, token).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            OnefootballError::InvalidResponse(format!("cannot resolve endpoint {path}: {e}"))
        })
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await?;

        debug!("response status {}", status);
        Ok(ApiResponse {
            status,
            retry_after,
            body,
        })
    }
}
