// ============================================================================
// Console Infrastructure - Remote API Client
// File: crates/console-infrastructure/src/remote/client.rs
// ============================================================================
//! Shared HTTP client for the remote console API

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use console_core::error::DomainError;
use console_shared::config::RemoteSettings;

#[derive(Debug, Clone)]
pub struct RemoteApiClient {
    http: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl RemoteApiClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            DomainError::InternalError(format!("Invalid remote base URL {}: {}", settings.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::InternalError(format!(
                "Remote base URL {} cannot carry a path",
                settings.base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            api_token: settings.api_token.clone(),
        })
    }

    /// Appends each segment to the base path, percent-encoded as a single
    /// segment. Ids can never reach another resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
            warn!("Rejected remote path segment {:?}", bad);
            return Err(DomainError::ValidationError(format!("Invalid identifier: {:?}", bad)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::InternalError("Remote base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);

        let builder = self.http.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, method: &Method, path: &str, builder: RequestBuilder) -> Result<Response, DomainError> {
        builder.send().await.map_err(|e| {
            error!("Remote API request {} {} failed: {}", method, path, e);
            DomainError::Upstream(format!("{} {}: {}", method, path, e))
        })
    }

    fn status_error(method: &Method, path: &str, status: StatusCode) -> DomainError {
        error!("Remote API {} {} returned {}", method, path, status);
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
                DomainError::ValidationError(format!("{} {} rejected: {}", method, path, status))
            }
            _ => DomainError::Upstream(format!("{} {} returned {}", method, path, status)),
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, DomainError> {
        response.json::<T>().await.map_err(|e| {
            error!("Invalid payload from {}: {}", path, e);
            DomainError::Upstream(format!("Invalid payload from {}: {}", path, e))
        })
    }

    /// GET returning `None` on 404
    pub async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, DomainError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let response = self
            .send(&Method::GET, &path, self.request(Method::GET, url))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Self::decode(&path, response).await.map(Some),
            status => Err(Self::status_error(&Method::GET, &path, status)),
        }
    }

    /// Request with a JSON body; 404 maps to `Ok(None)`
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Option<T>, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let builder = self.request(method.clone(), url).json(body);
        let response = self.send(&method, &path, builder).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Self::decode(&path, response).await.map(Some),
            status => Err(Self::status_error(&method, &path, status)),
        }
    }

    /// Request without a response body; returns false on 404
    pub async fn send_empty(&self, method: Method, segments: &[&str]) -> Result<bool, DomainError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let response = self
            .send(&method, &path, self.request(method.clone(), url))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(Self::status_error(&method, &path, status)),
        }
    }
}
