//! The SatisfyCX API client and the request plumbing its facades share.
//!
//! # Design
//! `ScxClient` owns an immutable `ClientConfig` and a `Transport`. Facades
//! (`health()`, `content()`) borrow the client and go through the same four
//! steps: resolve an endpoint under the base path, attach the bearer token,
//! execute, then check for 200 and decode the JSON body.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::content::ContentService;
use crate::error::{ApiError, Result};
use crate::health::HealthService;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Blocking client for the SatisfyCX API.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Clone)]
pub struct ScxClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl ScxClient {
    /// Client against `base_path` (empty for production) using the default
    /// ureq transport.
    pub fn new(api_key: &str, base_path: &str) -> Result<Self> {
        Ok(Self::from_config(ClientConfig::new(api_key, base_path)?))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn health(&self) -> HealthService<'_> {
        HealthService::new(self)
    }

    pub fn content(&self) -> ContentService<'_> {
        ContentService::new(self)
    }

    /// Absolute URL for `segments` under the base path. Each segment is
    /// percent-encoded on its own, so a `/` inside one becomes `%2F`.
    ///
    /// `.` and `..` are rejected: URL normalization removes them, which
    /// would retarget the request at the parent collection.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(dot) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(ApiError::InvalidId((*dot).to_string()));
        }
        let mut url = Url::parse(self.config.base_path())?;
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::Config(format!(
                    "base path {} cannot hold path segments",
                    self.config.base_path()
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request with the bearer token attached and no body.
    pub(crate) fn request(&self, method: HttpMethod, url: Url) -> HttpRequest {
        HttpRequest {
            method,
            url: url.into(),
            headers: vec![("authorization".to_string(), self.config.bearer())],
            body: None,
            timeout: None,
        }
    }

    /// Request carrying `body` as JSON.
    pub(crate) fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        url: Url,
        body: &B,
    ) -> Result<HttpRequest> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let mut request = self.request(method, url);
        request
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        Ok(request)
    }

    pub(crate) fn execute(&self, operation: &'static str, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(operation, method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(operation, status = response.status, "received response");
        Ok(response)
    }
}

impl fmt::Debug for ScxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScxClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Require a 200 and decode the body as `T`.
pub(crate) fn decode<T: DeserializeOwned>(operation: &'static str, response: HttpResponse) -> Result<T> {
    check_status(operation, &response)?;
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

fn check_status(operation: &'static str, response: &HttpResponse) -> Result<()> {
    if response.status == 200 {
        return Ok(());
    }
    warn!(operation, status = response.status, "request failed");
    Err(ApiError::Status {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}
