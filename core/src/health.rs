//! Liveness check facade.

use std::time::Duration;

use tracing::info;

use crate::client::{decode, ScxClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::HealthResponse;

const CHECK: &str = "health check";

/// Health endpoints, borrowed from an `ScxClient`.
#[derive(Debug, Clone, Copy)]
pub struct HealthService<'a> {
    client: &'a ScxClient,
    timeout: Option<Duration>,
}

impl<'a> HealthService<'a> {
    pub(crate) fn new(client: &'a ScxClient) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Bound each call made through this facade by `timeout` instead of the
    /// client-wide default.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    /// `POST {base}/ping`.
    pub fn check(&self) -> Result<HealthResponse> {
        info!(base_path = %self.client.config().base_path(), "checking health");
        let request = self.build_check()?;
        self.parse_check(self.client.execute(CHECK, &request)?)
    }

    pub fn build_check(&self) -> Result<HttpRequest> {
        let url = self.client.endpoint(&["ping"])?;
        let mut request = self.client.request(HttpMethod::Post, url);
        request.timeout = self.timeout;
        Ok(request)
    }

    pub fn parse_check(&self, response: HttpResponse) -> Result<HealthResponse> {
        decode(CHECK, response)
    }
}
