//! Content library facade: list, get, manage and the library listing.
//!
//! Every operation follows the same failure policy: a non-200 status becomes
//! `ApiError::Status` holding the raw body, transport and decode failures are
//! returned unchanged.

use std::time::Duration;

use crate::client::{decode, ScxClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    Content, ContentListRequest, ContentListResponse, ContentManageRequest,
    ContentManageResponse, Envelope,
};

const LIST: &str = "content list";
const GET: &str = "content get";
const MANAGE: &str = "content manage";
const LIBRARY: &str = "content library";

/// Content endpoints, borrowed from an `ScxClient`.
#[derive(Debug, Clone, Copy)]
pub struct ContentService<'a> {
    client: &'a ScxClient,
    timeout: Option<Duration>,
}

impl<'a> ContentService<'a> {
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

    /// `GET {base}/content`, paginated when `page`/`page_size` are positive.
    pub fn list(&self, request: &ContentListRequest) -> Result<ContentListResponse> {
        let req = self.build_list(request)?;
        self.parse_list(self.client.execute(LIST, &req)?)
    }

    /// `GET {base}/content/{id}`.
    pub fn get(&self, id: &str) -> Result<Content> {
        let req = self.build_get(id)?;
        self.parse_get(self.client.execute(GET, &req)?)
    }

    /// Create or update a content item with `PATCH {base}/content/{id}`.
    pub fn manage(&self, request: &ContentManageRequest) -> Result<ContentManageResponse> {
        let req = self.build_manage(request)?;
        self.parse_manage(self.client.execute(MANAGE, &req)?)
    }

    /// `GET {base}/content/library`, returned as the generic envelope.
    pub fn library(&self) -> Result<Envelope> {
        let req = self.build_library()?;
        self.parse_library(self.client.execute(LIBRARY, &req)?)
    }

    pub fn build_list(&self, request: &ContentListRequest) -> Result<HttpRequest> {
        let mut url = self.client.endpoint(&["content"])?;
        let mut query = Vec::new();
        if request.page > 0 {
            query.push(("page", request.page.to_string()));
        }
        if request.page_size > 0 {
            query.push(("page_size", request.page_size.to_string()));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(self.with_deadline(self.client.request(HttpMethod::Get, url)))
    }

    pub fn build_get(&self, id: &str) -> Result<HttpRequest> {
        let url = self.client.endpoint(&["content", id])?;
        Ok(self.with_deadline(self.client.request(HttpMethod::Get, url)))
    }

    pub fn build_manage(&self, request: &ContentManageRequest) -> Result<HttpRequest> {
        let url = self.client.endpoint(&["content", request.id.as_str()])?;
        let request = self.client.json_request(HttpMethod::Patch, url, request)?;
        Ok(self.with_deadline(request))
    }

    pub fn build_library(&self) -> Result<HttpRequest> {
        let url = self.client.endpoint(&["content", "library"])?;
        Ok(self.with_deadline(self.client.request(HttpMethod::Get, url)))
    }

    fn with_deadline(&self, mut request: HttpRequest) -> HttpRequest {
        request.timeout = self.timeout;
        request
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<ContentListResponse> {
        decode(LIST, response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Content> {
        decode(GET, response)
    }

    pub fn parse_manage(&self, response: HttpResponse) -> Result<ContentManageResponse> {
        decode(MANAGE, response)
    }

    pub fn parse_library(&self, response: HttpResponse) -> Result<Envelope> {
        decode(LIBRARY, response)
    }
}
