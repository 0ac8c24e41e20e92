//! Blocking client for the SatisfyCX content API.
//!
//! # Overview
//! `ScxClient` holds the base path, the API key and an HTTP transport. Two
//! facades hang off it: `health()` for the liveness check and `content()`
//! for listing, fetching and managing content library entries. Every
//! request carries the API key as a bearer token.
//!
//! # Design
//! - Each operation is split into `build_*` (produces an `HttpRequest`),
//!   execution through a `Transport`, and `parse_*` (consumes an
//!   `HttpResponse`). The one-call methods chain the three.
//! - `UreqTransport` is the default transport; `ScxClient::with_transport`
//!   swaps it out.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - The crate emits `tracing` events and never installs a subscriber.
//!
//! ```no_run
//! use scx_core::{ContentListRequest, ScxClient};
//!
//! let client = ScxClient::new("my-api-key", "")?;
//! client.health().check()?;
//! let listing = client.content().list(&ContentListRequest::page(1, 20))?;
//! for item in &listing.library {
//!     println!("{}: {}", item.id, item.title);
//! }
//! # Ok::<(), scx_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod health;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ScxClient;
pub use config::{ClientConfig, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT};
pub use content::ContentService;
pub use error::{ApiError, Result};
pub use health::HealthService;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Content, ContentListRequest, ContentListResponse, ContentManageRequest,
    ContentManageResponse, ContentManageStatus, ContentType, Envelope, HealthResponse,
};
