//! Wire DTOs for the SatisfyCX content API.
//!
//! # Design
//! These types mirror the server's JSON but are defined independently of the
//! mock-server crate; the integration tests catch schema drift. The server
//! sends `null` for empty lists, so list fields decode `null` as empty.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ApiError, Result};

/// Kind of a content library entry.
///
/// Labels outside the known set, including the empty label the server sends
/// for an unset type, are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Article")]
    Article,
    #[serde(rename = "Author Persona")]
    AuthorPersona,
    #[serde(rename = "Audience Persona")]
    AudiencePersona,
    #[serde(rename = "Keywords list")]
    KeywordList,
    #[serde(rename = "Brand Entity")]
    BrandEntity,
    #[serde(rename = "Competitor Entity")]
    CompetitorEntity,
    #[serde(rename = "Third Party Entity")]
    ThirdPartyEntity,
    #[serde(untagged)]
    Other(String),
}

/// A content record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// External references describing the same thing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub same_as: Vec<String>,
    /// External references this content must not be confused with.
    #[serde(default, deserialize_with = "null_as_default")]
    pub different_from: Vec<String>,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination filters for `GET /content`. Values `<= 0` are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentListRequest {
    pub page: i64,
    pub page_size: i64,
}

impl ContentListRequest {
    pub fn page(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub library: Vec<Content>,
}

/// Partial create-or-update payload for `PATCH /content/{id}`.
///
/// Only the fields that are `Some` are sent; the server leaves the rest
/// untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentManageRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub different_from: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_source_url: Option<String>,
}

impl ContentManageRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a manage call. Sent as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ContentManageStatus {
    Created = 1,
    Updated = 2,
    Deleted = 3,
    Error = 4,
}

impl From<ContentManageStatus> for u8 {
    fn from(status: ContentManageStatus) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for ContentManageStatus {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, String> {
        match value {
            1 => Ok(ContentManageStatus::Created),
            2 => Ok(ContentManageStatus::Updated),
            3 => Ok(ContentManageStatus::Deleted),
            4 => Ok(ContentManageStatus::Error),
            other => Err(format!("unknown content manage status {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentManageResponse {
    pub id: String,
    pub status: ContentManageStatus,
}

/// Liveness check result.
///
/// Extra fields are ignored, so a `{status, message, data}` envelope decodes
/// here as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Generic `{status, message, data}` wrapper with an open payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Decode the payload into a concrete type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.data).map_err(ApiError::Decode)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
