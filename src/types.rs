use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::UrlRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub deletion_url: String,
    pub thumb_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub destination: String,
    pub vanity: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
    pub short: String,
    pub destination: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUrlRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FileDeleteQuery {
    pub token: String,
}

/// Listing entry for a user's short URLs. `password` collapses to whether
/// one is set, the stored value never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub short: String,
    pub destination: String,
    pub views: i64,
    pub password: bool,
}

impl From<UrlRecord> for UrlListEntry {
    fn from(row: UrlRecord) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            short: row.short,
            destination: row.destination,
            views: row.views,
            password: row.password.is_some_and(|p| !p.is_empty()),
        }
    }
}
