use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked YouTube video and its summarization state.
///
/// `summary` and `tldr` are `None` until the summarization pipeline has
/// run for the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub channel: String,
    pub timestamp: DateTime<Utc>,
    pub summary: Option<String>,
    pub tldr: Option<String>,
}
