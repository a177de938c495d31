use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use clip_datastore::{DataStore, Video};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::{pacing::Pacer, yt::TranscriptSource, Generate, SummaryPipeline};

/// Shared state for the HTTP surface: the video store plus one
/// summarization pipeline reused across requests.
pub struct AppState<D, G, T, P>
where
    D: DataStore + Send + Sync + 'static,
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    pub store: D,
    pub pipeline: SummaryPipeline<G, T, P>,
}

impl<D, G, T, P> AppState<D, G, T, P>
where
    D: DataStore + Send + Sync + 'static,
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    pub fn new(store: D, pipeline: SummaryPipeline<G, T, P>) -> Self {
        Self { store, pipeline }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub channel: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router<D, G, T, P>(state: Arc<AppState<D, G, T, P>>) -> Router
where
    D: DataStore + Send + Sync + 'static,
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/track", post(track_video::<D, G, T, P>))
        .route("/api/videos", get(list_videos::<D, G, T, P>))
        .layer(cors)
        .with_state(state)
}

/// Saves the tracked video, then runs the chunked summarization pipeline
/// and persists the digest. A missing transcript still saves the video.
pub async fn track_video<D, G, T, P>(
    State(state): State<Arc<AppState<D, G, T, P>>>,
    Json(req): Json<TrackRequest>,
) -> Result<(StatusCode, Json<TrackResponse>), (StatusCode, Json<ErrorResponse>)>
where
    D: DataStore + Send + Sync + 'static,
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    tracing::info!(video_id = %req.video_id, title = %req.title, "Tracking video");

    let video = Video {
        video_id: req.video_id.clone(),
        title: req.title.clone(),
        url: req.url.clone(),
        channel: req.channel.clone(),
        timestamp: req.timestamp,
        summary: None,
        tldr: None,
    };

    state
        .store
        .insert_video(&video)
        .await
        .map_err(track_error)?;

    let digest = state
        .pipeline
        .summarize_video(&req.video_id)
        .await
        .map_err(track_error)?;

    match digest {
        Some(digest) => {
            state
                .store
                .update_summary(&req.video_id, &digest.full_summary, &digest.tldr)
                .await
                .map_err(track_error)?;

            tracing::info!(video_id = %req.video_id, "Summary added");
            Ok((
                StatusCode::OK,
                Json(TrackResponse {
                    message: "Video saved and summarized.".into(),
                    video_id: Some(req.video_id),
                    summary: Some(digest.full_summary),
                    tldr: Some(digest.tldr),
                }),
            ))
        }
        None => {
            tracing::warn!(video_id = %req.video_id, "No transcript available");
            Ok((
                StatusCode::OK,
                Json(TrackResponse {
                    message: "Video saved, but transcript not available.".into(),
                    video_id: Some(req.video_id),
                    summary: None,
                    tldr: None,
                }),
            ))
        }
    }
}

pub async fn list_videos<D, G, T, P>(
    State(state): State<Arc<AppState<D, G, T, P>>>,
) -> Result<Json<Vec<Video>>, (StatusCode, Json<ErrorResponse>)>
where
    D: DataStore + Send + Sync + 'static,
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    let videos = state.store.list_videos().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to fetch videos");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to fetch videos".into(),
            }),
        )
    })?;

    Ok(Json(videos))
}

fn track_error(e: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = ?e, "Failed to process video");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to process video.".into(),
        }),
    )
}
