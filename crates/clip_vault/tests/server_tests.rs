mod mocks;

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use clip_vault::{
    pacing::NoPause,
    server::{self, AppState, TrackRequest},
    SummaryPipelineBuilder,
};
use mocks::{
    datastore::MockDataStore, generator::MockGenerator, transcripts::MockTranscriptSource,
};

type TestState = AppState<MockDataStore, MockGenerator, MockTranscriptSource, NoPause>;

fn build_state(
    store: MockDataStore,
    generator: MockGenerator,
    transcripts: MockTranscriptSource,
) -> Arc<TestState> {
    let pipeline = SummaryPipelineBuilder::new()
        .generator(generator)
        .transcripts(transcripts)
        .pacer(NoPause)
        .words_per_chunk(1000)
        .build();

    Arc::new(AppState::new(store, pipeline))
}

fn track_request(video_id: &str) -> TrackRequest {
    TrackRequest {
        video_id: video_id.to_string(),
        title: "A talk about Rust".to_string(),
        url: format!("https://www.youtube.com/watch?v={video_id}"),
        channel: "RustConf".to_string(),
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn test_track_saves_video_and_summary() {
    let store = MockDataStore::default();
    let generator = MockGenerator::new("bullet");
    let transcripts = MockTranscriptSource::new("a transcript worth summarizing");

    let inserted = store.inserted.clone();
    let updates = store.updates.clone();

    let state = build_state(store, generator, transcripts);
    let (status, Json(resp)) = server::track_video(State(state), Json(track_request("abc123")))
        .await
        .expect("Track should succeed");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.message, "Video saved and summarized.");
    assert_eq!(resp.video_id.as_deref(), Some("abc123"));
    assert_eq!(resp.summary.as_deref(), Some("bullet 0"));
    assert_eq!(resp.tldr.as_deref(), Some("bullet 1"));

    let inserted = inserted.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert!(inserted[0].summary.is_none(), "Insert happens before summarization");

    let updates = updates.lock().unwrap();
    assert_eq!(
        updates.as_slice(),
        [(
            "abc123".to_string(),
            "bullet 0".to_string(),
            "bullet 1".to_string()
        )]
    );
}

#[tokio::test]
async fn test_track_without_transcript_still_saves_video() {
    let store = MockDataStore::default();
    let generator = MockGenerator::new("bullet");
    let transcripts = MockTranscriptSource::unavailable();

    let inserted = store.inserted.clone();
    let updates = store.updates.clone();
    let generation_calls = generator.calls.clone();

    let state = build_state(store, generator, transcripts);
    let (status, Json(resp)) = server::track_video(State(state), Json(track_request("abc123")))
        .await
        .expect("Missing transcript is not a request failure");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.message, "Video saved, but transcript not available.");
    assert!(resp.summary.is_none());
    assert!(resp.tldr.is_none());

    assert_eq!(inserted.lock().unwrap().len(), 1);
    assert!(updates.lock().unwrap().is_empty());
    assert!(generation_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_track_insert_failure_returns_500() {
    let store = MockDataStore::failing("Connection refused");
    let generator = MockGenerator::new("bullet");
    let transcripts = MockTranscriptSource::new("transcript");

    let state = build_state(store, generator, transcripts);
    let (status, Json(resp)) = server::track_video(State(state), Json(track_request("abc123")))
        .await
        .expect_err("DB failure should surface as an error response");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.error, "Failed to process video.");
}

#[tokio::test]
async fn test_track_fold_failure_returns_500() {
    let store = MockDataStore::default();
    // Call 0 is the only chunk, call 1 is the fold.
    let generator = MockGenerator::failing_on("bullet", [1]);
    let transcripts = MockTranscriptSource::new("short transcript");

    let updates = store.updates.clone();

    let state = build_state(store, generator, transcripts);
    let result = server::track_video(State(state), Json(track_request("abc123"))).await;

    let (status, _) = result.expect_err("Fold failure should fail the request");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(updates.lock().unwrap().is_empty(), "No partial digest persisted");
}

#[tokio::test]
async fn test_list_videos_returns_tracked_videos() {
    let store = MockDataStore::default();
    let generator = MockGenerator::new("bullet");
    let transcripts = MockTranscriptSource::new("transcript");

    let state = build_state(store, generator, transcripts);

    server::track_video(State(state.clone()), Json(track_request("vid-1")))
        .await
        .expect("Track should succeed");
    server::track_video(State(state.clone()), Json(track_request("vid-2")))
        .await
        .expect("Track should succeed");

    let Json(videos) = server::list_videos(State(state))
        .await
        .expect("List should succeed");

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].video_id, "vid-1");
    assert_eq!(videos[0].summary.as_deref(), Some("bullet 0"));
    assert_eq!(videos[1].video_id, "vid-2");
}

#[tokio::test]
async fn test_list_videos_failure_returns_500() {
    let store = MockDataStore::failing("Connection refused");
    let generator = MockGenerator::new("bullet");
    let transcripts = MockTranscriptSource::new("transcript");

    let state = build_state(store, generator, transcripts);
    let (status, _) = server::list_videos(State(state))
        .await
        .expect_err("DB failure should surface as an error response");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_router_builds() {
    let state = build_state(
        MockDataStore::default(),
        MockGenerator::new("bullet"),
        MockTranscriptSource::new("transcript"),
    );

    let _router = server::router(state);
}
