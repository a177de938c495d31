pub mod subtitles;

use std::future::Future;

pub use subtitles::YtDlpTranscripts;

/// Source of full-text transcripts keyed by video ID.
pub trait TranscriptSource {
    /// Returns the transcript, or `None` when no transcript is available
    /// for the video. `None` is a normal outcome, not an error.
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}
