use std::{path::PathBuf, process::Stdio, sync::LazyLock};

use regex::Regex;
use tokio::process::Command;

use super::TranscriptSource;

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}").unwrap());
static CUE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Fetches auto-generated English subtitles via `yt-dlp` and flattens the
/// WebVTT cues into plain transcript text.
///
/// Subtitle files are cached under `<workdir>/transcripts`, so refetching
/// the same video reuses the downloaded file.
#[derive(Debug, Clone)]
pub struct YtDlpTranscripts {
    workdir: PathBuf,
}

impl YtDlpTranscripts {
    const VIDEO_BASE_URL: &'static str = "https://www.youtube.com/watch";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl TranscriptSource for YtDlpTranscripts {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        let transcripts_dir = self.workdir.join("transcripts");
        tokio::fs::create_dir_all(&transcripts_dir).await?;

        let url = format!("{}?v={}", Self::VIDEO_BASE_URL, video_id);
        let status = Command::new("yt-dlp")
            .arg("--write-auto-sub")
            .args(["--sub-lang", "en"])
            .arg("--skip-download")
            .arg("--output")
            .arg(transcripts_dir.join("%(id)s.%(ext)s"))
            .arg(&url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;

        if !status.success() {
            tracing::warn!(video_id, code = ?status.code(), "yt-dlp failed to fetch subtitles");
            return Ok(None);
        }

        let mut vtt_path = None;
        let mut entries = tokio::fs::read_dir(&transcripts_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(video_id) && name.ends_with(".en.vtt") {
                vtt_path = Some(entry.path());
                break;
            }
        }

        let Some(vtt_path) = vtt_path else {
            tracing::warn!(video_id, "yt-dlp produced no subtitle file");
            return Ok(None);
        };

        let raw = tokio::fs::read_to_string(&vtt_path).await?;
        let transcript = parse_vtt(&raw);
        tracing::info!(video_id, chars = transcript.len(), "Fetched transcript");

        if transcript.is_empty() {
            return Ok(None);
        }
        Ok(Some(transcript))
    }
}

/// Flattens WebVTT subtitle content into a single line of text.
///
/// Drops the file headers, cue-timing lines and inline tags, and skips
/// the consecutive duplicate lines auto-generated captions are full of.
fn parse_vtt(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with("WEBVTT")
            || line.starts_with("Kind:")
            || line.starts_with("Language:")
            || TIMESTAMP_LINE.is_match(line)
        {
            continue;
        }

        let cleaned = CUE_TAG.replace_all(line, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            continue;
        }
        if lines.last().is_some_and(|last| last.as_str() == cleaned) {
            continue;
        }
        lines.push(cleaned.to_string());
    }

    WHITESPACE
        .replace_all(&lines.join(" "), " ")
        .trim()
        .to_string()
}
