pub mod builder;

use itertools::Itertools;

use crate::{chunker::split_into_chunks, pacing::Pacer, yt::TranscriptSource, Generate};

const CHUNK_PROMPT: &str = "Summarize the following YouTube transcript into key bullet points:";
const FOLD_PROMPT: &str = "Summarize the following into 5 key bullet points:";
const SINGLE_SHOT_PROMPT: &str =
    "Summarize the following transcript in key bullet points with a focus on actionable insights:";

/// Two-level digest produced by the chunked summarization pipeline.
#[derive(Debug, Clone)]
pub struct Digest {
    /// All successful chunk summaries joined in chunk order.
    pub full_summary: String,
    /// Condensed five-bullet summary of `full_summary`.
    pub tldr: String,
    pub chunks_total: usize,
    /// Indices of chunks whose summarization call failed.
    pub failed_chunks: Vec<usize>,
}

/// Result of the one-shot entry point: the fetched transcript together
/// with its single-call summary.
#[derive(Debug, Clone)]
pub struct TranscriptSummary {
    pub transcript: String,
    pub summary: String,
}

/// Chunked transcript summarization pipeline.
///
/// Splits a transcript into bounded-size word chunks, summarizes each
/// chunk through the generation capability in index order, then folds
/// the partial summaries into a final digest. A failed chunk is logged
/// and omitted from the digest; a failed fold fails the whole run.
pub struct SummaryPipeline<G, T, P>
where
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    generator: G,
    transcripts: T,
    pacer: P,
    words_per_chunk: usize,
}

impl<G, T, P> SummaryPipeline<G, T, P>
where
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    async fn generate_with(&self, instruction: &str, content: &str) -> Result<String, G::Error> {
        let prompt = format!("{instruction}\n\n{content}");
        self.generator.generate(&prompt).await
    }

    /// Summarizes a raw transcript into a [`Digest`].
    ///
    /// Chunks are processed strictly sequentially; the next generation
    /// call is not issued until the current one has resolved and the
    /// pacer has run.
    #[tracing::instrument(skip_all)]
    pub async fn summarize_transcript(&self, transcript: &str) -> anyhow::Result<Digest> {
        let chunks = split_into_chunks(transcript, self.words_per_chunk)?;
        let mut summaries: Vec<Option<String>> = Vec::with_capacity(chunks.len());

        for (i, chunk) in chunks.iter().enumerate() {
            tracing::info!(chunk = i + 1, total = chunks.len(), "Summarizing chunk");

            match self.generate_with(CHUNK_PROMPT, chunk).await {
                Ok(text) => summaries.push(Some(text)),
                Err(e) => {
                    tracing::warn!(
                        error = ?e,
                        chunk = i + 1,
                        "Failed to summarize chunk, omitting it"
                    );
                    summaries.push(None);
                }
            }

            // rate-limit mitigation between generation calls
            self.pacer.pause().await;
        }

        let failed_chunks: Vec<usize> = summaries
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_none().then_some(i))
            .collect();
        if !failed_chunks.is_empty() {
            tracing::warn!(
                failed = failed_chunks.len(),
                total = chunks.len(),
                "Digest will omit failed chunks"
            );
        }

        let full_summary = summaries.iter().flatten().join("\n\n");

        let tldr = self
            .generate_with(FOLD_PROMPT, &full_summary)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to generate final digest: {e:?}"))?;

        Ok(Digest {
            full_summary,
            tldr,
            chunks_total: chunks.len(),
            failed_chunks,
        })
    }

    /// Fetches a video's transcript and runs the chunked pipeline over it.
    ///
    /// Returns `Ok(None)` when no transcript is available for the video.
    #[tracing::instrument(skip(self))]
    pub async fn summarize_video(&self, video_id: &str) -> anyhow::Result<Option<Digest>> {
        let Some(transcript) = self.transcripts.fetch_transcript(video_id).await? else {
            return Ok(None);
        };

        let digest = self.summarize_transcript(&transcript).await?;
        Ok(Some(digest))
    }

    /// One-shot alternative to the chunked pipeline: fetches the
    /// transcript and summarizes it with a single generation call.
    ///
    /// All-or-nothing: returns `None` if the transcript is unavailable
    /// or either step fails.
    #[tracing::instrument(skip(self))]
    pub async fn transcribe_and_summarize(&self, video_id: &str) -> Option<TranscriptSummary> {
        let transcript = match self.transcripts.fetch_transcript(video_id).await {
            Ok(Some(transcript)) => transcript,
            Ok(None) => {
                tracing::warn!(video_id, "No transcript available");
                return None;
            }
            Err(e) => {
                tracing::error!(error = ?e, video_id, "Failed to fetch transcript");
                return None;
            }
        };

        match self.generate_with(SINGLE_SHOT_PROMPT, &transcript).await {
            Ok(summary) => Some(TranscriptSummary {
                transcript,
                summary,
            }),
            Err(e) => {
                tracing::error!(error = ?e, video_id, "Failed to summarize transcript");
                None
            }
        }
    }
}
