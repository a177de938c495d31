//! Word-count based transcript chunking.

/// Default number of words per chunk handed to the summarizer.
pub const DEFAULT_WORDS_PER_CHUNK: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("words_per_chunk must be greater than zero")]
    InvalidChunkSize,
}

/// Splits `text` into consecutive groups of at most `words_per_chunk`
/// whitespace-delimited words. The last chunk may be shorter; empty or
/// whitespace-only input produces no chunks.
///
/// The rejoin is lossy: each chunk's words are joined with single spaces,
/// so original spacing and newlines are not preserved.
pub fn split_into_chunks(text: &str, words_per_chunk: usize) -> Result<Vec<String>, ChunkError> {
    if words_per_chunk == 0 {
        return Err(ChunkError::InvalidChunkSize);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    Ok(words
        .chunks(words_per_chunk)
        .map(|group| group.join(" "))
        .collect())
}
