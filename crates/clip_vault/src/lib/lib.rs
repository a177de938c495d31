pub mod chunker;
mod llm;
pub mod pacing;
mod pipeline;
pub mod server;
pub mod tracing;
pub mod yt;

pub use llm::generate::Generate;
pub use llm::openai;
pub use pipeline::{
    builder::SummaryPipelineBuilder, Digest, SummaryPipeline, TranscriptSummary,
};
