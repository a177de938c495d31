use crate::{
    chunker::DEFAULT_WORDS_PER_CHUNK,
    pacing::{FixedDelay, Pacer},
    yt::TranscriptSource,
    Generate, SummaryPipeline,
};

pub struct SummaryPipelineBuilder<G = (), T = (), P = FixedDelay> {
    generator: G,
    transcripts: T,
    pacer: P,
    words_per_chunk: usize,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            generator: (),
            transcripts: (),
            pacer: FixedDelay::default(),
            words_per_chunk: DEFAULT_WORDS_PER_CHUNK,
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, T, P> SummaryPipelineBuilder<G, T, P> {
    pub fn generator<G2: Generate + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> SummaryPipelineBuilder<G2, T, P> {
        SummaryPipelineBuilder {
            generator,
            transcripts: self.transcripts,
            pacer: self.pacer,
            words_per_chunk: self.words_per_chunk,
        }
    }

    pub fn transcripts<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> SummaryPipelineBuilder<G, T2, P> {
        SummaryPipelineBuilder {
            generator: self.generator,
            transcripts,
            pacer: self.pacer,
            words_per_chunk: self.words_per_chunk,
        }
    }

    pub fn pacer<P2: Pacer + Send + Sync + 'static>(
        self,
        pacer: P2,
    ) -> SummaryPipelineBuilder<G, T, P2> {
        SummaryPipelineBuilder {
            generator: self.generator,
            transcripts: self.transcripts,
            pacer,
            words_per_chunk: self.words_per_chunk,
        }
    }

    pub fn words_per_chunk(mut self, words_per_chunk: usize) -> Self {
        self.words_per_chunk = words_per_chunk;
        self
    }
}

impl<G, T, P> SummaryPipelineBuilder<G, T, P>
where
    G: Generate + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    P: Pacer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<G, T, P> {
        SummaryPipeline {
            generator: self.generator,
            transcripts: self.transcripts,
            pacer: self.pacer,
            words_per_chunk: self.words_per_chunk,
        }
    }
}
