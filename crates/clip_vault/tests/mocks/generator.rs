use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use clip_vault::Generate;

/// Generator that answers `"<summary> <call index>"` and records every
/// prompt, so tests can assert call counts, ordering and prompt content.
#[derive(Clone)]
pub struct MockGenerator {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_on: HashSet<usize>,
}

impl MockGenerator {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: HashSet::new(),
        }
    }

    /// Fails the generation calls with the given zero-based call indices.
    pub fn failing_on(summary: &str, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_on: indices.into_iter().collect(),
            ..Self::new(summary)
        }
    }
}

impl Generate for MockGenerator {
    const MODEL: &'static str = "mock-gpt";
    type Error = anyhow::Error;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(prompt.to_string());
            calls.len() - 1
        };

        if self.fail_on.contains(&index) {
            anyhow::bail!("mock generation failure on call {index}");
        }

        Ok(format!("{} {}", self.summary, index))
    }
}
