use std::{fmt::Debug, future::Future};

/// A text-generation capability backed by an external completion API.
pub trait Generate {
    const MODEL: &'static str;
    const TEMPERATURE: f64 = 0.5;

    type Error: Debug;

    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
