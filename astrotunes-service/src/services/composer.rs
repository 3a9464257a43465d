use crate::dtos::AstroInput;
use crate::models::Music;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Composition failed: {0}")]
    Failed(String),
}

/// Turns submitted planet records into a music description.
#[async_trait]
pub trait Composer: Send + Sync {
    async fn compose(&self, input: &AstroInput) -> Result<Music, ComposeError>;
    fn name(&self) -> &'static str;
}

/// Returns the same music for every input.
///
/// Stub pending real business logic: there is no agreed mapping from free-form
/// planet records to musical parameters yet, so none is attempted.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderComposer;

impl PlaceholderComposer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Composer for PlaceholderComposer {
    async fn compose(&self, input: &AstroInput) -> Result<Music, ComposeError> {
        tracing::debug!(
            planets = input.planets.len(),
            "Composing placeholder music"
        );

        Ok(Music {
            key: "C".to_string(),
            tempo: 120,
            mood: "harmonic".to_string(),
            instruments: vec!["piano".to_string(), "violin".to_string()],
        })
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}
