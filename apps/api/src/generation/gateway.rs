//! Generation Gateway: prompt in, raw text out, one outbound call per invocation.
//!
//! Every transport or service failure collapses into `GenerationError`. There is no
//! retry and no caching; the caller decides what a failure means for its section.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::generation::prompts::{build_prompt, PromptFacts};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::section::SectionId;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no prompt template for section {0}")]
    Unsupported(SectionId),

    #[error("text generation for {section} failed: {source}")]
    Service {
        section: SectionId,
        #[source]
        source: LlmError,
    },
}

#[derive(Clone)]
pub struct GenerationGateway {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationGateway {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Builds the section prompt and invokes the generator once.
    ///
    /// `Ok(None)` is a successful call without a text payload; the normalizer
    /// turns that into a malformed-generation failure.
    pub async fn generate(
        &self,
        section: SectionId,
        facts: &PromptFacts,
    ) -> Result<Option<String>, GenerationError> {
        let prompt = build_prompt(section, facts).ok_or(GenerationError::Unsupported(section))?;
        debug!("Generating {section}: prompt_chars={}", prompt.len());

        let started = Instant::now();
        let result = self.generator.generate_text(&prompt).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(text) => {
                info!(
                    "Generation for {section} resolved in {elapsed_ms}ms ({} chars)",
                    text.as_deref().map(str::len).unwrap_or(0)
                );
                Ok(text)
            }
            Err(source) => {
                warn!("Generation for {section} failed after {elapsed_ms}ms: {source}");
                Err(GenerationError::Service { section, source })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-process generators standing in for the external service.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Answers by the first matching prompt substring. Unmatched prompts fail.
    pub struct ScriptedGenerator {
        replies: Vec<(&'static str, Option<&'static str>)>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<(&'static str, Option<&'static str>)>) -> Self {
            Self {
                replies,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .iter()
                .find(|(needle, _)| prompt.contains(needle))
                .map(|(_, reply)| reply.map(str::to_string))
                .ok_or(LlmError::Api {
                    status: 503,
                    message: "service unavailable".to_string(),
                })
        }
    }

    /// Holds each call until the test releases the gate registered for its prompt marker.
    pub struct GatedGenerator {
        gates: Mutex<HashMap<&'static str, oneshot::Receiver<String>>>,
    }

    impl GatedGenerator {
        pub fn new() -> (Self, HashMap<&'static str, oneshot::Sender<String>>) {
            Self::with_markers(&["Company:", "skills for a"])
        }

        pub fn with_markers(
            markers: &[&'static str],
        ) -> (Self, HashMap<&'static str, oneshot::Sender<String>>) {
            let mut gates = HashMap::new();
            let mut senders = HashMap::new();
            for marker in markers {
                let (tx, rx) = oneshot::channel();
                gates.insert(*marker, rx);
                senders.insert(*marker, tx);
            }
            (
                Self {
                    gates: Mutex::new(gates),
                },
                senders,
            )
        }
    }

    #[async_trait]
    impl TextGenerator for GatedGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            let gate = {
                let mut gates = self.gates.lock().unwrap();
                let marker = gates
                    .keys()
                    .copied()
                    .find(|marker| prompt.contains(marker));
                marker.and_then(|m| gates.remove(m))
            };
            let gate = gate.ok_or(LlmError::Envelope("no gate for prompt"))?;
            gate.await
                .map(Some)
                .map_err(|_| LlmError::Envelope("gate dropped"))
        }
    }
}
