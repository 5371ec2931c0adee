use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use llm::LLMProvider;
use log::debug;

use pathway_core::ModelSettings;

use crate::ModelError;

/// A single text-generation call against a hosted model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Builds a generator from user-supplied settings.
///
/// Front ends hold a connector instead of a live client so every caller
/// passes its own configuration explicitly.
pub trait Connector: Send + Sync {
    fn connect(&self, settings: &ModelSettings) -> Result<Box<dyn TextGenerator>, ModelError>;
}

fn map_backend(provider: &str) -> Result<LLMBackend, ModelError> {
    match provider {
        "google" => Ok(LLMBackend::Google),
        other => Err(ModelError::UnknownProvider(other.to_string())),
    }
}

/// Generator backed by the `llm` crate.
pub struct LlmGenerator {
    llm: Box<dyn LLMProvider>,
    provider: String,
    model: String,
}

impl LlmGenerator {
    pub fn connect(settings: &ModelSettings) -> Result<Self, ModelError> {
        settings.require_credential()?;
        let backend = map_backend(&settings.provider)?;

        let llm = LLMBuilder::new()
            .backend(backend)
            .model(&settings.model)
            .api_key(&settings.api_key)
            .build()
            .map_err(|e| ModelError::Build(e.to_string()))?;

        Ok(Self {
            llm,
            provider: settings.provider.clone(),
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for LlmGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        debug!("sending prompt to {} ({})", self.provider, self.model);

        let messages = vec![ChatMessage::user().content(prompt).build()];
        let response = self
            .llm
            .chat(&messages)
            .await
            .map_err(|e| ModelError::Chat(e.to_string()))?;

        reply_text(response.text())
    }
}

/// Any text the model returns, blank or not, is passed through unchanged.
fn reply_text(text: Option<String>) -> Result<String, ModelError> {
    text.ok_or(ModelError::NoText)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LlmConnector;

impl Connector for LlmConnector {
    fn connect(&self, settings: &ModelSettings) -> Result<Box<dyn TextGenerator>, ModelError> {
        Ok(Box::new(LlmGenerator::connect(settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::ConfigError;

    #[test]
    fn connect_requires_credential() {
        let err = LlmConnector
            .connect(&ModelSettings::for_key(""))
            .err()
            .expect("blank key must be rejected");
        assert!(matches!(err, ModelError::Config(ConfigError::MissingCredential)));
    }

    #[test]
    fn blank_reply_is_kept_verbatim() {
        assert_eq!(reply_text(Some("  \n".to_string())).unwrap(), "  \n");
        assert_eq!(reply_text(Some(String::new())).unwrap(), "");
        assert!(matches!(reply_text(None), Err(ModelError::NoText)));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let settings = ModelSettings {
            provider: "carrier-pigeon".to_string(),
            ..ModelSettings::for_key("k")
        };
        let err = LlmGenerator::connect(&settings).err().expect("provider must be known");
        assert_eq!(err.to_string(), "unknown provider: carrier-pigeon");
    }
}
