use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model identifier used when none is given.
pub const DEFAULT_MODEL_NAME: &str = "vikhyatk/moondream2";

/// Pinned snapshot of [`DEFAULT_MODEL_NAME`] used when no revision is given.
pub const DEFAULT_REVISION: &str = "2024-03-04";

/// Construction-time configuration for a [`ModelAdapter`].
///
/// Set once and handed to the adapter; the adapter never mutates it. The
/// `extra` map carries backend-specific options the adapter itself does not
/// interpret, forwarded verbatim to the [`ModelProvider`].
///
/// [`ModelAdapter`]: crate::ModelAdapter
/// [`ModelProvider`]: crate::ModelProvider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Name or path of the pretrained model to load.
    pub model_name: String,
    /// Snapshot of the pretrained model to load.
    pub revision: String,
    /// Optional prefix prepended to every task prompt.
    pub system_prompt: Option<String>,
    /// Whether the provider may execute code shipped with the model.
    pub trust_remote_code: bool,
    /// Passthrough options forwarded to the provider, uninterpreted.
    pub extra: Map<String, Value>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_NAME, DEFAULT_REVISION)
    }
}

impl ModelConfig {
    /// Creates a config for the given model and revision. No validation is
    /// performed; an unresolvable pair surfaces as a load error from the
    /// provider.
    pub fn new(model_name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            revision: revision.into(),
            system_prompt: None,
            trust_remote_code: true,
            extra: Map::new(),
        }
    }

    /// Sets the system prompt prepended to every task.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Adds a passthrough option for the provider.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
