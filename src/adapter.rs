use std::time::Instant;

use thiserror::Error;

use crate::config::ModelConfig;
use crate::model::{ModelProvider, VisionLanguageModel};
use crate::source::{self, ImageSourceError};

/// Errors produced by a single [`ModelAdapter::run`] call.
///
/// A failure at any step aborts the call; there are no retries and no partial
/// results.
#[derive(Debug, Error)]
pub enum RunError<E: std::error::Error + Send + Sync + 'static> {
    /// The image argument could not be resolved or decoded.
    #[error("failed to load image")]
    Image(#[from] ImageSourceError),
    /// The model failed while encoding the image or generating the answer.
    #[error("model inference failed")]
    Model(#[source] E),
}

/// Adapter exposing a pretrained vision-language model through a uniform
/// `run(task, image)` call.
///
/// Construction eagerly loads the model and its tokenizer from the injected
/// [`ModelProvider`]; both handles live as long as the adapter and there is no
/// explicit teardown. All calls are synchronous and blocking.
pub struct ModelAdapter<M: VisionLanguageModel> {
    config: ModelConfig,
    model: M,
    tokenizer: M::Tokenizer,
}

impl<M: VisionLanguageModel> std::fmt::Debug for ModelAdapter<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<M: VisionLanguageModel> ModelAdapter<M> {
    /// Loads the model and tokenizer named by `config` from `provider`.
    ///
    /// This may perform network and disk I/O and can run for a long time.
    /// Loader errors are returned as-is, untranslated.
    pub fn new<P>(provider: &P, config: ModelConfig) -> Result<Self, P::Error>
    where
        P: ModelProvider<Model = M>,
    {
        log::info!(
            "loading model '{}' at revision '{}'",
            config.model_name,
            config.revision
        );
        let model = provider.load_model(&config)?;
        let tokenizer = provider.load_tokenizer(&config)?;
        Ok(Self {
            config,
            model,
            tokenizer,
        })
    }

    /// Returns the configuration this adapter was constructed with.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Answers `task` about the image at `img` (a file path or URL).
    ///
    /// The image is decoded, encoded by the model, and the generated answer
    /// for the effective prompt is returned verbatim. The effective prompt is
    /// `"<system_prompt> <task>"` when a system prompt is configured, `task`
    /// alone otherwise.
    pub fn run(&mut self, task: &str, img: &str) -> Result<String, RunError<M::Error>> {
        let image = source::resolve_image(img)?;
        let encoded = self.model.encode_image(&image).map_err(RunError::Model)?;

        let prompt = self.effective_prompt(task);
        let start = Instant::now();
        let answer = self
            .model
            .answer_question(&encoded, &prompt, &self.tokenizer)
            .map_err(RunError::Model)?;
        log::debug!("inference completed in {:?}", start.elapsed());

        Ok(answer)
    }

    fn effective_prompt(&self, task: &str) -> String {
        match &self.config.system_prompt {
            Some(system_prompt) => format!("{system_prompt} {task}"),
            None => task.to_string(),
        }
    }
}
