use image::DynamicImage;

use crate::config::ModelConfig;

/// Trait for pretrained vision-language models usable with [`ModelAdapter`].
///
/// The adapter treats the model as an opaque pair of capabilities: a vision
/// encoder and a question-answering generator. Implement this trait to bind a
/// concrete backend (local weights, remote endpoint, a fake in tests).
///
/// [`ModelAdapter`]: crate::ModelAdapter
pub trait VisionLanguageModel {
    /// Intermediate representation produced by the vision encoder, consumed
    /// only by this same model's question answering.
    type EncodedImage;
    /// Tokenizer handle paired with this model.
    type Tokenizer;
    /// The error type that can be returned during inference.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encodes a decoded image into the model's internal representation.
    fn encode_image(&mut self, image: &DynamicImage) -> Result<Self::EncodedImage, Self::Error>;

    /// Generates a text answer for the given encoded image and prompt.
    fn answer_question(
        &mut self,
        image: &Self::EncodedImage,
        prompt: &str,
        tokenizer: &Self::Tokenizer,
    ) -> Result<String, Self::Error>;
}

/// Trait for loading a model and its tokenizer from a `(model_name, revision)`
/// pair.
///
/// Providers are injected into [`ModelAdapter::new`] rather than reached
/// through global state, so tests can substitute fakes. Both handles are
/// loaded from the same [`ModelConfig`], which keeps them pinned to the same
/// snapshot.
///
/// [`ModelAdapter::new`]: crate::ModelAdapter::new
pub trait ModelProvider {
    /// The model type this provider loads.
    type Model: VisionLanguageModel;
    /// The error type that can be returned while loading.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the model identified by the config. May perform network and disk
    /// I/O and allocate large amounts of memory.
    fn load_model(&self, config: &ModelConfig) -> Result<Self::Model, Self::Error>;

    /// Loads the tokenizer paired with the model identified by the config.
    fn load_tokenizer(
        &self,
        config: &ModelConfig,
    ) -> Result<<Self::Model as VisionLanguageModel>::Tokenizer, Self::Error>;
}
