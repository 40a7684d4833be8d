//! Thin adapter exposing a single pretrained vision-language model through a
//! uniform `run(task, image)` call.
//!
//! The crate holds no model code of its own. It composes three external
//! capabilities: an image decoder ([`resolve_image`]), a vision encoder and a
//! question-answering generator (both behind [`VisionLanguageModel`]), with
//! model and tokenizer handles loaded through an injected [`ModelProvider`].
//!
//! ```no_run
//! use selene_vlm::{ModelAdapter, ModelConfig};
//! # use selene_vlm::ModelProvider;
//! # fn demo<P: ModelProvider>(provider: P) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ModelConfig::default().with_system_prompt("Answer briefly.");
//! let mut adapter = ModelAdapter::new(&provider, config)?;
//! let answer = adapter.run("What is in this image?", "assets/cat.jpg")?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

mod adapter;
mod config;
mod model;
mod source;

pub use adapter::{ModelAdapter, RunError};
pub use config::{DEFAULT_MODEL_NAME, DEFAULT_REVISION, ModelConfig};
pub use model::{ModelProvider, VisionLanguageModel};
pub use source::{ImageSourceError, resolve_image};
