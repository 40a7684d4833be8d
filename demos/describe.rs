use argh::FromArgs;
use image::DynamicImage;
use selene_vlm::{ModelAdapter, ModelConfig, ModelProvider, VisionLanguageModel};

#[derive(FromArgs)]
/// Describe an image by running a task prompt through the adapter.
struct DescribeArgs {
    /// the path or URL of the image
    #[argh(option, short = 'i')]
    image: String,

    /// the task or question about the image
    #[argh(option, short = 't')]
    task: String,

    /// optional system prompt prefixed to the task
    #[argh(option, short = 's')]
    system_prompt: Option<String>,
}

// Stand-in model that answers from basic image statistics. Swap in a real
// backend by implementing VisionLanguageModel and ModelProvider for it.
struct PixelStats;

struct PixelStatsSummary {
    width: u32,
    height: u32,
    mean_luma: f32,
}

impl VisionLanguageModel for PixelStats {
    type EncodedImage = PixelStatsSummary;
    type Tokenizer = ();
    type Error = std::convert::Infallible;

    fn encode_image(&mut self, image: &DynamicImage) -> Result<PixelStatsSummary, Self::Error> {
        let luma = image.to_luma8();
        let sum: u64 = luma.pixels().map(|p| p.0[0] as u64).sum();
        let count = (luma.width() as u64 * luma.height() as u64).max(1);
        Ok(PixelStatsSummary {
            width: image.width(),
            height: image.height(),
            mean_luma: sum as f32 / count as f32,
        })
    }

    fn answer_question(
        &mut self,
        image: &PixelStatsSummary,
        prompt: &str,
        _tokenizer: &(),
    ) -> Result<String, Self::Error> {
        let tone = if image.mean_luma > 127.0 { "bright" } else { "dark" };
        Ok(format!(
            "Asked '{}' about a {} {}x{} image.",
            prompt, tone, image.width, image.height
        ))
    }
}

struct PixelStatsProvider;

impl ModelProvider for PixelStatsProvider {
    type Model = PixelStats;
    type Error = std::convert::Infallible;

    fn load_model(&self, config: &ModelConfig) -> Result<PixelStats, Self::Error> {
        log::info!("binding stand-in model for '{}'", config.model_name);
        Ok(PixelStats)
    }

    fn load_tokenizer(&self, _config: &ModelConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: DescribeArgs = argh::from_env();

    let mut config = ModelConfig::default();
    if let Some(system_prompt) = args.system_prompt {
        config = config.with_system_prompt(system_prompt);
    }

    let mut adapter = ModelAdapter::new(&PixelStatsProvider, config)?;
    let answer = adapter.run(&args.task, &args.image)?;

    println!("{answer}");

    Ok(())
}
