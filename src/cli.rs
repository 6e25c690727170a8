use clap::Parser;

use ferrite_perceptron::{PerceptronError, TrainConfig};

/// Trains a two-input perceptron on the built-in dataset, then classifies
/// number pairs read from standard input until end of input.
#[derive(Parser, Debug)]
#[command(name = "ferrite-perceptron", version, about)]
pub struct Cli {
    /// JSON training config (`learning_rate`, `epochs`)
    #[arg(long)]
    pub config: Option<String>,

    /// Overrides the configured learning rate
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Overrides the configured epoch count
    #[arg(long)]
    pub epochs: Option<usize>,

    /// Start from random parameters drawn with this seed instead of zeros
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print per-epoch statistics as JSON lines on stderr after training
    #[arg(long)]
    pub progress: bool,

    /// Exit after printing the trained parameters
    #[arg(long)]
    pub no_interactive: bool,
}

impl Cli {
    /// Config file (or the reference defaults) with command-line overrides applied.
    pub fn train_config(&self) -> Result<TrainConfig, PerceptronError> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::load_json(path)?,
            None => TrainConfig::default(),
        };
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        config.validate()?;
        Ok(config)
    }
}
