use log::warn;
use serde::{Serialize, Deserialize};
use std::sync::mpsc;

use crate::data::reference::{REFERENCE_EPOCHS, REFERENCE_LEARNING_RATE};
use crate::error::PerceptronError;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `learning_rate` — step size of the learning rule, expected in (0, 1]
/// - `epochs`        — number of full passes; always run to completion
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed epoch. Not part of the JSON form.
///
/// Fields missing from a JSON config fall back to the reference run
/// (learning rate 0.1, 1000 epochs).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        TrainConfig {
            learning_rate,
            epochs,
            progress_tx: None,
        }
    }

    /// Rejects learning rates the rule cannot use. Rates above 1 are allowed
    /// but logged, since they overshoot on every update.
    pub fn validate(&self) -> Result<(), PerceptronError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.learning_rate > 1.0 {
            warn!("learning rate {} is above 1", self.learning_rate);
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(REFERENCE_LEARNING_RATE, REFERENCE_EPOCHS)
    }
}
