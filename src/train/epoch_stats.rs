use serde::{Serialize, Deserialize};

use crate::model::perceptron::Perceptron;

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples that were misclassified (and so updated the model) this epoch.
    pub misclassified: usize,
    /// Parameters at the end of the epoch.
    pub model: Perceptron,
}
