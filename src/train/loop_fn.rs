use log::{debug, info};

use crate::data::sample::LabeledSample;
use crate::model::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `model` for `config.epochs` epochs and returns the number of
/// samples misclassified during the **last completed epoch** (0 if no epoch
/// ran).
///
/// Every epoch runs; a dropped `progress_tx` receiver only silences progress
/// reporting, it never cuts training short.
pub fn train_loop(model: &mut Perceptron, samples: &[LabeledSample], config: &TrainConfig) -> usize {
    info!(
        "training on {} samples for {} epochs (learning rate {})",
        samples.len(),
        config.epochs,
        config.learning_rate
    );

    let mut last_misclassified = 0;
    let mut progress_tx = config.progress_tx.as_ref();

    for epoch in 1..=config.epochs {
        let misclassified = train_epoch(model, samples, config.learning_rate);
        last_misclassified = misclassified;

        debug!("epoch {epoch}: {misclassified} misclassified, {model}");

        if let Some(tx) = progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                misclassified,
                model: *model,
            };
            if tx.send(stats).is_err() {
                debug!("progress receiver dropped at epoch {epoch}");
                progress_tx = None;
            }
        }
    }

    info!("training finished: {model}, {last_misclassified} misclassified in final epoch");
    last_misclassified
}
