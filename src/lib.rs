pub mod error;
pub mod activation;
pub mod data;
pub mod model;
pub mod train;
pub mod session;

// Convenience re-exports
pub use error::PerceptronError;
pub use data::{Label, LabeledSample, REFERENCE_SAMPLES};
pub use model::Perceptron;
pub use train::{train, train_loop, EpochStats, TrainConfig};
pub use session::{Query, Session};
