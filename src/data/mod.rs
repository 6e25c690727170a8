pub mod label;
pub mod sample;
pub mod reference;

pub use label::Label;
pub use sample::LabeledSample;
pub use reference::{REFERENCE_SAMPLES, REFERENCE_LEARNING_RATE, REFERENCE_EPOCHS};
