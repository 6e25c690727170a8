use crate::data::label::Label::{One, Zero};
use crate::data::sample::LabeledSample;

/// Learning rate of the reference run.
pub const REFERENCE_LEARNING_RATE: f64 = 0.1;

/// Epoch count of the reference run.
pub const REFERENCE_EPOCHS: usize = 1000;

/// The embedded ten-sample training set.
///
/// Order matters: training visits samples in this order every epoch, and the
/// final parameters depend on it bit for bit.
pub const REFERENCE_SAMPLES: [LabeledSample; 10] = [
    LabeledSample::new(0.0, -0.001, One),
    LabeledSample::new(4.0, 10.0, Zero),
    LabeledSample::new(6.0, 2.0, One),
    LabeledSample::new(7.5, 3.7, One),
    LabeledSample::new(8.0, 8.99, Zero),
    LabeledSample::new(8.2, 5.68, One),
    LabeledSample::new(9.0, 1.07, One),
    LabeledSample::new(15.0, 200.8, Zero),
    LabeledSample::new(100.45, 190.0, Zero),
    LabeledSample::new(2000.0, 140.0, One),
];
