use serde::{Serialize, Deserialize};
use crate::data::label::Label;

/// One training example: two inputs and the class they should map to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub in1: f64,
    pub in2: f64,
    pub label: Label,
}

impl LabeledSample {
    pub const fn new(in1: f64, in2: f64, label: Label) -> LabeledSample {
        LabeledSample { in1, in2, label }
    }
}
