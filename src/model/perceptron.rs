use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::activation::hard_limit::hard_limit;
use crate::data::{label::Label, sample::LabeledSample};

/// Two-input perceptron: the decision boundary `w1*in1 + w2*in2 = theta`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Perceptron {
    pub w1: f64,
    pub w2: f64,
    pub theta: f64,
}

impl Perceptron {
    /// All parameters zeroed.
    pub fn new() -> Perceptron {
        Perceptron { w1: 0.0, w2: 0.0, theta: 0.0 }
    }

    /// Draws each parameter uniformly from [-1, 1).
    pub fn random<R: Rng>(rng: &mut R) -> Perceptron {
        Perceptron {
            w1: rng.gen::<f64>() * 2.0 - 1.0,
            w2: rng.gen::<f64>() * 2.0 - 1.0,
            theta: rng.gen::<f64>() * 2.0 - 1.0,
        }
    }

    /// Input to the hard limiter.
    pub fn weighted_sum(&self, in1: f64, in2: f64) -> f64 {
        in1 * self.w1 + in2 * self.w2
    }

    /// Classifies one input pair.
    pub fn evaluate(&self, in1: f64, in2: f64) -> Label {
        hard_limit(self.weighted_sum(in1, in2), self.theta)
    }

    /// Fraction of `samples` classified correctly; 0.0 for an empty slice.
    pub fn accuracy(&self, samples: &[LabeledSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples.iter()
            .filter(|s| self.evaluate(s.in1, s.in2) == s.label)
            .count();
        correct as f64 / samples.len() as f64
    }
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w1: {}, w2: {}, theta: {}", self.w1, self.w2, self.theta)
    }
}
