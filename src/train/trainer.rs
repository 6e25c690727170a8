use crate::{
    data::sample::LabeledSample,
    model::perceptron::Perceptron,
};

/// Applies the perceptron learning rule for a single sample and returns the
/// error that drove the update (`-1.0`, `0.0` or `1.0`).
///
/// A false negative (error `+1`) moves the weights toward the input and lowers
/// `theta`; a false positive does the opposite. A correct prediction leaves
/// the parameters where they are.
pub fn train_step(model: &mut Perceptron, sample: &LabeledSample, learning_rate: f64) -> f64 {
    let predicted = model.evaluate(sample.in1, sample.in2);
    let error = sample.label.as_f64() - predicted.as_f64();

    model.w1 += learning_rate * sample.in1 * error;
    model.w2 += learning_rate * sample.in2 * error;
    model.theta += learning_rate * (-1.0) * error;

    error
}

/// One online pass over `samples` in order. Returns how many samples were
/// misclassified (and therefore triggered an update) during the pass.
pub fn train_epoch(model: &mut Perceptron, samples: &[LabeledSample], learning_rate: f64) -> usize {
    samples.iter()
        .map(|sample| train_step(model, sample, learning_rate))
        .filter(|&error| error != 0.0)
        .count()
}

/// Runs exactly `epochs` passes of the learning rule, resuming from whatever
/// parameters `model` currently holds. There is no convergence check.
pub fn train(model: &mut Perceptron, samples: &[LabeledSample], learning_rate: f64, epochs: usize) {
    for _ in 0..epochs {
        train_epoch(model, samples, learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::label::Label;
    use crate::data::reference::REFERENCE_SAMPLES;

    #[test]
    fn zero_epochs_is_a_no_op() {
        let start = Perceptron { w1: 0.25, w2: -3.0, theta: 1.5 };
        let mut model = start;
        train(&mut model, &REFERENCE_SAMPLES, 0.1, 0);
        assert_eq!(model, start);
    }

    #[test]
    fn correct_prediction_leaves_parameters_alone() {
        let mut model = Perceptron::new();
        let samples = [LabeledSample::new(0.0, -0.001, Label::One)];
        train(&mut model, &samples, 1.0, 1);
        assert_eq!(model, Perceptron::new());
    }

    #[test]
    fn false_positive_moves_away_from_input() {
        let mut model = Perceptron::new();
        let samples = [LabeledSample::new(4.0, 10.0, Label::Zero)];
        train(&mut model, &samples, 0.1, 1);
        assert_eq!(model.w1, -0.4);
        assert_eq!(model.w2, -1.0);
        assert_eq!(model.theta, 0.1);
    }

    #[test]
    fn step_deltas_match_the_rule() {
        let lr = 0.25;
        let sample = LabeledSample::new(3.0, -2.0, Label::One);
        // sum = 3*1 + (-2)*1 = 1 < 2, so this is a false negative.
        let before = Perceptron { w1: 1.0, w2: 1.0, theta: 2.0 };
        let mut model = before;

        let error = train_step(&mut model, &sample, lr);

        assert_eq!(error, 1.0);
        assert_eq!(model.w1 - before.w1, lr * sample.in1 * error);
        assert_eq!(model.w2 - before.w2, lr * sample.in2 * error);
        assert_eq!(model.theta - before.theta, -lr * error);
    }

    #[test]
    fn error_is_always_unit_or_zero() {
        let mut model = Perceptron::new();
        for _ in 0..20 {
            for sample in &REFERENCE_SAMPLES {
                let error = train_step(&mut model, sample, 0.1);
                assert!(error == -1.0 || error == 0.0 || error == 1.0);
            }
        }
    }

    #[test]
    fn training_is_deterministic() {
        let mut a = Perceptron::new();
        let mut b = Perceptron::new();
        train(&mut a, &REFERENCE_SAMPLES, 0.1, 50);
        train(&mut b, &REFERENCE_SAMPLES, 0.1, 50);
        assert_eq!(a.w1.to_bits(), b.w1.to_bits());
        assert_eq!(a.w2.to_bits(), b.w2.to_bits());
        assert_eq!(a.theta.to_bits(), b.theta.to_bits());
    }

    #[test]
    fn retraining_resumes_from_current_parameters() {
        let mut split = Perceptron::new();
        train(&mut split, &REFERENCE_SAMPLES, 0.1, 1);
        train(&mut split, &REFERENCE_SAMPLES, 0.1, 1);

        let mut whole = Perceptron::new();
        train(&mut whole, &REFERENCE_SAMPLES, 0.1, 2);

        assert_eq!(split, whole);
    }

    #[test]
    fn epoch_reports_misclassifications() {
        let mut model = Perceptron::new();
        assert_eq!(train_epoch(&mut model, &REFERENCE_SAMPLES, 0.1), 5);
        assert_eq!(train_epoch(&mut model, &REFERENCE_SAMPLES, 0.1), 2);
        assert_eq!(train_epoch(&mut model, &REFERENCE_SAMPLES, 0.1), 0);
    }
}
