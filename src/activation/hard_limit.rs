use crate::data::label::Label;

/// Hard limiter (step function) applied to the perceptron's weighted sum.
///
/// Fires when `sum >= theta`, so a sum sitting exactly on the threshold
/// classifies as `One`. Comparisons follow IEEE semantics: a NaN on either
/// side makes the comparison false and yields `Zero`.
pub fn hard_limit(sum: f64, theta: f64) -> Label {
    if sum >= theta {
        Label::One
    } else {
        Label::Zero
    }
}
