use crate::util::Float;

/// Logistic sigmoid, squashes finite input into `(0, 1)`, saturating to exactly
/// 0.0 or 1.0 for large `|val|`.
pub fn sigmoid(val: Float) -> Float {
    1.0 / (1.0 + (-val).exp())
}

/// Sigmoid derivative expressed through the sigmoid output `val`.
pub fn sigmoid_deriv(val: Float) -> Float {
    (1.0 - val) * val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_stays_inside_unit_interval() {
        for x in [-30.0, -5.0, -0.5, 0.0, 0.5, 5.0, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }
    }

    #[test]
    fn sigmoid_saturates_past_f64_precision() {
        // 1 + e^-x rounds to 1.0 in f64 once x is above ~36.7
        assert!(sigmoid(36.0) < 1.0);
        assert!(sigmoid(-36.0) > 0.0);
        assert_eq!(sigmoid(40.0), 1.0);
        assert_eq!(sigmoid(-800.0), 0.0);
    }

    #[test]
    fn sigmoid_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(0.6) - 0.645656).abs() < 1e-6);
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert_eq!(sigmoid_deriv(0.5), 0.25);
        assert_eq!(sigmoid_deriv(1.0), 0.0);
    }

    #[test]
    fn non_finite_input_is_not_hidden() {
        assert_eq!(sigmoid(Float::INFINITY), 1.0);
        assert_eq!(sigmoid(Float::NEG_INFINITY), 0.0);
        assert!(sigmoid(Float::NAN).is_nan());
    }
}
