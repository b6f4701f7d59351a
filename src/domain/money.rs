/// Round a monetary value to 2 decimal places.
///
/// Rounding happens on the value scaled by 100, with halves rounded away
/// from zero, so `2.005` becomes `2.01` and `-2.005` becomes `-2.01`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
