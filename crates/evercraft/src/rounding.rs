/// Rounds half-up to cents on the already multiplied float.
pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Rounds a 0-100 percentage half-up to a whole point.
pub(crate) fn round_score(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
