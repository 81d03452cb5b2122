/// Rounds `value` to the given number of decimal places.
///
/// Computation inside the models always keeps full precision; rounding only
/// happens when values leave the crate in a report.
///
/// ```
/// use twine_solar_thermal::support::units::round_to;
///
/// assert_eq!(round_to(71.108_967, 2), 71.11);
/// assert_eq!(round_to(-0.004, 2), 0.0);
/// ```
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    let rounded = (value * scale).round() / scale;
    // Avoid reporting "-0.0".
    if rounded == 0.0 { 0.0 } else { rounded }
}
