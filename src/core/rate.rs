/// Converts an annual percentage rate into the equivalent monthly periodic rate.
///
/// The result is the unique rate that compounds to `annual_percent` over twelve
/// periods: `(1 + annual_percent / 100)^(1/12) - 1`. The function is total over
/// `f64`; negative input yields a negative rate and non-finite input propagates.
#[must_use]
pub fn annual_to_monthly_rate(annual_percent: f64) -> f64 {
    (1.0 + annual_percent / 100.0).powf(1.0 / 12.0) - 1.0
}
