use crate::core::rate::annual_to_monthly_rate;
use crate::core::series::Series;

/// Cumulative price-level factor after `month` months at `monthly_inflation_rate`.
#[must_use]
pub fn deflation_factor(monthly_inflation_rate: f64, month: usize) -> f64 {
    (1.0 + monthly_inflation_rate).powf(month as f64)
}

/// Expresses `value` observed at `month` in month-0 purchasing power.
#[must_use]
pub fn deflate_value(value: f64, monthly_inflation_rate: f64, month: usize) -> f64 {
    value / deflation_factor(monthly_inflation_rate, month)
}

/// Deflates a nominal series into constant month-0 purchasing power.
///
/// Each month index is its own exponent, so month 0 is always unchanged.
#[must_use]
pub fn deflate_series(nominal: &Series, annual_inflation_percent: f64) -> Series {
    let monthly_inflation_rate = annual_to_monthly_rate(annual_inflation_percent);
    deflate_series_monthly(nominal, monthly_inflation_rate)
}

/// Same as [`deflate_series`] with an already converted monthly rate.
#[must_use]
pub fn deflate_series_monthly(nominal: &Series, monthly_inflation_rate: f64) -> Series {
    let real = nominal
        .values()
        .iter()
        .enumerate()
        .map(|(month, value)| deflate_value(*value, monthly_inflation_rate, month))
        .collect();
    Series::from_values(real)
}
