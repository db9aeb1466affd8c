use crate::error::ValidationError;

use super::ProjectionInputs;

/// Longest supported projection horizon.
pub const MAX_HORIZON_MONTHS: u32 = 600;
/// Highest accepted annual inflation rate, in percent.
pub const MAX_INFLATION_ANNUAL_RATE: f64 = 200.0;

/// Checks every input before simulation starts.
///
/// The first failing category wins: invalid numbers, then negative values,
/// then the horizon range, then the inflation ceiling.
pub fn validate_projection_inputs(
    inputs: &ProjectionInputs,
) -> Result<ProjectionInputs, ValidationError> {
    // An enabled toggle without a rate counts as an invalid number.
    let inflation = inputs
        .inflation_enabled
        .then(|| inputs.inflation_annual_rate.unwrap_or(f64::NAN));

    let amounts = [
        ("initialCapital", inputs.initial_capital),
        ("periodicContribution", inputs.periodic_contribution),
        ("savingsAnnualRate", inputs.savings_annual_rate),
        ("alternativeAnnualRate", inputs.alternative_annual_rate),
        ("realAssetAnnualRate", inputs.real_asset_annual_rate),
        ("variableIncomeAnnualRate", inputs.variable_income_annual_rate),
    ];
    let checked = amounts
        .into_iter()
        .chain(inflation.map(|rate| ("inflationAnnualRate", rate)));

    let mut negative_field = None;
    for (field, value) in checked {
        if !value.is_finite() {
            return Err(ValidationError::InvalidNumber { field });
        }
        if value < 0.0 && negative_field.is_none() {
            negative_field = Some(field);
        }
    }
    if let Some(field) = negative_field {
        return Err(ValidationError::NegativeValue { field });
    }

    if !(1..=MAX_HORIZON_MONTHS).contains(&inputs.horizon_months) {
        return Err(ValidationError::HorizonOutOfRange {
            horizon_months: inputs.horizon_months,
        });
    }

    if let Some(annual_rate) = inflation {
        if annual_rate > MAX_INFLATION_ANNUAL_RATE {
            return Err(ValidationError::InflationTooHigh { annual_rate });
        }
    }

    Ok(*inputs)
}
