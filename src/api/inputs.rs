use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{decimal_to_f64, decimal_to_months};
use crate::error::{ProjectionError, ProjectionResult};

/// Raw numeric inputs of one projection run, as handed over by the form layer.
///
/// `inflation_annual_rate` is kept while inflation is disabled so toggling
/// the flag back on reuses the last rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionInputs {
    pub initial_capital: f64,
    pub periodic_contribution: f64,
    pub horizon_months: u32,
    pub savings_annual_rate: f64,
    pub alternative_annual_rate: f64,
    pub real_asset_annual_rate: f64,
    pub variable_income_annual_rate: f64,
    pub inflation_enabled: bool,
    pub inflation_annual_rate: Option<f64>,
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            initial_capital: 1_000.0,
            periodic_contribution: 200.0,
            horizon_months: 24,
            savings_annual_rate: 6.0,
            alternative_annual_rate: 10.0,
            real_asset_annual_rate: 8.0,
            variable_income_annual_rate: 12.0,
            inflation_enabled: false,
            inflation_annual_rate: Some(4.0),
        }
    }
}

impl ProjectionInputs {
    #[must_use]
    pub fn with_initial_capital(mut self, initial_capital: f64) -> Self {
        self.initial_capital = initial_capital;
        self
    }

    #[must_use]
    pub fn with_periodic_contribution(mut self, periodic_contribution: f64) -> Self {
        self.periodic_contribution = periodic_contribution;
        self
    }

    #[must_use]
    pub fn with_horizon_months(mut self, horizon_months: u32) -> Self {
        self.horizon_months = horizon_months;
        self
    }

    #[must_use]
    pub fn with_savings_annual_rate(mut self, annual_rate: f64) -> Self {
        self.savings_annual_rate = annual_rate;
        self
    }

    #[must_use]
    pub fn with_alternative_annual_rate(mut self, annual_rate: f64) -> Self {
        self.alternative_annual_rate = annual_rate;
        self
    }

    #[must_use]
    pub fn with_real_asset_annual_rate(mut self, annual_rate: f64) -> Self {
        self.real_asset_annual_rate = annual_rate;
        self
    }

    #[must_use]
    pub fn with_variable_income_annual_rate(mut self, annual_rate: f64) -> Self {
        self.variable_income_annual_rate = annual_rate;
        self
    }

    /// Enables inflation adjustment at `annual_rate` percent.
    #[must_use]
    pub fn with_inflation(mut self, annual_rate: f64) -> Self {
        self.inflation_enabled = true;
        self.inflation_annual_rate = Some(annual_rate);
        self
    }

    /// Flips the inflation flag without touching the remembered rate.
    #[must_use]
    pub fn with_inflation_enabled(mut self, enabled: bool) -> Self {
        self.inflation_enabled = enabled;
        self
    }

    /// Inflation rate that applies to this run, if inflation is enabled.
    #[must_use]
    pub fn active_inflation_rate(&self) -> Option<f64> {
        if self.inflation_enabled {
            self.inflation_annual_rate
        } else {
            None
        }
    }

    pub fn from_json_str(input: &str) -> ProjectionResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ProjectionError::InvalidData(format!("failed to parse projection inputs json: {e}"))
        })
    }
}

/// Exact-decimal variant of [`ProjectionInputs`] for hosts that parse money
/// into decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalProjectionInputs {
    pub initial_capital: Decimal,
    pub periodic_contribution: Decimal,
    pub horizon_months: Decimal,
    pub savings_annual_rate: Decimal,
    pub alternative_annual_rate: Decimal,
    pub real_asset_annual_rate: Decimal,
    pub variable_income_annual_rate: Decimal,
    pub inflation_enabled: bool,
    #[serde(default)]
    pub inflation_annual_rate: Option<Decimal>,
}

impl DecimalProjectionInputs {
    /// Converts to floating-point inputs; the horizon rounds to whole months.
    pub fn to_projection_inputs(&self) -> ProjectionResult<ProjectionInputs> {
        Ok(ProjectionInputs {
            initial_capital: decimal_to_f64(self.initial_capital, "initialCapital")?,
            periodic_contribution: decimal_to_f64(
                self.periodic_contribution,
                "periodicContribution",
            )?,
            horizon_months: decimal_to_months(self.horizon_months),
            savings_annual_rate: decimal_to_f64(self.savings_annual_rate, "savingsAnnualRate")?,
            alternative_annual_rate: decimal_to_f64(
                self.alternative_annual_rate,
                "alternativeAnnualRate",
            )?,
            real_asset_annual_rate: decimal_to_f64(
                self.real_asset_annual_rate,
                "realAssetAnnualRate",
            )?,
            variable_income_annual_rate: decimal_to_f64(
                self.variable_income_annual_rate,
                "variableIncomeAnnualRate",
            )?,
            inflation_enabled: self.inflation_enabled,
            inflation_annual_rate: self
                .inflation_annual_rate
                .map(|rate| decimal_to_f64(rate, "inflationAnnualRate"))
                .transpose()?,
        })
    }
}
