use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AccrualModel, ScenarioKey, ScenarioSet, Series, SimulationParams, annual_to_monthly_rate,
    deflate_series_monthly, simulate,
};
use crate::error::{ProjectionError, ProjectionResult, ValidationError};

use super::{
    MAX_HORIZON_MONTHS, MAX_INFLATION_ANNUAL_RATE, ProjectionInputs, validate_projection_inputs,
};

/// Whether displayed values are nominal or deflated to month-0 purchasing power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueMode {
    Nominal,
    InflationAdjusted,
}

impl ValueMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nominal => "Nominal values",
            Self::InflationAdjusted => "Inflation-adjusted values",
        }
    }
}

/// Immutable result of one successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionState {
    horizon_months: u32,
    inflation_enabled: bool,
    monthly_inflation_rate: f64,
    initial_capital: f64,
    periodic_contribution: f64,
    scenarios: ScenarioSet,
}

impl ProjectionState {
    /// Validates `inputs` and runs every scenario.
    ///
    /// Nothing is simulated when validation fails.
    pub fn compute(inputs: &ProjectionInputs) -> ProjectionResult<Self> {
        let inputs = validate_projection_inputs(inputs)?;
        let base = SimulationParams::new(
            inputs.initial_capital,
            inputs.periodic_contribution,
            inputs.horizon_months,
            0.0,
        );

        let mut runs: IndexMap<ScenarioKey, Series> = IndexMap::with_capacity(5);
        for key in ScenarioKey::ALL {
            let (annual_rate, model) = scenario_run(&inputs, key);
            let params = base.with_monthly_rate(annual_to_monthly_rate(annual_rate));
            runs.insert(key, simulate(params, model));
        }
        let nominal = ScenarioSet::new(runs)?;

        let (monthly_inflation_rate, scenarios) = match inputs.active_inflation_rate() {
            Some(annual_rate) => {
                let monthly = annual_to_monthly_rate(annual_rate);
                let real = nominal.map_series(|series| deflate_series_monthly(series, monthly))?;
                (monthly, real)
            }
            None => (0.0, nominal),
        };

        Ok(Self {
            horizon_months: inputs.horizon_months,
            inflation_enabled: inputs.inflation_enabled,
            monthly_inflation_rate,
            initial_capital: inputs.initial_capital,
            periodic_contribution: inputs.periodic_contribution,
            scenarios,
        })
    }

    /// Re-checks a deserialized state against the rules `compute` enforces.
    pub(crate) fn validate_restored(&self) -> ProjectionResult<()> {
        let amounts = [
            ("initialCapital", self.initial_capital),
            ("periodicContribution", self.periodic_contribution),
        ];
        if let Some((field, _)) = amounts.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ValidationError::InvalidNumber { field }.into());
        }
        if let Some((field, _)) = amounts.into_iter().find(|(_, value)| *value < 0.0) {
            return Err(ValidationError::NegativeValue { field }.into());
        }
        if !(1..=MAX_HORIZON_MONTHS).contains(&self.horizon_months) {
            return Err(ValidationError::HorizonOutOfRange {
                horizon_months: self.horizon_months,
            }
            .into());
        }

        let rate = self.monthly_inflation_rate;
        let rate_is_consistent = if self.inflation_enabled {
            rate.is_finite()
                && rate >= 0.0
                && rate <= annual_to_monthly_rate(MAX_INFLATION_ANNUAL_RATE)
        } else {
            rate == 0.0
        };
        if !rate_is_consistent {
            return Err(ProjectionError::InvalidData(format!(
                "monthly inflation rate {rate} does not match inflation_enabled={}",
                self.inflation_enabled
            )));
        }

        let expected_len = self.horizon_months as usize + 1;
        if self.scenarios.series_len() != expected_len {
            return Err(ProjectionError::InvalidData(format!(
                "snapshot series must contain {expected_len} months"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    #[must_use]
    pub fn inflation_enabled(&self) -> bool {
        self.inflation_enabled
    }

    /// Monthly inflation rate used for deflation; `0.0` in nominal mode.
    #[must_use]
    pub fn monthly_inflation_rate(&self) -> f64 {
        self.monthly_inflation_rate
    }

    /// Nominal initial capital as entered.
    #[must_use]
    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    /// Nominal monthly contribution as entered.
    #[must_use]
    pub fn periodic_contribution(&self) -> f64 {
        self.periodic_contribution
    }

    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        if self.inflation_enabled {
            ValueMode::InflationAdjusted
        } else {
            ValueMode::Nominal
        }
    }

    /// Display series (deflated when inflation adjustment is active).
    #[must_use]
    pub fn scenarios(&self) -> &ScenarioSet {
        &self.scenarios
    }

    #[must_use]
    pub fn series(&self, key: ScenarioKey) -> Option<&Series> {
        self.scenarios.get(key)
    }
}

fn scenario_run(inputs: &ProjectionInputs, key: ScenarioKey) -> (f64, AccrualModel) {
    match key {
        ScenarioKey::Savings => (inputs.savings_annual_rate, AccrualModel::Compound),
        ScenarioKey::SimpleInterest => {
            (inputs.alternative_annual_rate, AccrualModel::SimpleInterest)
        }
        ScenarioKey::CompoundInterest => (inputs.alternative_annual_rate, AccrualModel::Compound),
        ScenarioKey::RealAsset => (inputs.real_asset_annual_rate, AccrualModel::Compound),
        ScenarioKey::VariableIncome => (inputs.variable_income_annual_rate, AccrualModel::Compound),
    }
}
