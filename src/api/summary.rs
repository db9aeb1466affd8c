use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{ScenarioKey, deflation_factor};

use super::{ProjectionState, ValueMode};

/// Aggregates shown on the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub value_mode: ValueMode,
    pub horizon_months: u32,
    pub final_values: IndexMap<ScenarioKey, f64>,
    /// Initial capital plus every contribution, deflated like the series.
    pub total_contributed: f64,
    /// Final compound value minus total contributed.
    pub interest_earned: f64,
    /// Final compound value minus final savings-account value.
    pub compound_vs_savings: f64,
}

/// One display card: title, formatted value and optional footnote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub note: Option<&'static str>,
}

impl ProjectionSummary {
    #[must_use]
    pub fn from_state(state: &ProjectionState) -> Self {
        let horizon = state.horizon_months();
        let final_values: IndexMap<ScenarioKey, f64> = ScenarioKey::ALL
            .into_iter()
            .map(|key| {
                let value = state.scenarios().final_value(key).unwrap_or(f64::NAN);
                (key, value)
            })
            .collect();

        let nominal_contributed =
            state.initial_capital() + state.periodic_contribution() * f64::from(horizon);
        let total_contributed = if state.inflation_enabled() {
            nominal_contributed / deflation_factor(state.monthly_inflation_rate(), horizon as usize)
        } else {
            nominal_contributed
        };

        let final_of = |key: ScenarioKey| final_values.get(&key).copied().unwrap_or(f64::NAN);
        let final_compound = final_of(ScenarioKey::CompoundInterest);
        let final_savings = final_of(ScenarioKey::Savings);

        Self {
            value_mode: state.value_mode(),
            horizon_months: horizon,
            interest_earned: final_compound - total_contributed,
            compound_vs_savings: final_compound - final_savings,
            total_contributed,
            final_values,
        }
    }

    #[must_use]
    pub fn final_value(&self, key: ScenarioKey) -> Option<f64> {
        self.final_values.get(&key).copied()
    }

    /// Eight cards in display order: five final values, then the aggregates.
    #[must_use]
    pub fn cards(&self, format_value: &dyn Fn(f64) -> String) -> Vec<SummaryCard> {
        let mut cards: Vec<SummaryCard> = self
            .final_values
            .iter()
            .map(|(key, value)| SummaryCard {
                title: final_value_title(*key),
                value: format_value(*value),
                note: None,
            })
            .collect();

        cards.push(SummaryCard {
            title: "Total contributed",
            value: format_value(self.total_contributed),
            note: Some("Initial amount + contributions."),
        });
        cards.push(SummaryCard {
            title: "Interest earned",
            value: format_value(self.interest_earned),
            note: Some("Based on compound interest."),
        });
        cards.push(SummaryCard {
            title: "Difference: compound vs savings",
            value: format_value(self.compound_vs_savings),
            note: None,
        });
        cards
    }
}

fn final_value_title(key: ScenarioKey) -> &'static str {
    match key {
        ScenarioKey::Savings => "Savings account (final)",
        ScenarioKey::SimpleInterest => "Simple interest (final)",
        ScenarioKey::CompoundInterest => "Compound interest (final)",
        ScenarioKey::RealAsset => "Real asset (simulation)",
        ScenarioKey::VariableIncome => "Variable income (simulation)",
    }
}
