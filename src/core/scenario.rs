use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::series::Series;
use crate::error::{ProjectionError, ProjectionResult};

/// Identifies one of the five projected strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKey {
    /// Regulated savings account, compound.
    #[serde(rename = "poup")]
    Savings,
    /// Alternative instrument under simple interest.
    #[serde(rename = "simple")]
    SimpleInterest,
    /// Alternative instrument under compound interest.
    #[serde(rename = "comp")]
    CompoundInterest,
    #[serde(rename = "real")]
    RealAsset,
    #[serde(rename = "var")]
    VariableIncome,
}

impl ScenarioKey {
    pub const ALL: [Self; 5] = [
        Self::Savings,
        Self::SimpleInterest,
        Self::CompoundInterest,
        Self::RealAsset,
        Self::VariableIncome,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "poup",
            Self::SimpleInterest => "simple",
            Self::CompoundInterest => "comp",
            Self::RealAsset => "real",
            Self::VariableIncome => "var",
        }
    }

    /// Long label used by detail rows and summary cards.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Savings => "Savings account",
            Self::SimpleInterest => "Simple interest",
            Self::CompoundInterest => "Compound interest",
            Self::RealAsset => "Real asset (simulation)",
            Self::VariableIncome => "Variable income (simulation)",
        }
    }

    /// Short label used by chart legends.
    #[must_use]
    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::SimpleInterest => "Simple",
            Self::CompoundInterest => "Compound",
            Self::RealAsset => "Real asset (sim.)",
            Self::VariableIncome => "Variable inc. (sim.)",
        }
    }
}

/// The five scenario series of one projection run, in [`ScenarioKey::ALL`] order.
///
/// Every series has the same length and the same month-0 value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<ScenarioKey, Series>",
    into = "IndexMap<ScenarioKey, Series>"
)]
pub struct ScenarioSet {
    runs: IndexMap<ScenarioKey, Series>,
}

impl ScenarioSet {
    /// Builds a set from one series per key, checking the shared-shape invariant.
    pub fn new(runs: IndexMap<ScenarioKey, Series>) -> ProjectionResult<Self> {
        let mut ordered = IndexMap::with_capacity(ScenarioKey::ALL.len());
        for key in ScenarioKey::ALL {
            let series = runs.get(&key).ok_or_else(|| {
                ProjectionError::InvalidData(format!("scenario `{}` is missing", key.as_str()))
            })?;
            ordered.insert(key, series.clone());
        }
        if runs.len() != ordered.len() {
            return Err(ProjectionError::InvalidData(
                "scenario set contains unknown entries".to_owned(),
            ));
        }

        let mut shape: Option<(usize, u64)> = None;
        for (key, series) in &ordered {
            let Some(first) = series.first() else {
                return Err(ProjectionError::InvalidData(format!(
                    "scenario `{}` must contain month 0",
                    key.as_str()
                )));
            };
            let current = (series.len(), first.to_bits());
            match shape {
                None => shape = Some(current),
                Some(expected) if expected != current => {
                    return Err(ProjectionError::InvalidData(format!(
                        "scenario `{}` does not share length and month-0 value",
                        key.as_str()
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(Self { runs: ordered })
    }

    /// Applies `transform` to every series; the result keeps key order.
    pub fn map_series<F>(&self, mut transform: F) -> ProjectionResult<Self>
    where
        F: FnMut(&Series) -> Series,
    {
        let runs = self
            .runs
            .iter()
            .map(|(key, series)| (*key, transform(series)))
            .collect();
        Self::new(runs)
    }

    #[must_use]
    pub fn get(&self, key: ScenarioKey) -> Option<&Series> {
        self.runs.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScenarioKey, &Series)> {
        self.runs.iter().map(|(key, series)| (*key, series))
    }

    /// Shared series length (`horizon + 1`).
    #[must_use]
    pub fn series_len(&self) -> usize {
        self.runs.values().next().map_or(0, Series::len)
    }

    #[must_use]
    pub fn value_at(&self, key: ScenarioKey, month: usize) -> Option<f64> {
        self.get(key).and_then(|series| series.get(month))
    }

    #[must_use]
    pub fn final_value(&self, key: ScenarioKey) -> Option<f64> {
        self.get(key).and_then(Series::last)
    }
}

impl TryFrom<IndexMap<ScenarioKey, Series>> for ScenarioSet {
    type Error = ProjectionError;

    fn try_from(runs: IndexMap<ScenarioKey, Series>) -> Result<Self, Self::Error> {
        Self::new(runs)
    }
}

impl From<ScenarioSet> for IndexMap<ScenarioKey, Series> {
    fn from(set: ScenarioSet) -> Self {
        set.runs
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{ScenarioKey, ScenarioSet};
    use crate::core::series::Series;

    fn runs_with(len: usize, first: f64) -> IndexMap<ScenarioKey, Series> {
        ScenarioKey::ALL
            .into_iter()
            .map(|key| (key, Series::from_values(vec![first; len])))
            .collect()
    }

    #[test]
    fn set_is_reordered_to_canonical_key_order() {
        let mut runs = runs_with(3, 1.0);
        runs.reverse();
        let set = ScenarioSet::new(runs).expect("valid set");
        let keys: Vec<ScenarioKey> = set.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ScenarioKey::ALL.to_vec());
        assert_eq!(set.series_len(), 3);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut runs = runs_with(3, 1.0);
        runs.insert(ScenarioKey::RealAsset, Series::from_values(vec![1.0; 4]));
        assert!(ScenarioSet::new(runs).is_err());
    }

    #[test]
    fn missing_key_is_rejected() {
        let mut runs = runs_with(3, 1.0);
        runs.shift_remove(&ScenarioKey::VariableIncome);
        assert!(ScenarioSet::new(runs).is_err());
    }
}
