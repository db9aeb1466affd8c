use serde::{Deserialize, Serialize};

/// Month-indexed balances `0..=horizon`; index 0 is the balance before accrual.
///
/// Serialized as a JSON array where overflowed samples are written as the
/// tokens `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(#[serde(with = "samples")] Vec<f64>);

impl Series {
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of simulated months (`len - 1`).
    #[must_use]
    pub fn horizon_months(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, month: usize) -> Option<f64> {
        self.0.get(month).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

mod samples {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Sample {
        Finite(f64),
        NonFinite(NonFinite),
    }

    #[derive(Serialize, Deserialize)]
    enum NonFinite {
        #[serde(rename = "inf")]
        PositiveInfinity,
        #[serde(rename = "-inf")]
        NegativeInfinity,
        #[serde(rename = "NaN")]
        NotANumber,
    }

    impl From<f64> for Sample {
        fn from(value: f64) -> Self {
            if value.is_finite() {
                Self::Finite(value)
            } else if value.is_nan() {
                Self::NonFinite(NonFinite::NotANumber)
            } else if value.is_sign_positive() {
                Self::NonFinite(NonFinite::PositiveInfinity)
            } else {
                Self::NonFinite(NonFinite::NegativeInfinity)
            }
        }
    }

    impl From<Sample> for f64 {
        fn from(sample: Sample) -> Self {
            match sample {
                Sample::Finite(value) => value,
                Sample::NonFinite(NonFinite::PositiveInfinity) => f64::INFINITY,
                Sample::NonFinite(NonFinite::NegativeInfinity) => f64::NEG_INFINITY,
                Sample::NonFinite(NonFinite::NotANumber) => f64::NAN,
            }
        }
    }

    pub(super) fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().copied().map(Sample::from))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let samples = Vec::<Sample>::deserialize(deserializer)?;
        Ok(samples.into_iter().map(f64::from).collect())
    }
}

/// Accrual convention used to grow a balance month by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccrualModel {
    /// Contribution added before the month accrues, interest re-earns interest.
    Compound,
    /// Interest accrues on cumulative contributed principal only.
    SimpleInterest,
}

/// Inputs of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub initial_capital: f64,
    pub periodic_contribution: f64,
    pub horizon_months: u32,
    pub monthly_rate: f64,
}

impl SimulationParams {
    #[must_use]
    pub fn new(
        initial_capital: f64,
        periodic_contribution: f64,
        horizon_months: u32,
        monthly_rate: f64,
    ) -> Self {
        Self {
            initial_capital,
            periodic_contribution,
            horizon_months,
            monthly_rate,
        }
    }

    #[must_use]
    pub fn with_monthly_rate(mut self, monthly_rate: f64) -> Self {
        self.monthly_rate = monthly_rate;
        self
    }
}

/// Runs one simulation under the requested accrual model.
#[must_use]
pub fn simulate(params: SimulationParams, model: AccrualModel) -> Series {
    match model {
        AccrualModel::Compound => simulate_compound(params),
        AccrualModel::SimpleInterest => simulate_simple_interest(params),
    }
}

/// Annuity-due compounding: `b[m] = (b[m-1] + contribution) * (1 + rate)`.
#[must_use]
pub fn simulate_compound(params: SimulationParams) -> Series {
    let horizon = params.horizon_months as usize;
    let growth = 1.0 + params.monthly_rate;

    let mut balances = Vec::with_capacity(horizon + 1);
    let mut balance = params.initial_capital;
    balances.push(balance);
    for _ in 1..=horizon {
        balance = (balance + params.periodic_contribution) * growth;
        balances.push(balance);
    }

    Series(balances)
}

/// Simple interest on the running contributed principal.
///
/// The current month's contribution is part of the principal that accrues in
/// that same month.
#[must_use]
pub fn simulate_simple_interest(params: SimulationParams) -> Series {
    let horizon = params.horizon_months as usize;

    let mut balances = Vec::with_capacity(horizon + 1);
    let mut balance = params.initial_capital;
    let mut total_contributed = params.initial_capital;
    balances.push(balance);
    for _ in 1..=horizon {
        total_contributed += params.periodic_contribution;
        balance += params.periodic_contribution + total_contributed * params.monthly_rate;
        balances.push(balance);
    }

    Series(balances)
}
