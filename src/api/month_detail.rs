use smallvec::SmallVec;

use crate::core::ScenarioKey;

use super::ProjectionState;

/// One scenario line of the month detail popover.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDetailRow {
    pub key: ScenarioKey,
    pub label: &'static str,
    pub value: f64,
    pub formatted: String,
}

/// Per-month values of every scenario for the timeline detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDetail {
    pub month: u32,
    pub title: String,
    pub rows: SmallVec<[MonthDetailRow; 5]>,
}

impl MonthDetail {
    /// `None` when `month` lies past the projected horizon.
    #[must_use]
    pub fn from_state(
        state: &ProjectionState,
        month: u32,
        format_value: &dyn Fn(f64) -> String,
    ) -> Option<Self> {
        if month > state.horizon_months() {
            return None;
        }

        let index = month as usize;
        let rows = state
            .scenarios()
            .iter()
            .filter_map(|(key, series)| {
                let value = series.get(index)?;
                Some(MonthDetailRow {
                    key,
                    label: key.display_name(),
                    value,
                    formatted: format_value(value),
                })
            })
            .collect();

        Some(Self {
            month,
            title: format!("Month {month}"),
            rows,
        })
    }

    #[must_use]
    pub fn value(&self, key: ScenarioKey) -> Option<f64> {
        self.rows.iter().find(|row| row.key == key).map(|row| row.value)
    }
}
