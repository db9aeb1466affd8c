use serde::{Deserialize, Serialize};

/// Horizons up to this many months expose every month as a marker.
pub const DENSE_MARKER_MAX_HORIZON_MONTHS: u32 = 36;
/// Marker spacing used beyond the dense horizon.
pub const SPARSE_MARKER_STEP_MONTHS: u32 = 3;

/// Position of a marker inside the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerRole {
    Start,
    End,
    Intermediate,
}

impl MarkerRole {
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Intermediate => "view",
        }
    }
}

/// One interactive checkpoint on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub month: u32,
    pub role: MarkerRole,
}

impl Marker {
    #[must_use]
    pub fn label(self) -> String {
        format!("Month {}", self.month)
    }

    #[must_use]
    pub fn accessible_label(self) -> String {
        format!("Open details for month {}", self.month)
    }
}

/// Ascending, duplicate-free marker months for one horizon.
///
/// Always contains month 0 and the final month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    horizon_months: u32,
    months: Vec<u32>,
}

impl MarkerSet {
    #[must_use]
    pub fn for_horizon(horizon_months: u32) -> Self {
        let step = if horizon_months <= DENSE_MARKER_MAX_HORIZON_MONTHS {
            1
        } else {
            SPARSE_MARKER_STEP_MONTHS
        };

        let mut months: Vec<u32> = (0..=horizon_months).step_by(step as usize).collect();
        if months.last() != Some(&horizon_months) {
            months.push(horizon_months);
        }

        Self {
            horizon_months,
            months,
        }
    }

    #[must_use]
    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    #[must_use]
    pub fn months(&self) -> &[u32] {
        &self.months
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    #[must_use]
    pub fn contains(&self, month: u32) -> bool {
        self.months.binary_search(&month).is_ok()
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.months.iter().map(move |&month| Marker {
            month,
            role: self.role_of(month),
        })
    }

    fn role_of(&self, month: u32) -> MarkerRole {
        if month == 0 {
            MarkerRole::Start
        } else if month == self.horizon_months {
            MarkerRole::End
        } else {
            MarkerRole::Intermediate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerRole, MarkerSet};

    #[test]
    fn sparse_horizon_appends_final_month_off_step() {
        let set = MarkerSet::for_horizon(40);
        assert_eq!(set.months().last(), Some(&40));
        assert!(set.contains(39));
        assert!(!set.contains(38));
        assert_eq!(set.len(), 15);
    }

    #[test]
    fn roles_mark_endpoints() {
        let roles: Vec<MarkerRole> = MarkerSet::for_horizon(2).markers().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MarkerRole::Start, MarkerRole::Intermediate, MarkerRole::End]
        );
    }
}
