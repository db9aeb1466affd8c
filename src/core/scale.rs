use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ProjectionError, ProjectionResult};

/// Mantissa steps used for rounded axis ceilings.
pub const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Rounds `raw_max` up to a `{1, 2, 5, 10} * 10^k` axis ceiling.
///
/// Non-positive and non-finite input yields `1.0`. Finite input above `1e308`
/// rounds past `f64::MAX` and yields infinity, so the axis ceiling is then
/// non-finite just like an overflowed balance.
#[must_use]
pub fn nice_max(raw_max: f64) -> f64 {
    if !raw_max.is_finite() || raw_max <= 0.0 {
        return 1.0;
    }

    let power = 10f64.powf(raw_max.log10().floor());
    let mantissa = raw_max / power;
    let step = NICE_STEPS
        .into_iter()
        .find(|step| mantissa <= *step)
        .unwrap_or(10.0);
    step * power
}

/// Largest finite value across every supplied series.
///
/// Non-finite samples are ignored; `None` when nothing finite remains.
#[must_use]
pub fn series_max<'a, I>(series: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    series
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

/// Value-axis range shared by every series drawn on one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> ProjectionResult<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ProjectionError::InvalidData(
                "axis bounds must be finite with max > min".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Zero-based bounds whose ceiling is the nice max of all series.
    #[must_use]
    pub fn shared<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let raw_max = series_max(series).unwrap_or(1.0);
        Self {
            min: 0.0,
            max: nice_max(raw_max),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Insets between the surface edge and the plot area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartPadding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ProjectionResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProjectionError::InvalidData(format!(
                    "chart padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Plot rectangle inside a padded viewport with month/value mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: ChartPadding,
}

impl PlotArea {
    pub fn new(viewport: Viewport, padding: ChartPadding) -> ProjectionResult<Self> {
        let viewport = viewport.ensure_valid()?;
        padding.validate()?;
        Ok(Self {
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            padding,
        })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding.top
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.width - self.padding.right
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.height - self.padding.bottom
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        (self.height - self.padding.top - self.padding.bottom).max(0.0)
    }

    /// X position of sample `index` in a series whose last index is `last_index`.
    ///
    /// A single-point series (`last_index == 0`) maps to the left edge.
    #[must_use]
    pub fn x_for_index(self, index: usize, last_index: usize) -> f64 {
        let fraction = if last_index == 0 {
            0.0
        } else {
            index as f64 / last_index as f64
        };
        self.left() + self.inner_width() * fraction
    }

    /// Inverted-Y position of `value` within `bounds`.
    #[must_use]
    pub fn y_for_value(self, value: f64, bounds: AxisBounds) -> f64 {
        self.top() + self.inner_height() * (1.0 - (value - bounds.min) / bounds.span())
    }

    /// Y positions of `intervals + 1` evenly spaced horizontal gridlines.
    #[must_use]
    pub fn gridline_ys(self, intervals: u32) -> Vec<f64> {
        if intervals == 0 {
            return vec![self.top()];
        }
        (0..=intervals)
            .map(|i| self.top() + f64::from(i) * self.inner_height() / f64::from(intervals))
            .collect()
    }
}
