use crate::core::{ChartPadding, ScenarioKey};
use crate::error::{ProjectionError, ProjectionResult};
use crate::render::Color;

/// Style and layout constants for every projection chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub savings_color: Color,
    pub simple_interest_color: Color,
    pub compound_interest_color: Color,
    pub real_asset_color: Color,
    pub variable_income_color: Color,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub text_color: Color,
    pub font_size_px: f64,
    pub series_line_width: f64,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    /// Number of intervals between horizontal gridlines (`intervals + 1` lines).
    pub grid_intervals: u32,
    /// Offset of the max/min value labels from the plot's left/top/bottom edges.
    pub value_label_inset_x_px: f64,
    pub value_label_inset_y_px: f64,
    pub legend_origin_x_px: f64,
    pub legend_origin_y_px: f64,
    pub legend_swatch_radius_px: f64,
    pub legend_swatch_offset_x_px: f64,
    pub legend_label_offset_x_px: f64,
    /// Gap after each legend label before the next swatch.
    pub legend_item_gap_px: f64,
    pub single_chart_padding: ChartPadding,
    pub comparison_chart_padding: ChartPadding,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            savings_color: Color::from_rgb8(242, 201, 76),
            simple_interest_color: Color::from_rgb8(125, 211, 252),
            compound_interest_color: Color::from_rgb8(167, 139, 250),
            real_asset_color: Color::from_rgb8(52, 211, 153),
            variable_income_color: Color::from_rgb8(251, 113, 133),
            grid_line_color: Color::from_rgba8(169, 182, 199, 0.16),
            axis_line_color: Color::from_rgba8(169, 182, 199, 0.34),
            text_color: Color::from_rgba8(169, 182, 199, 0.9),
            font_size_px: 12.0,
            series_line_width: 2.0,
            grid_line_width: 1.0,
            axis_line_width: 1.0,
            grid_intervals: 4,
            value_label_inset_x_px: 6.0,
            value_label_inset_y_px: 8.0,
            legend_origin_x_px: 12.0,
            legend_origin_y_px: 16.0,
            legend_swatch_radius_px: 4.0,
            legend_swatch_offset_x_px: 6.0,
            legend_label_offset_x_px: 16.0,
            legend_item_gap_px: 18.0,
            single_chart_padding: ChartPadding::new(28.0, 14.0, 24.0, 54.0),
            comparison_chart_padding: ChartPadding::new(36.0, 14.0, 26.0, 54.0),
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn scenario_color(&self, key: ScenarioKey) -> Color {
        match key {
            ScenarioKey::Savings => self.savings_color,
            ScenarioKey::SimpleInterest => self.simple_interest_color,
            ScenarioKey::CompoundInterest => self.compound_interest_color,
            ScenarioKey::RealAsset => self.real_asset_color,
            ScenarioKey::VariableIncome => self.variable_income_color,
        }
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        for color in [
            self.savings_color,
            self.simple_interest_color,
            self.compound_interest_color,
            self.real_asset_color,
            self.variable_income_color,
            self.grid_line_color,
            self.axis_line_color,
            self.text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("series_line_width", self.series_line_width),
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("legend_swatch_radius_px", self.legend_swatch_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProjectionError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("value_label_inset_x_px", self.value_label_inset_x_px),
            ("value_label_inset_y_px", self.value_label_inset_y_px),
            ("legend_origin_x_px", self.legend_origin_x_px),
            ("legend_origin_y_px", self.legend_origin_y_px),
            ("legend_swatch_offset_x_px", self.legend_swatch_offset_x_px),
            ("legend_label_offset_x_px", self.legend_label_offset_x_px),
            ("legend_item_gap_px", self.legend_item_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProjectionError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        self.single_chart_padding.validate()?;
        self.comparison_chart_padding.validate()
    }
}
