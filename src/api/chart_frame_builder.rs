use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, ChartPadding, PlotArea, ScenarioKey, SurfaceLayout};
use crate::error::ProjectionResult;
use crate::render::{
    CirclePrimitive, Color, DrawCommand, LegendItemPrimitive, LinePrimitive, PolylinePrimitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;
use super::layout_helpers::estimate_label_text_width_px;

/// The chart surfaces a projection feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Savings,
    SimpleInterest,
    CompoundInterest,
    /// Every scenario on one shared axis, with a legend.
    Comparison,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [
        Self::Savings,
        Self::SimpleInterest,
        Self::CompoundInterest,
        Self::Comparison,
    ];

    #[must_use]
    pub fn scenarios(self) -> &'static [ScenarioKey] {
        match self {
            Self::Savings => &[ScenarioKey::Savings],
            Self::SimpleInterest => &[ScenarioKey::SimpleInterest],
            Self::CompoundInterest => &[ScenarioKey::CompoundInterest],
            Self::Comparison => &ScenarioKey::ALL,
        }
    }

    #[must_use]
    pub fn shows_legend(self) -> bool {
        matches!(self, Self::Comparison)
    }

    #[must_use]
    pub fn padding(self, style: &RenderStyle) -> ChartPadding {
        if self.shows_legend() {
            style.comparison_chart_padding
        } else {
            style.single_chart_padding
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::SimpleInterest => "simple-interest",
            Self::CompoundInterest => "compound-interest",
            Self::Comparison => "comparison",
        }
    }
}

/// One series to plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSeries<'a> {
    pub label: &'a str,
    pub color: Color,
    pub values: &'a [f64],
}

/// Everything a line chart needs besides the surface and style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChartSpec<'a> {
    pub series: &'a [ChartSeries<'a>],
    pub padding: ChartPadding,
    pub show_legend: bool,
}

/// Lays out a complete line chart as draw commands.
///
/// All series share one zero-based [`AxisBounds`]. Paint order is gridlines,
/// axis frame, value labels, series, then legend.
pub fn build_line_chart_frame(
    spec: &LineChartSpec<'_>,
    layout: SurfaceLayout,
    style: &RenderStyle,
    format_value: &dyn Fn(f64) -> String,
) -> ProjectionResult<RenderFrame> {
    style.validate()?;
    let plot = PlotArea::new(layout.logical, spec.padding)?;
    let bounds = AxisBounds::shared(spec.series.iter().map(|series| series.values));

    let mut frame = RenderFrame::new(layout);
    push_axes(&mut frame, plot, bounds, style, format_value);
    for series in spec.series {
        if let Some(polyline) = series_polyline(series, plot, bounds, style) {
            frame.push(DrawCommand::Series(polyline));
        }
    }
    if spec.show_legend {
        push_legend(&mut frame, spec.series, style);
    }

    Ok(frame)
}

fn push_axes(
    frame: &mut RenderFrame,
    plot: PlotArea,
    bounds: AxisBounds,
    style: &RenderStyle,
    format_value: &dyn Fn(f64) -> String,
) {
    for y in plot.gridline_ys(style.grid_intervals) {
        frame.push(DrawCommand::GridLine(LinePrimitive::new(
            plot.left(),
            y,
            plot.right(),
            y,
            style.grid_line_width,
            style.grid_line_color,
        )));
    }

    frame.push(DrawCommand::AxisFrame(PolylinePrimitive::new(
        vec![
            (plot.left(), plot.top()),
            (plot.left(), plot.bottom()),
            (plot.right(), plot.bottom()),
        ],
        style.axis_line_width,
        style.axis_line_color,
    )));

    let label_x = plot.left() + style.value_label_inset_x_px;
    for (value, y) in [
        (bounds.max, plot.top() + style.value_label_inset_y_px),
        (bounds.min, plot.bottom() - style.value_label_inset_y_px),
    ] {
        frame.push(DrawCommand::AxisLabel(TextPrimitive::new(
            format_value(value),
            label_x,
            y,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        )));
    }
}

fn series_polyline(
    series: &ChartSeries<'_>,
    plot: PlotArea,
    bounds: AxisBounds,
    style: &RenderStyle,
) -> Option<PolylinePrimitive> {
    let last_index = series.values.len().checked_sub(1)?;
    let points = series
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                plot.x_for_index(index, last_index),
                plot.y_for_value(*value, bounds),
            )
        })
        .collect();
    Some(PolylinePrimitive::new(points, style.series_line_width, series.color).rounded())
}

fn push_legend(frame: &mut RenderFrame, series: &[ChartSeries<'_>], style: &RenderStyle) {
    let y = style.legend_origin_y_px;
    let mut x = style.legend_origin_x_px;
    for entry in series {
        let swatch = CirclePrimitive::new(
            x + style.legend_swatch_offset_x_px,
            y,
            style.legend_swatch_radius_px,
            entry.color,
        );
        let label = TextPrimitive::new(
            entry.label,
            x + style.legend_label_offset_x_px,
            y,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        );
        frame.push(DrawCommand::LegendItem(LegendItemPrimitive { swatch, label }));

        x += style.legend_label_offset_x_px
            + estimate_label_text_width_px(entry.label, style.font_size_px)
            + style.legend_item_gap_px;
    }
}
