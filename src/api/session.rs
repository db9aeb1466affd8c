use tracing::{debug, trace, warn};

use crate::core::{MarkerSet, ScenarioKey, Series, SurfaceLayout};
use crate::error::{ProjectionError, ProjectionResult};
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartKind, ChartSeries, LineChartSpec, MonthDetail, ProjectionInputs, ProjectionSnapshot,
    ProjectionState, ProjectionSummary, RenderStyle, SummaryCard, ValueFormatterFn, ValueMode,
    build_line_chart_frame, default_value_formatter,
};

/// Owns the latest projection and serves every derived view from it.
///
/// The session is either empty or holds one complete [`ProjectionState`].
/// `compute` swaps in a new state only after it was fully built, so a
/// rejected run leaves the previous result untouched.
pub struct ProjectionSession {
    state: Option<ProjectionState>,
    style: RenderStyle,
    value_formatter: ValueFormatterFn,
    comparison_visible: bool,
}

impl Default for ProjectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: None,
            style: RenderStyle::default(),
            value_formatter: default_value_formatter(),
            comparison_visible: true,
        }
    }

    pub fn with_style(style: RenderStyle) -> ProjectionResult<Self> {
        let mut session = Self::new();
        session.set_style(style)?;
        Ok(session)
    }

    /// Runs a new projection and replaces the current state on success.
    pub fn compute(&mut self, inputs: &ProjectionInputs) -> ProjectionResult<&ProjectionState> {
        let next = match ProjectionState::compute(inputs) {
            Ok(next) => next,
            Err(err) => {
                if let ProjectionError::Validation(validation) = &err {
                    warn!(
                        kind = ?validation.kind(),
                        error = %validation,
                        keeps_previous = self.state.is_some(),
                        "rejected projection inputs"
                    );
                }
                return Err(err);
            }
        };

        debug!(
            horizon_months = next.horizon_months(),
            inflation_enabled = next.inflation_enabled(),
            final_compound = next
                .scenarios()
                .final_value(ScenarioKey::CompoundInterest)
                .unwrap_or(f64::NAN),
            "computed projection"
        );
        Ok(self.state.insert(next))
    }

    /// Drops the current projection.
    pub fn reset(&mut self) {
        if self.state.take().is_some() {
            debug!("reset projection session");
        }
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&ProjectionState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn value_mode(&self) -> Option<ValueMode> {
        self.state.as_ref().map(ProjectionState::value_mode)
    }

    #[must_use]
    pub fn series(&self, key: ScenarioKey) -> Option<&Series> {
        self.state.as_ref().and_then(|state| state.series(key))
    }

    #[must_use]
    pub fn markers(&self) -> Option<MarkerSet> {
        self.state
            .as_ref()
            .map(|state| MarkerSet::for_horizon(state.horizon_months()))
    }

    #[must_use]
    pub fn month_detail(&self, month: u32) -> Option<MonthDetail> {
        let state = self.state.as_ref()?;
        MonthDetail::from_state(state, month, self.value_formatter.as_ref())
    }

    #[must_use]
    pub fn summary(&self) -> Option<ProjectionSummary> {
        self.state.as_ref().map(ProjectionSummary::from_state)
    }

    /// Summary cards, empty while no projection is held.
    #[must_use]
    pub fn summary_cards(&self) -> Vec<SummaryCard> {
        self.summary()
            .map(|summary| summary.cards(self.value_formatter.as_ref()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<ProjectionSnapshot> {
        self.state.as_ref().map(ProjectionSnapshot::from_state)
    }

    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) -> ProjectionResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    pub fn set_value_formatter(&mut self, formatter: ValueFormatterFn) {
        self.value_formatter = formatter;
    }

    pub fn clear_value_formatter(&mut self) {
        self.value_formatter = default_value_formatter();
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        (self.value_formatter)(value)
    }

    #[must_use]
    pub fn comparison_visible(&self) -> bool {
        self.comparison_visible
    }

    /// Shows or hides the comparison chart; a hidden chart renders cleared.
    pub fn set_comparison_visible(&mut self, visible: bool) {
        self.comparison_visible = visible;
    }

    /// Builds the full frame for one chart from the cached projection.
    ///
    /// Never re-runs the simulation, so it is safe to call on every resize.
    /// Returns a clear-only frame while empty or when the chart is hidden.
    pub fn build_chart_frame(
        &self,
        kind: ChartKind,
        layout: SurfaceLayout,
    ) -> ProjectionResult<RenderFrame> {
        layout.logical.ensure_valid()?;
        let Some(state) = self.state.as_ref() else {
            return Ok(RenderFrame::cleared(layout));
        };
        if kind == ChartKind::Comparison && !self.comparison_visible {
            return Ok(RenderFrame::cleared(layout));
        }

        let series: Vec<ChartSeries<'_>> = kind
            .scenarios()
            .iter()
            .filter_map(|key| {
                state.series(*key).map(|series| ChartSeries {
                    label: key.legend_label(),
                    color: self.style.scenario_color(*key),
                    values: series.values(),
                })
            })
            .collect();
        let spec = LineChartSpec {
            series: &series,
            padding: kind.padding(&self.style),
            show_legend: kind.shows_legend(),
        };

        let frame = build_line_chart_frame(
            &spec,
            layout,
            &self.style,
            self.value_formatter.as_ref(),
        )?;
        trace!(
            chart = kind.as_str(),
            commands = frame.commands.len(),
            width = layout.logical.width,
            height = layout.logical.height,
            "built chart frame"
        );
        Ok(frame)
    }

    pub fn render_chart<R: Renderer>(
        &self,
        kind: ChartKind,
        layout: SurfaceLayout,
        renderer: &mut R,
    ) -> ProjectionResult<()> {
        let frame = self.build_chart_frame(kind, layout)?;
        renderer.render(&frame)
    }
}
