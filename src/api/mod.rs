mod chart_frame_builder;
mod inputs;
mod json_contract;
mod label_format;
mod layout_helpers;
mod month_detail;
mod projection_state;
mod render_style;
mod session;
mod summary;
mod validation;

pub use chart_frame_builder::{ChartKind, ChartSeries, LineChartSpec, build_line_chart_frame};
pub use inputs::{DecimalProjectionInputs, ProjectionInputs};
pub use json_contract::{
    PROJECTION_SNAPSHOT_JSON_SCHEMA_V1, ProjectionSnapshot, ProjectionSnapshotJsonContractV1,
};
pub use label_format::{
    MISSING_VALUE_TEXT, ValueFormatterFn, default_value_formatter, format_value_plain,
};
pub use month_detail::{MonthDetail, MonthDetailRow};
pub use projection_state::{ProjectionState, ValueMode};
pub use render_style::RenderStyle;
pub use session::ProjectionSession;
pub use summary::{ProjectionSummary, SummaryCard};
pub use validation::{MAX_HORIZON_MONTHS, MAX_INFLATION_ANNUAL_RATE, validate_projection_inputs};
