pub mod inflation;
pub mod primitives;
pub mod rate;
pub mod scale;
pub mod scenario;
pub mod series;
pub mod timeline;
pub mod types;

pub use inflation::{deflate_series, deflate_series_monthly, deflate_value, deflation_factor};
pub use primitives::{decimal_to_f64, decimal_to_months};
pub use rate::annual_to_monthly_rate;
pub use scale::{AxisBounds, ChartPadding, NICE_STEPS, PlotArea, nice_max, series_max};
pub use scenario::{ScenarioKey, ScenarioSet};
pub use series::{
    AccrualModel, Series, SimulationParams, simulate, simulate_compound, simulate_simple_interest,
};
pub use timeline::{
    DENSE_MARKER_MAX_HORIZON_MONTHS, Marker, MarkerRole, MarkerSet, SPARSE_MARKER_STEP_MONTHS,
};
pub use types::{SurfaceLayout, Viewport};
