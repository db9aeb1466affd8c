//! savings-projection: month-by-month savings projections and their charts.
//!
//! The crate splits into a pure numeric layer (`core`), a backend-agnostic
//! draw-command model (`render`) and a session that ties both together for a
//! host UI (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ProjectionInputs, ProjectionSession};
pub use error::{ProjectionError, ProjectionResult, ValidationError, ValidationErrorKind};
