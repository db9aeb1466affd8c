mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, DrawCommand, LegendItemPrimitive, LineCap, LineJoin, LinePrimitive,
    PolylinePrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ProjectionResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from projection and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ProjectionResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
