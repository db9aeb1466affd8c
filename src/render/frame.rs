use serde::{Deserialize, Serialize};

use crate::core::{SurfaceLayout, Viewport};
use crate::error::ProjectionResult;
use crate::render::{
    DrawCommand, LegendItemPrimitive, LinePrimitive, PolylinePrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one full chart redraw.
///
/// Backends clear the whole surface before replaying `commands` in order, so
/// a frame never depends on what was drawn before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub layout: SurfaceLayout,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            layout,
            commands: Vec::new(),
        }
    }

    /// Frame that only clears the surface.
    #[must_use]
    pub fn cleared(layout: SurfaceLayout) -> Self {
        Self::new(layout)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.layout.logical
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn with_command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        self.layout.logical.ensure_valid()?;
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::GridLine(line) => Some(line),
            _ => None,
        })
    }

    pub fn axis_frames(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::AxisFrame(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn axis_labels(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::AxisLabel(text) => Some(text),
            _ => None,
        })
    }

    pub fn series(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Series(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn legend_items(&self) -> impl Iterator<Item = &LegendItemPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::LegendItem(item) => Some(item),
            _ => None,
        })
    }
}
