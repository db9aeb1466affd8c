use crate::error::ProjectionResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_grid_line_count: usize,
    pub last_series_count: usize,
    pub last_text_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ProjectionResult<()> {
        frame.validate()?;

        self.last_grid_line_count = 0;
        self.last_series_count = 0;
        self.last_text_count = 0;
        self.last_legend_count = 0;
        for command in &frame.commands {
            match command {
                DrawCommand::GridLine(_) => self.last_grid_line_count += 1,
                DrawCommand::Series(_) => self.last_series_count += 1,
                DrawCommand::AxisLabel(_) => self.last_text_count += 1,
                DrawCommand::LegendItem(_) => {
                    self.last_legend_count += 1;
                    self.last_text_count += 1;
                }
                DrawCommand::AxisFrame(_) => {}
            }
        }
        self.frames_rendered += 1;
        Ok(())
    }
}
