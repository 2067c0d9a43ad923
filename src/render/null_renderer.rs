use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// Per-kind command counts of the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub rects: usize,
    pub lines: usize,
    pub polylines: usize,
    pub sectors: usize,
    pub arcs: usize,
    pub texts: usize,
    pub masked_fills: usize,
}

impl RenderStats {
    #[must_use]
    pub fn from_frame(frame: &RenderFrame) -> Self {
        let mut stats = Self::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Rect(_) => stats.rects += 1,
                DrawCommand::Line(_) => stats.lines += 1,
                DrawCommand::Polyline(_) => stats.polylines += 1,
                DrawCommand::Sector(_) => stats.sectors += 1,
                DrawCommand::Arc(_) => stats.arcs += 1,
                DrawCommand::Text(_) => stats.texts += 1,
                DrawCommand::MaskedFill(_) => stats.masked_fills += 1,
            }
        }
        stats
    }
}

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so invalid geometry surfaces before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stats: RenderStats,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_stats = RenderStats::from_frame(frame);
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
