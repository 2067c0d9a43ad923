use crate::core::Rect;
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, LinePrimitive, MaskedFillPrimitive, PolylinePrimitive, RectPrimitive,
    SectorPrimitive, TextPrimitive,
};

/// One drawing operation; backends execute them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Sector(SectorPrimitive),
    Arc(ArcPrimitive),
    Text(TextPrimitive),
    MaskedFill(MaskedFillPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Sector(sector) => sector.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Text(text) => text.validate(),
            Self::MaskedFill(fill) => fill.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: Rect,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn with_command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.bounds.validate_drawable()?;
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn sectors(&self) -> impl Iterator<Item = &SectorPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Sector(sector) => Some(sector),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn masked_fills(&self) -> impl Iterator<Item = &MaskedFillPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::MaskedFill(fill) => Some(fill),
            _ => None,
        })
    }
}
