//! A surface that records draw commands instead of rasterizing them.

use spotlight_model::{Point2D, Rgba};

use crate::gradient::RadialGradient;
use crate::surface::{BlendMode, Surface};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetBlendMode(BlendMode),
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    FillCircle {
        center: Point2D,
        radius: f64,
        gradient: RadialGradient,
        blend: BlendMode,
    },
}

/// Records every call made against it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    blend: BlendMode,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blend: BlendMode::SourceOver,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `Clear` calls, which equals the number of frames started.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }

    /// All gradient circle fills, in order.
    pub fn circle_fills(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.commands.push(DrawCommand::SetBlendMode(mode));
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point2D, radius: f64, paint: &RadialGradient) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            gradient: paint.clone(),
            blend: self.blend,
        });
    }
}
