//! Drawing seam between windows and the host draw list.
//!
//! Windows draw through [`DrawSurface`]. [`UIRenderer`] is the in-process
//! implementation: it records every call as a [`RenderCommand`] and can
//! tessellate the recorded shapes into [`UIVertex`] triangles for upload.

use std::f32::consts::TAU;

use crate::layout::{Rect, Vec2};
use crate::style::Color;

/// Sink for filled shapes with alpha compositing.
///
/// Only the two fill operations are required. Text and clipping default to
/// no-ops so minimal surfaces (counters, test doubles) stay tiny.
pub trait DrawSurface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, bounds: Rect, color: Color);

    /// Fills a disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draws a single line of text with its top-left corner at `position`.
    fn text(&mut self, _position: Vec2, _color: Color, _size: f32, _text: &str) {}

    /// Restricts subsequent drawing to `bounds`.
    fn push_clip(&mut self, _bounds: Rect) {}

    /// Removes the most recent clip.
    fn pop_clip(&mut self) {}
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Filled disc.
    Circle {
        /// Centre.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Top-left corner.
        position: Vec2,
        /// Text color.
        color: Color,
        /// Font size.
        size: f32,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Recording draw surface.
#[derive(Debug)]
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
}

impl UIRenderer {
    /// Segments used when tessellating discs by default.
    pub const DEFAULT_CIRCLE_SEGMENTS: usize = 12;

    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
            clip_stack: Vec::with_capacity(8),
        }
    }

    /// Begins a new frame, discarding the previous frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Commands recorded since the last `begin_frame`.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of recorded disc fills.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Circle { .. }))
            .count()
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Converts recorded shapes into a triangle list.
    ///
    /// Rects become two triangles, discs become a fan of `circle_segments`
    /// triangles (minimum 3). Text and clip commands produce no geometry.
    #[must_use]
    pub fn tessellate(&self, circle_segments: usize) -> Vec<UIVertex> {
        let segments = circle_segments.max(3);
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);

        for command in &self.commands {
            match command {
                RenderCommand::Rect { bounds, color } => {
                    let c = color.to_array();
                    let (l, t, r, b) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
                    vertices.extend_from_slice(&[
                        UIVertex::new(l, t, c),
                        UIVertex::new(r, t, c),
                        UIVertex::new(r, b, c),
                        UIVertex::new(l, t, c),
                        UIVertex::new(r, b, c),
                        UIVertex::new(l, b, c),
                    ]);
                }
                RenderCommand::Circle { center, radius, color } => {
                    let c = color.to_array();
                    #[allow(clippy::cast_precision_loss)]
                    let step = TAU / segments as f32;
                    for i in 0..segments {
                        #[allow(clippy::cast_precision_loss)]
                        let a0 = step * i as f32;
                        let p0 = *center + Vec2::from_angle(a0, *radius);
                        let p1 = *center + Vec2::from_angle(a0 + step, *radius);
                        vertices.extend_from_slice(&[
                            UIVertex::new(center.x, center.y, c),
                            UIVertex::new(p0.x, p0.y, c),
                            UIVertex::new(p1.x, p1.y, c),
                        ]);
                    }
                }
                RenderCommand::Text { .. } | RenderCommand::PushClip { .. } | RenderCommand::PopClip => {}
            }
        }

        vertices
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for UIRenderer {
    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.commands.push(RenderCommand::Rect { bounds, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(RenderCommand::Circle { center, radius, color });
    }

    fn text(&mut self, position: Vec2, color: Color, size: f32, text: &str) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            position,
            color,
            size,
        });
    }

    fn push_clip(&mut self, bounds: Rect) {
        // Nested clips intersect with the enclosing one
        let actual_clip = match self.clip_stack.last() {
            Some(current) => current.intersection(&bounds).unwrap_or(Rect::ZERO),
            None => bounds,
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(RenderCommand::PopClip);
        }
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_records_fills() {
        let mut renderer = UIRenderer::new();

        renderer.begin_frame();
        renderer.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE);
        renderer.fill_circle(Vec2::new(5.0, 5.0), 2.0, Color::GOLD);

        assert_eq!(renderer.command_count(), 2);
        assert_eq!(renderer.circle_count(), 1);

        renderer.begin_frame();
        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_clip_stack() {
        let mut renderer = UIRenderer::new();
        renderer.begin_frame();

        renderer.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        renderer.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(renderer.current_clip(), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));

        renderer.pop_clip();
        renderer.pop_clip();
        assert!(renderer.current_clip().is_none());

        // Unbalanced pop records nothing
        renderer.pop_clip();
        assert_eq!(renderer.command_count(), 4);
    }

    #[test]
    fn test_tessellate_vertex_counts() {
        let mut renderer = UIRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        renderer.fill_circle(Vec2::ZERO, 4.0, Color::WHITE);
        renderer.text(Vec2::ZERO, Color::WHITE, 14.0, "ignored");

        assert_eq!(renderer.tessellate(8).len(), 6 + 8 * 3);
        // Degenerate segment counts are raised to a triangle
        assert_eq!(renderer.tessellate(1).len(), 6 + 3 * 3);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let mut renderer = UIRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        let vertices = renderer.tessellate(UIRenderer::DEFAULT_CIRCLE_SEGMENTS);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * std::mem::size_of::<UIVertex>());
    }
}
