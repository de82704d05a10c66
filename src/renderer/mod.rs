//! CPU-side rendering surface
//!
//! The simulation draws into a [`Surface`]; [`ShapeBatch`] records the frame
//! as triangles and text labels for the host to upload or rasterize.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

/// Drawing target handed to graphics components
pub trait Surface {
    /// Fill an axis-aligned rectangle with top-left corner `min`
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]);

    /// Queue a text label at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32);
}

/// A text label recorded during a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub scale: f32,
}

/// Per-frame recorder of filled shapes and labels
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    labels: Vec<Label>,
    clear_color: [f32; 4],
    drawing: bool,
    frames: u64,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame. The returned guard ends it when dropped, including
    /// during unwinding.
    pub fn begin(&mut self, clear_color: [f32; 4]) -> Frame<'_> {
        debug_assert!(!self.drawing, "frame already in progress");
        self.vertices.clear();
        self.labels.clear();
        self.clear_color = clear_color;
        self.drawing = true;
        Frame { batch: self }
    }

    /// Whether a frame is open
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Number of frames ended so far
    pub fn frames_completed(&self) -> u64 {
        self.frames
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

/// An open frame on a [`ShapeBatch`]
pub struct Frame<'a> {
    batch: &'a mut ShapeBatch,
}

impl Surface for Frame<'_> {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.batch
            .vertices
            .extend_from_slice(&shapes::rect(min, size, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32) {
        self.batch.labels.push(Label {
            text: text.to_string(),
            pos,
            scale,
        });
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.batch.drawing = false;
        self.batch.frames += 1;
    }
}
