//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
///
/// `min` is the top-left corner; two triangles, six vertices.
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
