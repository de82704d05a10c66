//! Capability contracts every entity composes
//!
//! An entity owns one input, one physics and one graphics component. Paddle
//! and ball differ only in which variants are installed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, EntityId, Side};
use crate::renderer::Surface;

/// Desired vertical movement. Up is toward y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the y displacement for this direction
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Heading of an entity whose physics tracks one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Travel {
    /// Travel angle (radians)
    pub angle: f32,
    /// Direction vector; signs carry the travel direction
    pub direction: Vec2,
}

/// Table services available to components during an update
pub trait Playfield {
    /// Playfield width and height
    fn bounds(&self) -> Vec2;

    /// Look up another entity's body
    fn body(&self, id: EntityId) -> Option<&Body>;

    /// Test `body` against every other entity. For each overlap, `on_hit`
    /// runs with (mover, other) and the other entity's handler runs with
    /// (other, mover).
    fn resolve_collisions(&mut self, body: &mut Body, on_hit: &mut dyn FnMut(&mut Body, &Body));

    /// The ball left the table; `scorer` gets the point
    fn goal_scored(&mut self, ball: EntityId, scorer: Side);

    /// The ball bounced off the top or bottom wall
    fn wall_bounce(&mut self, ball: EntityId);
}

/// Produces a movement intent for its owner each frame
pub trait InputComponent {
    fn intent(&mut self, body: &Body, field: &dyn Playfield) -> Option<Direction>;
}

/// Movement and collision response
pub trait PhysicsComponent {
    fn update(
        &mut self,
        body: &mut Body,
        intent: Option<Direction>,
        field: &mut dyn Playfield,
        dt: f32,
    );

    fn collision(&mut self, body: &mut Body, other: &Body);

    fn travel(&self) -> Option<Travel> {
        None
    }
}

/// Draws an entity's current bounds
pub trait GraphicsComponent {
    fn render(&self, body: &Body, surface: &mut dyn Surface);
}

/// Input for entities moved purely by physics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInput;

impl InputComponent for NullInput {
    fn intent(&mut self, _body: &Body, _field: &dyn Playfield) -> Option<Direction> {
        None
    }
}

/// Filled rectangle over the entity bounds
#[derive(Debug, Clone, Copy)]
pub struct RectangleGraphics {
    pub color: [f32; 4],
}

impl RectangleGraphics {
    pub fn new(color: [f32; 4]) -> Self {
        Self { color }
    }
}

impl GraphicsComponent for RectangleGraphics {
    fn render(&self, body: &Body, surface: &mut dyn Surface) {
        surface.fill_rect(body.pos, body.size(), self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{ShapeBatch, colors};
    use crate::sim::entity::{EntityKind, Size};

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Up.sign(), -1.0);
        assert_eq!(Direction::Down.sign(), 1.0);
    }

    #[test]
    fn test_rectangle_graphics_draws_bounds() {
        let body = Body::new(
            EntityId(3),
            EntityKind::Ball,
            Vec2::new(5.0, 6.0),
            Size::new(20.0, 20.0).unwrap(),
            0.0,
        );
        let mut batch = ShapeBatch::new();
        {
            let mut frame = batch.begin(colors::BACKGROUND);
            RectangleGraphics::new(colors::BALL).render(&body, &mut frame);
        }
        let verts = batch.vertices();
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [5.0, 6.0]);
        assert_eq!(verts[5].position, [25.0, 26.0]);
        assert_eq!(verts[0].color, colors::BALL);
    }
}
