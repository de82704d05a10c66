//! Entities: positioned, sized bodies composed of three capabilities

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::aabb_overlap;
use super::components::{
    Direction, GraphicsComponent, InputComponent, PhysicsComponent, Playfield, Travel,
};
use crate::renderer::Surface;
use crate::{Error, Result};

/// Stable handle to an entity in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side of the table. Player 1 defends the left, player 2 the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// What an entity is, used for logging and rendering choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle(Side),
    Ball,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Paddle(Side::Left) => f.write_str("left paddle"),
            EntityKind::Paddle(Side::Right) => f.write_str("right paddle"),
            EntityKind::Ball => f.write_str("ball"),
        }
    }
}

/// Strictly positive width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size(Vec2);

impl Size {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self(Vec2::new(width, height)))
        } else {
            Err(Error::InvalidSize { width, height })
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }
}

/// Position, extent and speed of an entity
///
/// `pos` is the top-left corner; y grows downward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    size: Size,
    /// Scalar speed magnitude (pixels per second)
    pub velocity: f32,
}

impl Body {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, size: Size, velocity: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            velocity,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size.as_vec2()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height()
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.width()
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.height()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size() * 0.5
    }

    /// Axis-aligned bounding box overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        aabb_overlap(self.pos, self.size(), other.pos, other.size())
    }
}

/// A body plus exactly one input, physics and graphics capability
pub struct Entity {
    body: Body,
    input: Box<dyn InputComponent>,
    physics: Box<dyn PhysicsComponent>,
    graphics: Box<dyn GraphicsComponent>,
}

impl Entity {
    pub fn new(
        body: Body,
        input: Box<dyn InputComponent>,
        physics: Box<dyn PhysicsComponent>,
        graphics: Box<dyn GraphicsComponent>,
    ) -> Self {
        Self {
            body,
            input,
            physics,
            graphics,
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.body.id
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.body.kind
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Current heading, for entities whose physics tracks one
    pub fn travel(&self) -> Option<Travel> {
        self.physics.travel()
    }

    /// Poll input, then let physics move the body
    pub fn update(&mut self, field: &mut dyn Playfield, dt: f32) {
        let intent: Option<Direction> = self.input.intent(&self.body, &*field);
        self.physics.update(&mut self.body, intent, field, dt);
    }

    /// This entity was struck by (or struck) `other`
    pub fn collision(&mut self, other: &Body) {
        self.physics.collision(&mut self.body, other);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.graphics.render(&self.body, surface);
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity").field("body", &self.body).finish_non_exhaustive()
    }
}
