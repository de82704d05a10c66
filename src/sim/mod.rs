//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed sub-steps only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, stable entity IDs)
//! - No windowing or platform dependencies

pub mod arena;
pub mod ball;
pub mod collision;
pub mod components;
pub mod entity;
pub mod observer;
pub mod paddle;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

pub use arena::{Arena, GameEvent, Scoreboard, Snapshot};
pub use ball::{BallPhysics, rebound_angle};
pub use collision::{aabb_overlap, normalized_offset};
pub use components::{
    Direction, GraphicsComponent, InputComponent, NullInput, PhysicsComponent, Playfield,
    RectangleGraphics, Travel,
};
pub use entity::{Body, Entity, EntityId, EntityKind, Side, Size};
pub use observer::Observer;
pub use paddle::{AiPaddleInput, Controls, HumanInput, PaddlePhysics};
