//! Minimal playfield for exercising components without an arena

use glam::Vec2;

use super::components::Playfield;
use super::entity::{Body, EntityId, Side};

pub struct TestField {
    pub bounds: Vec2,
    pub bodies: Vec<Body>,
    pub goals: Vec<(EntityId, Side)>,
    pub hits: Vec<EntityId>,
    pub bounces: u32,
}

impl TestField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Vec2::new(width, height),
            bodies: Vec::new(),
            goals: Vec::new(),
            hits: Vec::new(),
            bounces: 0,
        }
    }
}

impl Playfield for TestField {
    fn bounds(&self) -> Vec2 {
        self.bounds
    }

    fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn resolve_collisions(&mut self, body: &mut Body, on_hit: &mut dyn FnMut(&mut Body, &Body)) {
        for other in &self.bodies {
            if other.id != body.id && body.overlaps(other) {
                on_hit(body, other);
                self.hits.push(other.id);
            }
        }
    }

    fn goal_scored(&mut self, ball: EntityId, scorer: Side) {
        self.goals.push((ball, scorer));
    }

    fn wall_bounce(&mut self, _ball: EntityId) {
        self.bounces += 1;
    }
}
