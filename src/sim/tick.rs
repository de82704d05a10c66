//! Per-frame driving of the arena
//!
//! A frame is: clamp dt, split it into fixed sub-steps, run the update pass
//! for each sub-step (applying goals between passes), then render once.

use glam::Vec2;

use super::arena::Arena;
use super::entity::{Entity, EntityId};
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{ShapeBatch, Surface, colors};

/// Score text scale
const SCORE_SCALE: f32 = 3.0;

impl Arena {
    /// Advance the table by one host frame of `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.events.clear();

        let dt = self.sanitize_dt(dt);
        if dt <= 0.0 {
            return;
        }

        // Tolerance keeps an exact multiple of the step from rounding up
        let substeps = (dt / self.settings().max_step_dt - 1e-3)
            .ceil()
            .clamp(1.0, MAX_SUBSTEPS as f32) as u32;
        let step_dt = dt / substeps as f32;
        for _ in 0..substeps {
            self.pass(step_dt);
        }
    }

    /// Tick, then draw the result
    pub fn frame(&mut self, dt: f32, batch: &mut ShapeBatch) {
        self.tick(dt);
        self.render(batch);
    }

    /// A single update pass of `dt` seconds, without clamping or splitting
    pub fn step(&mut self, dt: f32) {
        self.events.clear();
        self.pass(dt);
    }

    /// One update pass over every entity in collection order
    ///
    /// Each entity is lifted out of the collection while it updates, so its
    /// physics can query and collide against the rest. Goals reported during
    /// the pass are applied after it.
    fn pass(&mut self, dt: f32) {
        let order: Vec<EntityId> = self.entities.iter().map(Entity::id).collect();

        for id in order {
            let Some(index) = self.index_of(id) else {
                continue;
            };
            let mut entity = self.entities.remove(index);
            entity.update(self, dt);
            self.entities.insert(index, entity);
        }

        self.apply_goals();
        self.steps += 1;
    }

    /// Draw every entity, then the score overlay
    pub fn render(&self, batch: &mut ShapeBatch) {
        let mut frame = batch.begin(colors::BACKGROUND);

        for entity in self.entities() {
            entity.render(&mut frame);
        }

        let bounds = self.bounds();
        let scores = self.scores();
        frame.draw_text(
            &scores.left.to_string(),
            Vec2::new(bounds.x / 4.0, bounds.y * 3.0 / 4.0),
            SCORE_SCALE,
        );
        frame.draw_text(
            &scores.right.to_string(),
            Vec2::new(bounds.x - bounds.x / 4.0, bounds.y * 3.0 / 4.0),
            SCORE_SCALE,
        );
    }

    fn sanitize_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring invalid frame dt {dt}");
            return 0.0;
        }
        let max = self.settings().max_frame_dt;
        if dt > max {
            log::warn!("Clamping frame dt {dt} to {max}");
            return max;
        }
        dt
    }
}
