//! The arena: owns every entity, both scores and the serve RNG
//!
//! All state the table needs lives here. Entities are kept in insertion
//! order and identified by stable ids, so iteration is deterministic.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::BallPhysics;
use super::components::{InputComponent, NullInput, Playfield, RectangleGraphics};
use super::entity::{Body, Entity, EntityId, EntityKind, Side, Size};
use super::observer::Observer;
use super::paddle::{AiPaddleInput, Controls, HumanInput, PaddlePhysics};
use crate::Result;
use crate::consts::PADDLE_INSET;
use crate::renderer::colors;
use crate::settings::{PlayerKind, Settings};

/// Points per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Player 1
    pub left: u32,
    /// Player 2
    pub right: u32,
}

impl Scoreboard {
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce { ball: EntityId },
    /// `mover` overlapped `other`; both handlers ran
    Collision { mover: EntityId, other: EntityId },
    /// `ball` left the table, `scorer` got the point and `replacement` was served
    Goal {
        ball: EntityId,
        scorer: Side,
        replacement: EntityId,
    },
}

/// Serializable view of the table for a HUD or a log
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub steps: u64,
    pub scores: Scoreboard,
    pub bodies: Vec<Body>,
}

/// Orchestrator for one match
pub struct Arena {
    settings: Settings,
    paddle_size: Size,
    ball_size: Size,
    /// Live entities in insertion order
    pub(super) entities: Vec<Entity>,
    scores: Scoreboard,
    observer: Observer,
    left_controls: Controls,
    right_controls: Controls,
    rng: Pcg32,
    next_id: u32,
    /// Goals reported during the update pass, applied after it
    pending_goals: Vec<(EntityId, Side)>,
    pub(super) events: Vec<GameEvent>,
    pub(super) steps: u64,
}

impl Arena {
    /// Set up a match: two paddles inset from their edges and a ball
    /// served from the center
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let paddle_size = Size::new(settings.paddle_width, settings.paddle_height)?;
        let ball_size = Size::new(settings.ball_width, settings.ball_height)?;

        let mut arena = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            paddle_size,
            ball_size,
            entities: Vec::new(),
            scores: Scoreboard::default(),
            observer: Observer::new(),
            left_controls: Controls::new(),
            right_controls: Controls::new(),
            next_id: 1,
            pending_goals: Vec::new(),
            events: Vec::new(),
            steps: 0,
        };

        let inset = paddle_size.width() * PADDLE_INSET;
        let y = arena.settings.height / 2.0 - paddle_size.height() / 2.0;
        arena.spawn_paddle(Side::Left, Vec2::new(inset, y));
        arena.spawn_paddle(Side::Right, Vec2::new(arena.settings.width - inset, y));
        let ball = arena.serve();

        log::info!(
            "Arena {}x{} ready: ball {}, seed {}",
            arena.settings.width,
            arena.settings.height,
            ball,
            arena.settings.seed
        );
        Ok(arena)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an entity. The caller keeps the one-ball rule.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        self.entities.push(entity);
        id
    }

    fn spawn_paddle(&mut self, side: Side, pos: Vec2) -> EntityId {
        let player = match side {
            Side::Left => self.settings.left_player,
            Side::Right => self.settings.right_player,
        };
        let input: Box<dyn InputComponent> = match player {
            PlayerKind::Human => Box::new(HumanInput::new(self.controls(side).clone())),
            PlayerKind::Ai => Box::new(AiPaddleInput::new(
                self.observer.clone(),
                self.settings.ai_dead_zone,
            )),
        };

        let id = self.next_entity_id();
        let body = Body::new(id, EntityKind::Paddle(side), pos, self.paddle_size, 0.0);
        self.insert(Entity::new(
            body,
            input,
            Box::new(PaddlePhysics::new(
                self.settings.paddle_speed,
                self.settings.clamp_paddles,
            )),
            Box::new(RectangleGraphics::new(colors::PADDLE)),
        ))
    }

    /// Serve a freshly randomized ball from the center
    fn serve(&mut self) -> EntityId {
        let physics = BallPhysics::new(&mut self.rng, self.settings.rally_speed);
        let pos = self.center_of(self.ball_size);
        self.add_ball(physics, pos, self.settings.ball_speed)
    }

    fn add_ball(&mut self, physics: BallPhysics, pos: Vec2, speed: f32) -> EntityId {
        let id = self.next_entity_id();
        let body = Body::new(id, EntityKind::Ball, pos, self.ball_size, speed);
        self.insert(Entity::new(
            body,
            Box::new(NullInput),
            Box::new(physics),
            Box::new(RectangleGraphics::new(colors::BALL)),
        ));
        self.observer.attach(id);
        id
    }

    /// Replace the current ball with one of the given heading, position
    /// and speed
    pub fn reset_ball(&mut self, physics: BallPhysics, pos: Vec2, speed: f32) -> EntityId {
        self.entities.retain(|e| e.kind() != EntityKind::Ball);
        self.pending_goals.clear();
        self.add_ball(physics, pos, speed)
    }

    fn center_of(&self, size: Size) -> Vec2 {
        (self.settings.bounds() - size.as_vec2()) * 0.5
    }

    pub(super) fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    /// Remove scored balls, credit the scorer and serve replacements
    pub(super) fn apply_goals(&mut self) {
        for (ball, scorer) in std::mem::take(&mut self.pending_goals) {
            let Some(index) = self.index_of(ball) else {
                continue;
            };
            self.entities.remove(index);
            self.scores.credit(scorer);
            let replacement = self.serve();

            log::info!(
                "Goal for {:?} player: {} - {} (ball {} replaced by {})",
                scorer,
                self.scores.left,
                self.scores.right,
                ball,
                replacement
            );
            self.events.push(GameEvent::Goal {
                ball,
                scorer,
                replacement,
            });
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> Vec2 {
        self.settings.bounds()
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.entity(id).map(Entity::body)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.entities
            .iter_mut()
            .find(|e| e.id() == id)
            .map(Entity::body_mut)
    }

    /// The ball the observer is tracking
    pub fn ball(&self) -> Option<&Entity> {
        self.entity(self.observer.current_target()?)
    }

    pub fn paddle(&self, side: Side) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.kind() == EntityKind::Paddle(side))
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Key state handle for a human-driven paddle
    pub fn controls(&self, side: Side) -> &Controls {
        match side {
            Side::Left => &self.left_controls,
            Side::Right => &self.right_controls,
        }
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Update passes run so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            steps: self.steps,
            scores: self.scores,
            bodies: self.entities.iter().map(|e| e.body().clone()).collect(),
        }
    }
}

impl Playfield for Arena {
    fn bounds(&self) -> Vec2 {
        self.settings.bounds()
    }

    fn body(&self, id: EntityId) -> Option<&Body> {
        Arena::body(self, id)
    }

    fn resolve_collisions(&mut self, body: &mut Body, on_hit: &mut dyn FnMut(&mut Body, &Body)) {
        for other in self.entities.iter_mut() {
            if other.id() == body.id || !body.overlaps(other.body()) {
                continue;
            }
            on_hit(body, other.body());
            other.collision(body);
            self.events.push(GameEvent::Collision {
                mover: body.id,
                other: other.id(),
            });
        }
    }

    fn goal_scored(&mut self, ball: EntityId, scorer: Side) {
        if !self.pending_goals.iter().any(|(id, _)| *id == ball) {
            self.pending_goals.push((ball, scorer));
        }
    }

    fn wall_bounce(&mut self, ball: EntityId) {
        self.events.push(GameEvent::WallBounce { ball });
    }
}
