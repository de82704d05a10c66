//! Paddle physics and the two paddle controllers (human and AI)

use std::cell::Cell;
use std::rc::Rc;

use super::components::{Direction, InputComponent, PhysicsComponent, Playfield};
use super::entity::Body;
use super::observer::Observer;

/// Vertical paddle movement at a fixed speed
#[derive(Debug, Clone)]
pub struct PaddlePhysics {
    /// Travel speed (pixels per second)
    pub speed: f32,
    /// Keep the paddle inside [0, height - paddle height]
    pub clamp: bool,
}

impl PaddlePhysics {
    pub fn new(speed: f32, clamp: bool) -> Self {
        Self { speed, clamp }
    }
}

impl PhysicsComponent for PaddlePhysics {
    fn update(
        &mut self,
        body: &mut Body,
        intent: Option<Direction>,
        field: &mut dyn Playfield,
        dt: f32,
    ) {
        let Some(direction) = intent else {
            return;
        };
        log::trace!("{} moving {:?}", body.kind, direction);

        body.pos.y += direction.sign() * self.speed * dt;

        if self.clamp {
            let max_y = (field.bounds().y - body.height()).max(0.0);
            body.pos.y = body.pos.y.clamp(0.0, max_y);
        }
    }

    fn collision(&mut self, body: &mut Body, other: &Body) {
        // Paddles are static targets; the ball does the rebounding
        log::debug!("{} collision with: {}", body.kind, other.kind);
    }
}

/// Movement intent written by the host from raw key state
///
/// Clones share state: the host keeps one, the paddle's input another.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    intent: Rc<Cell<Option<Direction>>>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, intent: Option<Direction>) {
        self.intent.set(intent);
    }

    /// Resolve up/down key state; both or neither held means no movement
    pub fn press(&self, up: bool, down: bool) {
        let intent = match (up, down) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        };
        self.set(intent);
    }

    pub fn get(&self) -> Option<Direction> {
        self.intent.get()
    }
}

/// Human-driven paddle input
#[derive(Debug, Clone)]
pub struct HumanInput {
    controls: Controls,
}

impl HumanInput {
    pub fn new(controls: Controls) -> Self {
        Self { controls }
    }
}

impl InputComponent for HumanInput {
    fn intent(&mut self, _body: &Body, _field: &dyn Playfield) -> Option<Direction> {
        self.controls.get()
    }
}

/// Chases the observed ball's vertical center at full paddle speed
#[derive(Debug, Clone)]
pub struct AiPaddleInput {
    observer: Observer,
    /// Offsets smaller than this leave the paddle still
    dead_zone: f32,
}

impl AiPaddleInput {
    pub fn new(observer: Observer, dead_zone: f32) -> Self {
        Self {
            observer,
            dead_zone,
        }
    }
}

impl InputComponent for AiPaddleInput {
    fn intent(&mut self, body: &Body, field: &dyn Playfield) -> Option<Direction> {
        let target = field.body(self.observer.current_target()?)?;
        let offset = target.center().y - body.center().y;

        if offset < -self.dead_zone {
            Some(Direction::Up)
        } else if offset > self.dead_zone {
            Some(Direction::Down)
        } else {
            None
        }
    }
}
