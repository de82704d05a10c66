//! Ball physics: straight-line travel, wall bounces, goals and
//! angle-based paddle rebounds
//!
//! The ball's heading is an angle in [MIN_ANGLE, MAX_ANGLE] plus a horizontal
//! sign. Every angle in that range has a negative cosine, so the sign alone
//! decides whether the ball travels left or right.

use glam::Vec2;
use rand::Rng;

use super::collision::normalized_offset;
use super::components::{Direction, PhysicsComponent, Playfield, Travel};
use super::entity::{Body, Side};
use crate::consts::{MAX_ANGLE, MIN_ANGLE};
use crate::{direction_from_angle, sign_or_positive};

/// Map a normalized paddle offset (0 = top edge, 1 = bottom edge) onto the
/// angle range, inverted: the top edge gives MAX_ANGLE, the bottom MIN_ANGLE
#[inline]
pub fn rebound_angle(offset: f32) -> f32 {
    let t = offset.clamp(0.0, 1.0);
    MAX_ANGLE - t * (MAX_ANGLE - MIN_ANGLE)
}

#[derive(Debug, Clone)]
pub struct BallPhysics {
    /// Current travel angle (radians)
    angle: f32,
    /// Direction of travel, scaled by the body's speed each step
    vel: Vec2,
    /// Speed the body is set to on a paddle hit
    rally_speed: f32,
}

impl BallPhysics {
    /// Serve with a random angle and a random horizontal direction
    pub fn new(rng: &mut impl Rng, rally_speed: f32) -> Self {
        let angle = rng.random_range(MIN_ANGLE..=MAX_ANGLE);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self::with_angle(angle, sign, rally_speed)
    }

    /// Serve with a fixed heading; the angle is clamped into range
    pub fn with_angle(angle: f32, horizontal_sign: f32, rally_speed: f32) -> Self {
        let angle = angle.clamp(MIN_ANGLE, MAX_ANGLE);
        Self {
            angle,
            vel: direction_from_angle(angle, sign_or_positive(horizontal_sign)),
            rally_speed,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> Vec2 {
        self.vel
    }
}

impl PhysicsComponent for BallPhysics {
    fn update(
        &mut self,
        body: &mut Body,
        _intent: Option<Direction>,
        field: &mut dyn Playfield,
        dt: f32,
    ) {
        let bounds = field.bounds();

        let displacement = self.vel * (body.velocity * dt);
        body.pos += displacement;

        if body.bottom() >= bounds.y {
            body.pos.y = bounds.y - body.height();
            if self.vel.y > 0.0 {
                self.vel.y = -self.vel.y;
                field.wall_bounce(body.id);
            }
        } else if body.pos.y <= 0.0 {
            body.pos.y = 0.0;
            if self.vel.y < 0.0 {
                self.vel.y = -self.vel.y;
                field.wall_bounce(body.id);
            }
        }

        // Past the right edge scores for the left player and vice versa
        if body.right() > bounds.x {
            field.goal_scored(body.id, Side::Left);
        } else if body.pos.x < 0.0 {
            field.goal_scored(body.id, Side::Right);
        }

        field.resolve_collisions(body, &mut |ball, other| self.collision(ball, other));
    }

    fn collision(&mut self, body: &mut Body, other: &Body) {
        log::debug!("Collision with: {}", other.kind);

        // Already heading away; a hit last step left the ball overlapping
        let closing = (other.center().x - body.center().x) * self.vel.x;
        if closing < 0.0 {
            log::trace!("{} moving away from {}, no rebound", body.id, other.kind);
            return;
        }

        let offset = normalized_offset(body.center().y, other.center().y, other.height());
        self.angle = rebound_angle(offset);
        self.vel = direction_from_angle(self.angle, sign_or_positive(self.vel.x));

        body.velocity = self.rally_speed;
    }

    fn travel(&self) -> Option<Travel> {
        Some(Travel {
            angle: self.angle,
            direction: self.vel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_RALLY_SPEED;
    use crate::sim::entity::{EntityId, EntityKind, Size};
    use crate::sim::testing::TestField;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::PI;

    fn ball(x: f32, y: f32, speed: f32) -> Body {
        Body::new(
            EntityId(1),
            EntityKind::Ball,
            Vec2::new(x, y),
            Size::new(20.0, 20.0).unwrap(),
            speed,
        )
    }

    fn paddle(x: f32, y: f32) -> Body {
        Body::new(
            EntityId(2),
            EntityKind::Paddle(Side::Left),
            Vec2::new(x, y),
            Size::new(20.0, 100.0).unwrap(),
            0.0,
        )
    }

    #[test]
    fn test_random_serve_in_range() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut lefts = 0;
        for _ in 0..200 {
            let physics = BallPhysics::new(&mut rng, BALL_RALLY_SPEED);
            assert!((MIN_ANGLE..=MAX_ANGLE).contains(&physics.angle()));
            if physics.direction().x < 0.0 {
                lefts += 1;
            }
        }
        // Both horizontal directions get served
        assert!(lefts > 0 && lefts < 200);
    }

    #[test]
    fn test_straight_travel() {
        let mut field = TestField::new(800.0, 600.0);
        let mut body = ball(400.0, 300.0, 100.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);

        physics.update(&mut body, None, &mut field, 1.0);

        assert!((body.pos.x - 300.0).abs() < 1e-3);
        assert!((body.pos.y - 300.0).abs() < 1e-3);
        assert!(field.goals.is_empty());
        assert_eq!(field.bounces, 0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut field = TestField::new(800.0, 600.0);
        let mut body = ball(400.0, 0.0, 100.0);
        let mut physics = BallPhysics::with_angle(MAX_ANGLE, 1.0, BALL_RALLY_SPEED);
        let before = physics.direction();
        assert!(before.y < 0.0);

        physics.update(&mut body, None, &mut field, 0.1);

        assert_eq!(body.pos.y, 0.0);
        assert!(physics.direction().y > 0.0);
        assert_eq!(physics.direction().x, before.x);
        assert_eq!(field.bounces, 1);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut field = TestField::new(800.0, 600.0);
        let mut body = ball(400.0, 575.0, 100.0);
        let mut physics = BallPhysics::with_angle(MIN_ANGLE, -1.0, BALL_RALLY_SPEED);
        assert!(physics.direction().y > 0.0);
        let sign_x = physics.direction().x.signum();

        physics.update(&mut body, None, &mut field, 0.1);

        assert_eq!(body.pos.y, 580.0);
        assert!(physics.direction().y < 0.0);
        assert_eq!(physics.direction().x.signum(), sign_x);
    }

    #[test]
    fn test_goal_left_edge_scores_right() {
        let mut field = TestField::new(800.0, 600.0);
        let mut body = ball(5.0, 300.0, 100.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);

        physics.update(&mut body, None, &mut field, 0.1);

        assert_eq!(field.goals, vec![(EntityId(1), Side::Right)]);
    }

    #[test]
    fn test_goal_right_edge_scores_left() {
        let mut field = TestField::new(800.0, 600.0);
        let mut body = ball(775.0, 300.0, 100.0);
        let mut physics = BallPhysics::with_angle(PI, -1.0, BALL_RALLY_SPEED);

        physics.update(&mut body, None, &mut field, 0.1);

        assert_eq!(field.goals, vec![(EntityId(1), Side::Left)]);
    }

    #[test]
    fn test_paddle_hit_reverses_and_speeds_up() {
        let mut body = ball(115.0, 340.0, 300.0);
        let paddle = paddle(100.0, 300.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);
        assert!(physics.direction().x < 0.0);

        physics.collision(&mut body, &paddle);

        // Ball center level with paddle center: straight back out
        assert!((physics.angle() - PI).abs() < 1e-5);
        assert!(physics.direction().x > 0.0);
        assert_eq!(body.velocity, BALL_RALLY_SPEED);
    }

    #[test]
    fn test_paddle_hit_top_and_bottom() {
        let paddle = paddle(100.0, 300.0);

        // Ball center at the paddle's top edge
        let mut top = ball(115.0, 290.0, 300.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);
        physics.collision(&mut top, &paddle);
        assert!((physics.angle() - MAX_ANGLE).abs() < 1e-5);
        assert!(physics.direction().y < 0.0, "top hit heads up");

        // Ball center at the paddle's bottom edge
        let mut bottom = ball(115.0, 390.0, 300.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);
        physics.collision(&mut bottom, &paddle);
        assert!((physics.angle() - MIN_ANGLE).abs() < 1e-5);
        assert!(physics.direction().y > 0.0, "bottom hit heads down");
    }

    #[test]
    fn test_no_rebound_when_moving_away() {
        let mut body = ball(115.0, 340.0, 300.0);
        let paddle = paddle(100.0, 300.0);
        // Moving right, away from a paddle on its left
        let mut physics = BallPhysics::with_angle(PI, -1.0, BALL_RALLY_SPEED);
        let before = physics.direction();

        physics.collision(&mut body, &paddle);

        assert_eq!(physics.direction(), before);
        assert_eq!(body.velocity, 300.0);
    }

    #[test]
    fn test_zero_horizontal_velocity_stays_finite() {
        let mut body = ball(115.0, 340.0, 300.0);
        let paddle = paddle(100.0, 300.0);
        let mut physics = BallPhysics {
            angle: PI,
            vel: Vec2::ZERO,
            rally_speed: BALL_RALLY_SPEED,
        };

        physics.collision(&mut body, &paddle);

        let dir = physics.direction();
        assert!(dir.x.is_finite() && dir.y.is_finite());
        assert!(dir.x < 0.0, "defaults to the positive sign, cos is negative");
    }

    #[test]
    fn test_update_resolves_against_paddle() {
        let mut field = TestField::new(800.0, 600.0);
        field.bodies.push(paddle(100.0, 300.0));
        let mut body = ball(125.0, 340.0, 100.0);
        let mut physics = BallPhysics::with_angle(PI, 1.0, BALL_RALLY_SPEED);

        physics.update(&mut body, None, &mut field, 0.1);

        assert_eq!(field.hits, vec![EntityId(2)]);
        assert!(physics.direction().x > 0.0);
        assert_eq!(body.velocity, BALL_RALLY_SPEED);
    }

    proptest! {
        #[test]
        fn prop_rebound_angle_monotonic(a in 0.0f32..1.0, b in 0.0f32..1.0) {
            prop_assume!((a - b).abs() > 1e-4);
            let (higher, lower) = if a < b { (a, b) } else { (b, a) };
            // Higher strike (smaller offset) sits strictly closer to MAX_ANGLE
            prop_assert!(rebound_angle(higher) > rebound_angle(lower));
        }

        #[test]
        fn prop_rebound_angle_in_range(offset in -2.0f32..3.0) {
            let angle = rebound_angle(offset);
            prop_assert!((MIN_ANGLE..=MAX_ANGLE).contains(&angle));
        }

        #[test]
        fn prop_vertical_stays_in_bounds(
            x in 50.0f32..700.0,
            y in 0.0f32..580.0,
            angle in MIN_ANGLE..=MAX_ANGLE,
            right in any::<bool>(),
            speed in 0.0f32..2000.0,
            dt in 0.0f32..0.1,
        ) {
            let mut field = TestField::new(800.0, 600.0);
            let mut body = ball(x, y, speed);
            let sign = if right { -1.0 } else { 1.0 };
            let mut physics = BallPhysics::with_angle(angle, sign, BALL_RALLY_SPEED);

            physics.update(&mut body, None, &mut field, dt);

            prop_assert!(body.pos.y >= 0.0);
            prop_assert!(body.pos.y <= 600.0 - body.height());
        }

        #[test]
        fn prop_wall_bounce_keeps_horizontal_sign(
            x in 100.0f32..600.0,
            angle in MIN_ANGLE..=MAX_ANGLE,
            right in any::<bool>(),
        ) {
            prop_assume!((angle - std::f32::consts::PI).abs() > 1e-3);
            let mut field = TestField::new(800.0, 600.0);
            let sign = if right { -1.0 } else { 1.0 };
            let mut physics = BallPhysics::with_angle(angle, sign, BALL_RALLY_SPEED);
            let before = physics.direction();
            // Start against whichever wall the ball is heading into
            let y = if before.y < 0.0 { 0.0 } else { 580.0 };
            let mut body = ball(x, y, 100.0);

            physics.update(&mut body, None, &mut field, 0.01);

            let after = physics.direction();
            prop_assert_eq!(after.y.signum(), -before.y.signum());
            prop_assert_eq!(after.x.signum(), before.x.signum());
        }
    }
}
