//! Collision detection for axis-aligned rectangles
//!
//! Every entity on the table is an upright rectangle, so a strict AABB test
//! is all the arena needs. Edges that merely touch do not collide.

use glam::Vec2;

/// Check overlap between two boxes given by top-left corner and size
#[inline]
pub fn aabb_overlap(a_min: Vec2, a_size: Vec2, b_min: Vec2, b_size: Vec2) -> bool {
    a_min.x < b_min.x + b_size.x
        && a_min.x + a_size.x > b_min.x
        && a_min.y < b_min.y + b_size.y
        && a_min.y + a_size.y > b_min.y
}

/// Ball center offset along a paddle, normalized so the paddle's top edge
/// maps to 0 and its bottom edge to 1
///
/// Values outside [0, 1] mean the ball center is beyond the paddle's ends.
#[inline]
pub fn normalized_offset(ball_center_y: f32, paddle_center_y: f32, paddle_height: f32) -> f32 {
    (ball_center_y - paddle_center_y) / paddle_height + 0.5
}
