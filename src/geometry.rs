//! 2D vector and quad math for the wind indicator.
//!
//! Screen coordinates: x grows right, y grows down, so "north" (straight
//! ahead) is negative y. Rotation is about an arbitrary pivot point, which is
//! how the arrow polygon is turned to the relative wind angle each update.

use embedded_graphics::prelude::Point;

/// 2D point/vector with f32 components.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform scale about the origin.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn translated(self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Rotate by `angle` radians around `pivot`.
    pub fn rotated_about(self, pivot: Vec2, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }

    /// Convert to an embedded-graphics pixel coordinate.
    pub fn to_point(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// Four-cornered polygon, stored in draw order.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quad {
    pub points: [Vec2; 4],
}

impl Quad {
    pub const fn new(points: [Vec2; 4]) -> Self {
        Self { points }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.points.map(|p| p.scaled(factor)))
    }

    pub fn translated(self, offset: Vec2) -> Self {
        Self::new(self.points.map(|p| p.translated(offset)))
    }

    pub fn rotated_about(self, pivot: Vec2, angle: f32) -> Self {
        Self::new(self.points.map(|p| p.rotated_about(pivot, angle)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    fn assert_vec2_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "Expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_rotate_quarter_turn_about_origin() {
        // y grows down, so a positive quarter turn takes (0,-1) to (1,0)
        let p = Vec2::new(0.0, -1.0).rotated_about(Vec2::default(), FRAC_PI_2);
        assert_vec2_close(p, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_rotate_half_turn_about_pivot() {
        let pivot = Vec2::new(10.0, 10.0);
        let p = Vec2::new(10.0, 5.0).rotated_about(pivot, PI);
        assert_vec2_close(p, Vec2::new(10.0, 15.0));
    }

    #[test]
    fn test_rotate_pivot_is_fixed_point() {
        let pivot = Vec2::new(3.0, -7.0);
        let p = pivot.rotated_about(pivot, 1.234);
        assert_vec2_close(p, pivot);
    }

    #[test]
    fn test_quad_rotate_round_trip() {
        // Rotating by an angle then its negative restores the polygon
        let pivot = Vec2::new(60.0, 60.0);
        let quad = Quad::new([
            Vec2::new(60.0, 39.0),
            Vec2::new(75.5, 81.0),
            Vec2::new(60.0, 72.0),
            Vec2::new(44.5, 81.0),
        ]);

        let restored = quad.rotated_about(pivot, 1.7).rotated_about(pivot, -1.7);
        for (a, b) in restored.points.iter().zip(quad.points.iter()) {
            assert_vec2_close(*a, *b);
        }
    }

    #[test]
    fn test_quad_scale_then_translate() {
        let quad = Quad::new([
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(-1.0, 1.0),
        ]);
        let placed = quad.scaled(10.0).translated(Vec2::new(100.0, 50.0));
        assert_vec2_close(placed.points[0], Vec2::new(100.0, 40.0));
        assert_vec2_close(placed.points[1], Vec2::new(110.0, 60.0));
    }

    #[test]
    fn test_to_point_rounds() {
        assert_eq!(Vec2::new(1.6, -2.4).to_point(), Point::new(2, -2));
        assert_eq!(Vec2::new(1.4, -2.6).to_point(), Point::new(1, -3));
    }
}
