//! Axis-aligned hitboxes and the body capability shared by every entity
//!
//! Sprites are anchored at their bottom-left corner (screen space, y down),
//! so `position()` is the point standing on the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box whose bottom-left corner sits at `anchor`
    pub fn from_bottom_left(anchor: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(anchor.x, anchor.y - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap; boxes that only share an edge do not touch
    pub fn intersects(&self, other: &Hitbox) -> bool {
        !(self.right() <= other.left()
            || self.bottom() <= other.top()
            || self.left() >= other.right()
            || self.top() >= other.bottom())
    }
}

/// Anything the physics collaborator can test for overlap
pub trait Body {
    fn position(&self) -> Vec2;

    fn hitbox(&self) -> Hitbox;

    fn overlaps_with(&self, other: &dyn Body) -> bool {
        self.hitbox().intersects(&other.hitbox())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bottom_left() {
        let b = Hitbox::from_bottom_left(Vec2::new(10.0, 100.0), Vec2::new(20.0, 30.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 30.0);
        assert_eq!(b.top(), 70.0);
        assert_eq!(b.bottom(), 100.0);
    }

    #[test]
    fn test_intersects() {
        let a = Hitbox::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Hitbox::new(Vec2::splat(5.0), Vec2::splat(10.0));
        let c = Hitbox::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Hitbox::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Hitbox::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }
}
