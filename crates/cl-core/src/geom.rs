//! Planar geometry in venue coordinates.
//!
//! Venues are laid out on a canvas with the origin at the top-left corner and
//! `y` growing downwards.  Single precision is used throughout: venues are a
//! few hundred units across, so `f32` leaves plenty of headroom.

use std::ops::{Add, AddAssign, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A point or displacement in venue coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Squared distance; use for radius checks to skip the square root.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > f32::EPSILON {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// `true` if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Expanded-radius overlap test: a circle of radius `r` at `p` is treated
    /// as overlapping when `p` lies strictly inside the rectangle grown by `r`
    /// on every side.  Corners are therefore slightly conservative.
    #[inline]
    pub fn overlaps_circle(&self, p: Vec2, r: f32) -> bool {
        p.x > self.x - r
            && p.x < self.x + self.width + r
            && p.y > self.y - r
            && p.y < self.y + self.height + r
    }

    /// The rectangle grown by `margin` on every side (shrunk if negative).
    pub fn expanded(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Smallest displacement that moves `p` out of this rectangle grown by
    /// `r`, plus `clearance`.  Returns `Vec2::ZERO` when `p` does not overlap.
    pub fn escape_vector(&self, p: Vec2, r: f32, clearance: f32) -> Vec2 {
        if !self.overlaps_circle(p, r) {
            return Vec2::ZERO;
        }
        let grown = self.expanded(r);
        let left = p.x - grown.x;
        let right = grown.x + grown.width - p.x;
        let up = p.y - grown.y;
        let down = grown.y + grown.height - p.y;

        let best = left.min(right).min(up).min(down);
        if best == left {
            Vec2::new(-(left + clearance), 0.0)
        } else if best == right {
            Vec2::new(right + clearance, 0.0)
        } else if best == up {
            Vec2::new(0.0, -(up + clearance))
        } else {
            Vec2::new(0.0, down + clearance)
        }
    }

    /// `true` for zero/negative extents or non-finite coordinates.
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}
