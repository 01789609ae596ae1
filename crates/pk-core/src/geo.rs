//! Planar coordinate type.
//!
//! Coordinates are normalized to the unit square (`0.0..=1.0` on both axes)
//! by convention; nothing here enforces it.

use std::f64::consts::PI;

/// Radius of the ring activities are placed on when configured by angle.
const ACTIVITY_RING_RADIUS: f64 = 0.4;

/// A point in normalized park coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of length `radius` pointing at compass `angle_deg`
    /// (0° = up, clockwise, y grows downward).
    pub fn polar(angle_deg: f64, radius: f64) -> Self {
        let rad = angle_deg * PI / 180.0;
        Self {
            x: rad.sin() * radius,
            y: -rad.cos() * radius,
        }
    }

    /// Position on the activity ring around the park centre.
    pub fn on_ring(angle_deg: f64) -> Self {
        let offset = Self::polar(angle_deg, ACTIVITY_RING_RADIUS);
        Self::new(0.5 + offset.x, 0.5 + offset.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Advance along the straight line toward `target` by exactly `distance`.
    ///
    /// The direction is undefined when `self == target`; callers must guard.
    /// In that case the point is left unchanged rather than becoming NaN.
    pub fn move_toward(&mut self, target: Point, distance: f64) {
        let gap = self.distance(target);
        if gap == 0.0 {
            return;
        }
        self.x += (target.x - self.x) / gap * distance;
        self.y += (target.y - self.y) / gap * distance;
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
