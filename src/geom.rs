//! World-space geometry: points, axis-aligned rectangles, and rotated areas.
//!
//! Token footprints are axis-aligned [`Rect`]s. Once a facing is applied the
//! selectable region is no longer axis-aligned, so it is carried as an
//! [`Area`]: the four corners of the footprint after rotation. Rotation is
//! rigid, so an `Area` always has the same measure as the rectangle it came
//! from.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point by `radians` around `pivot`.
    ///
    /// Positive angles turn from +x toward +y, which is clockwise on a
    /// y-down screen.
    #[must_use]
    pub fn rotate_about(self, pivot: Point, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self { x: pivot.x + dx * cos - dy * sin, y: pivot.y + dx * sin + dy * cos }
    }
}

/// Axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The zero rectangle at the origin.
    pub const EMPTY: Self = Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle spanning two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self { x, y, width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.x + self.width / 2.0, y: self.y + self.height / 2.0 }
    }

    /// True when the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Corners in clockwise screen order starting at the top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// Shared edges count as inside, so equal rectangles contain each other.
    /// Rectangles with a negative dimension contain nothing and are
    /// contained by nothing.
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        if self.width < 0.0 || self.height < 0.0 || other.width < 0.0 || other.height < 0.0 {
            return false;
        }
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }

    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.right() && p.y <= self.bottom()
    }

    /// Whether the two rectangles share any interior area.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// A convex quadrilateral produced by rigidly transforming a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    corners: [Point; 4],
}

impl Area {
    /// The unrotated area of `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self { corners: rect.corners() }
    }

    /// `rect` rotated by `radians` around `pivot`.
    #[must_use]
    pub fn rotated(rect: Rect, pivot: Point, radians: f64) -> Self {
        Self { corners: rect.corners().map(|c| c.rotate_about(pivot, radians)) }
    }

    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Axis-aligned bounding box of the area.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut min = self.corners[0];
        let mut max = self.corners[0];
        for c in &self.corners[1..] {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Rect::from_corners(min, max)
    }

    /// Enclosed area (shoelace formula), independent of winding.
    #[must_use]
    pub fn measure(&self) -> f64 {
        let mut twice = 0.0;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            twice += a.x * b.y - b.x * a.y;
        }
        twice.abs() / 2.0
    }

    /// Whether `p` lies inside or on the edge of the area.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let mut winding: Option<bool> = None;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[(i + 1) % 4];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross.abs() <= f64::EPSILON {
                continue;
            }
            let positive = cross > 0.0;
            match winding {
                None => winding = Some(positive),
                Some(w) if w != positive => return false,
                Some(_) => {}
            }
        }
        true
    }
}
