//! Points and polygon hit regions in skin image space.

use crate::key::Key;

/// Position in the pixel space of a keyboard skin image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Inverted box that contains nothing.
    const EMPTY: Self = Self {
        left: 1.0,
        top: 1.0,
        right: -1.0,
        bottom: -1.0,
    };

    /// Smallest box around `points`, or the inverted empty box if there
    /// are none.
    fn enclosing(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::EMPTY;
        };
        points.iter().skip(1).fold(
            Self {
                left: first.x,
                top: first.y,
                right: first.x,
                bottom: first.y,
            },
            |b, p| Self {
                left: b.left.min(p.x),
                top: b.top.min(p.y),
                right: b.right.max(p.x),
                bottom: b.bottom.max(p.y),
            },
        )
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Arbitrary simple polygon owned by one key.
///
/// The vertex list is cyclic: the last vertex connects back to the first.
/// Winding direction does not matter.
#[derive(Debug, Clone)]
pub struct Polygon {
    key: Key,
    vertices: Vec<Point>,
    bounds: Bounds,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<Point>, key: Key) -> Self {
        let bounds = Bounds::enclosing(&vertices);
        Self {
            key,
            vertices,
            bounds,
        }
    }

    #[must_use]
    pub fn key(&self) -> Key {
        self.key
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Return the owning key if `point` lies inside the polygon.
    ///
    /// The bounding box rejects most points before the crossing-number
    /// test walks the edges. Points exactly on an edge may land on either
    /// side.
    #[must_use]
    pub fn hit(&self, point: Point) -> Option<Key> {
        if !self.bounds.contains(point) || self.vertices.len() < 3 {
            return None;
        }

        let mut inside = false;
        let mut prev = self.vertices[self.vertices.len() - 1];
        for &cur in &self.vertices {
            if (cur.y > point.y) != (prev.y > point.y)
                && point.x < (prev.x - cur.x) * (point.y - cur.y) / (prev.y - cur.y) + cur.x
            {
                inside = !inside;
            }
            prev = cur;
        }

        inside.then_some(self.key)
    }
}
