//! Row/span bucket lookup with polygon fallback.
//!
//! Almost every key on a skin is an axis-aligned rectangle, so a skin is
//! mostly a stack of rows, each cut into spans of equally wide keys. The
//! few irregular regions are polygons, consulted only after every row has
//! missed.

use crate::error::ConfigError;
use crate::geometry::{Point, Polygon};
use crate::key::Key;

/// Horizontal pixel range `[left, right)` split evenly among its keys.
#[derive(Debug, Clone)]
pub struct Span {
    left: i32,
    right: i32,
    keys: Vec<Key>,
}

impl Span {
    pub fn new(left: i32, right: i32, keys: Vec<Key>) -> Result<Self, ConfigError> {
        if right <= left {
            return Err(ConfigError::EmptySpanRange { left, right });
        }
        if keys.is_empty() {
            return Err(ConfigError::NoKeys { left, right });
        }
        Ok(Self { left, right, keys })
    }

    /// Span holding a single key.
    pub fn single(left: i32, right: i32, key: Key) -> Result<Self, ConfigError> {
        Self::new(left, right, vec![key])
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i32 {
        self.right
    }

    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    #[must_use]
    pub fn hit(&self, point: Point) -> Option<Key> {
        if !(point.x >= f64::from(self.left) && point.x < f64::from(self.right)) {
            return None;
        }
        let offset = point.x - f64::from(self.left);
        let width = f64::from(self.right) - f64::from(self.left);
        let index = (offset * self.keys.len() as f64 / width).floor() as usize;
        // Rounding just below `right` can land on `len`.
        self.keys.get(index.min(self.keys.len() - 1)).copied()
    }
}

/// Vertical pixel range `[top, bottom)` holding spans.
///
/// Spans are tried in declaration order, so an earlier span wins where two
/// overlap.
#[derive(Debug, Clone)]
pub struct Row {
    top: i32,
    bottom: i32,
    spans: Vec<Span>,
}

impl Row {
    pub fn new(top: i32, bottom: i32, spans: Vec<Span>) -> Result<Self, ConfigError> {
        if bottom <= top {
            return Err(ConfigError::EmptyRowRange { top, bottom });
        }
        Ok(Self { top, bottom, spans })
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn hit(&self, point: Point) -> Option<Key> {
        if !(point.y >= f64::from(self.top) && point.y < f64::from(self.bottom)) {
            return None;
        }
        self.spans.iter().find_map(|span| span.hit(point))
    }
}

/// Complete hit geometry of one skin.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rows: Vec<Row>,
    polygons: Vec<Polygon>,
}

impl Layout {
    #[must_use]
    pub fn new(rows: Vec<Row>, polygons: Vec<Polygon>) -> Self {
        Self { rows, polygons }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Resolve `point` to a key. Rows always take precedence; polygons
    /// are only evaluated when no row claims the point.
    #[must_use]
    pub fn hit(&self, point: Point) -> Option<Key> {
        self.rows
            .iter()
            .find_map(|row| row.hit(point))
            .or_else(|| self.polygons.iter().find_map(|polygon| polygon.hit(point)))
    }
}
