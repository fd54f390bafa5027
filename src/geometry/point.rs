use std::fmt;

use crate::error::Result;
use crate::math::distance_2d::point_to_origin_dist;
use crate::math::{Point2, Vector2};
use crate::store::{PointId, PointStore};

use super::{Distance, Movable};

/// A mutable 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    position: Point2,
}

impl Point {
    /// Creates a point at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    /// Creates a point at `(a, a)`.
    #[must_use]
    pub fn splat(a: f64) -> Self {
        Self::new(a, a)
    }

    /// Creates a point at the origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            position: Point2::origin(),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the underlying nalgebra position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    /// Translates the point in place by `(dx, dy)`.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.position += Vector2::new(dx, dy);
    }

    /// Returns `true` if both coordinates are within `tol` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.x() - other.x()).abs() <= tol && (self.y() - other.y()).abs() <= tol
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl Distance for Point {
    fn distance(&self) -> f64 {
        point_to_origin_dist(&self.position)
    }
}

impl Movable for PointId {
    fn translate(&self, store: &mut PointStore, dx: f64, dy: f64) -> Result<()> {
        store.point_mut(*self)?.move_by(dx, dy);
        tracing::trace!(id = ?self, dx, dy, "point moved");
        Ok(())
    }
}

/// Formats as `(x,y)` with the shortest round-trip representation of each
/// coordinate, so whole numbers carry no decimal point.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x(), self.y())
    }
}
