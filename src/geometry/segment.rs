use crate::error::Result;
use crate::math::distance_2d::point_to_point_dist;
use crate::store::{PointId, PointStore};

use super::Measure;

/// A straight segment between two stored points.
///
/// The endpoint IDs never change after construction; only the coordinates
/// they refer to do. `start` and `end` may be the same point, which gives a
/// degenerate segment of length zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: PointId,
    end: PointId,
}

impl Segment {
    /// Creates a new segment between two stored points.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// Returns the ID of the start point.
    #[must_use]
    pub fn start(&self) -> PointId {
        self.start
    }

    /// Returns the ID of the end point.
    #[must_use]
    pub fn end(&self) -> PointId {
        self.end
    }
}

impl Measure for Segment {
    /// Euclidean distance between the current start and end coordinates.
    fn length(&self, store: &PointStore) -> Result<f64> {
        let start = store.point(self.start)?;
        let end = store.point(self.end)?;
        Ok(point_to_point_dist(start.position(), end.position()))
    }
}
