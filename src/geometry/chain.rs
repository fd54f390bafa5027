use crate::error::Result;
use crate::store::{PointId, PointStore};

use super::{Measure, Movable, Segment};

/// An open polyline from `start` through ordered midpoints to `end`.
///
/// Midpoints are appended only. Repeated IDs are kept as-is, so a point may
/// appear several times in the same chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonalChain {
    start: PointId,
    end: PointId,
    midpoints: Vec<PointId>,
}

impl PolygonalChain {
    /// Creates a chain with no midpoints.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self {
            start,
            end,
            midpoints: Vec::new(),
        }
    }

    /// Returns the ID of the chain's first point.
    #[must_use]
    pub fn start(&self) -> PointId {
        self.start
    }

    /// Returns the ID of the chain's last point.
    #[must_use]
    pub fn end(&self) -> PointId {
        self.end
    }

    /// Returns the midpoints in insertion order.
    #[must_use]
    pub fn midpoints(&self) -> &[PointId] {
        &self.midpoints
    }

    /// Appends a midpoint after the existing ones.
    pub fn add_midpoint(&mut self, point: PointId) {
        self.midpoints.push(point);
        tracing::trace!(id = ?point, count = self.midpoints.len(), "midpoint added");
    }

    /// Returns the full ordered point list: start, midpoints, end.
    #[must_use]
    pub fn points(&self) -> Vec<PointId> {
        let mut points = Vec::with_capacity(self.midpoints.len() + 2);
        points.push(self.start);
        points.extend_from_slice(&self.midpoints);
        points.push(self.end);
        points
    }

    /// Returns the segments between each consecutive pair of [`points`](Self::points).
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        let points = self.points();
        (0..points.len() - 1).map(move |i| Segment::new(points[i], points[i + 1]))
    }

    /// Renders the chain as `(x1,y1),(x2,y2),...,(xn,yn)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is not found in the store.
    pub fn render(&self, store: &PointStore) -> Result<String> {
        let rendered = self
            .points()
            .into_iter()
            .map(|id| store.point(id).map(ToString::to_string))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rendered.join(","))
    }
}

impl Measure for PolygonalChain {
    /// Sum of the lengths of [`segments`](PolygonalChain::segments), each
    /// computed on its own and added in order.
    fn length(&self, store: &PointStore) -> Result<f64> {
        let mut total = 0.0;
        for seg in self.segments() {
            total += seg.length(store)?;
        }
        Ok(total)
    }
}

impl Movable for PolygonalChain {
    /// Moves start, then each midpoint, then end. A point referenced more
    /// than once is moved once per reference.
    fn translate(&self, store: &mut PointStore, dx: f64, dy: f64) -> Result<()> {
        tracing::debug!(dx, dy, points = self.midpoints.len() + 2, "translating chain");
        self.start.translate(store, dx, dy)?;
        for id in &self.midpoints {
            id.translate(store, dx, dy)?;
        }
        self.end.translate(store, dx, dy)
    }
}
