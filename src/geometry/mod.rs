pub mod chain;
pub mod point;
pub mod segment;

pub use chain::PolygonalChain;
pub use point::Point;
pub use segment::Segment;

use crate::error::Result;
use crate::store::PointStore;

/// Trait for values with a distance from the origin.
pub trait Distance {
    /// Returns the distance of this value from the origin.
    fn distance(&self) -> f64;
}

/// Trait for shapes whose length is derived from points in a [`PointStore`].
pub trait Measure {
    /// Computes the current length of the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is not found in the store.
    fn length(&self, store: &PointStore) -> Result<f64>;
}

/// Trait for shapes that can be translated in place.
pub trait Movable {
    /// Translates every point referenced by the shape by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is not found in the store.
    fn translate(&self, store: &mut PointStore, dx: f64, dy: f64) -> Result<()>;
}
