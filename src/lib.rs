pub mod error;
pub mod geometry;
pub mod math;
pub mod store;

pub use error::{GeometryError, PolychainError, Result};
pub use geometry::{Distance, Measure, Movable, Point, PolygonalChain, Segment};
pub use store::{PointId, PointStore};
