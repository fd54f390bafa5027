use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GeometryError;
use crate::geometry::Point;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Slot of a point inside a single store.
    struct PointKey;
}

static NEXT_STORE_TAG: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a point in the point store.
///
/// Carries the tag of the store that issued it, so a lookup in any other
/// store fails instead of resolving to an unrelated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId {
    store: u64,
    key: PointKey,
}

/// Central arena that owns all points.
///
/// Segments and chains reference points via typed IDs (generational indices).
/// Two shapes holding the same [`PointId`] share that point: moving it through
/// one of them is visible through the other.
#[derive(Debug)]
pub struct PointStore {
    tag: u64,
    points: SlotMap<PointKey, Point>,
}

impl Default for PointStore {
    fn default() -> Self {
        Self {
            tag: NEXT_STORE_TAG.fetch_add(1, Ordering::Relaxed),
            points: SlotMap::with_key(),
        }
    }
}

impl PointStore {
    /// Creates a new, empty point store with its own tag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point and returns its ID.
    pub fn add_point(&mut self, point: Point) -> PointId {
        let id = PointId {
            store: self.tag,
            key: self.points.insert(point),
        };
        tracing::debug!(?id, %point, "point added");
        id
    }

    /// Returns a reference to the point, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID was issued by a different store.
    pub fn point(&self, id: PointId) -> Result<&Point, GeometryError> {
        self.key_of(id)
            .and_then(|key| self.points.get(key))
            .ok_or_else(|| GeometryError::PointNotFound(format!("{id:?}")))
    }

    /// Returns a mutable reference to the point, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID was issued by a different store.
    pub fn point_mut(&mut self, id: PointId) -> Result<&mut Point, GeometryError> {
        self.key_of(id)
            .and_then(|key| self.points.get_mut(key))
            .ok_or_else(|| GeometryError::PointNotFound(format!("{id:?}")))
    }

    fn key_of(&self, id: PointId) -> Option<PointKey> {
        (id.store == self.tag).then_some(id.key)
    }

    /// Returns the number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut store = PointStore::new();
        assert!(store.is_empty());
        let id = store.add_point(Point::new(1.0, 2.0));
        assert_eq!(store.len(), 1);
        let p = store.point(id).unwrap();
        assert!((p.x() - 1.0).abs() < 1e-12);
        assert!((p.y() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn mutation_is_visible_through_every_copy_of_the_id() {
        let mut store = PointStore::new();
        let id = store.add_point(Point::new(1.0, 1.0));
        let alias = id;
        store.point_mut(id).unwrap().move_by(2.0, 3.0);
        let p = store.point(alias).unwrap();
        assert!((p.x() - 3.0).abs() < 1e-12);
        assert!((p.y() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn foreign_id_is_not_found() {
        let mut other = PointStore::new();
        let foreign = other.add_point(Point::origin());
        let store = PointStore::new();
        assert!(matches!(
            store.point(foreign),
            Err(GeometryError::PointNotFound(_))
        ));
    }

    #[test]
    fn foreign_id_is_not_found_mut() {
        let mut other = PointStore::new();
        let foreign = other.add_point(Point::origin());
        let mut store = PointStore::new();
        let local = store.add_point(Point::new(9.0, 9.0));
        assert!(store.point_mut(foreign).is_err());
        assert_eq!(*store.point(local).unwrap(), Point::new(9.0, 9.0));
    }

    #[test]
    fn foreign_id_in_same_slot_is_not_found() {
        let mut other = PointStore::new();
        let foreign = other.add_point(Point::new(0.0, 0.0));
        let mut store = PointStore::new();
        let local = store.add_point(Point::new(100.0, 100.0));
        assert_ne!(foreign, local);
        assert!(matches!(
            store.point(foreign),
            Err(GeometryError::PointNotFound(_))
        ));
        assert!(store.point(local).is_ok());
    }
}
