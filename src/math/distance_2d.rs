use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn point_to_point_dist(a: &Point2, b: &Point2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns the Euclidean distance from `p` to the origin.
#[must_use]
pub fn point_to_origin_dist(p: &Point2) -> f64 {
    (p.x * p.x + p.y * p.y).sqrt()
}
