//! Planar distance math for route costing.

use crate::models::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Length of the closed tour depot -> `sequence`... -> depot.
///
/// An empty sequence costs 0.
pub fn route_length(depot: Point, sequence: &[Point]) -> f64 {
    let (Some(first), Some(last)) = (sequence.first(), sequence.last()) else {
        return 0.0;
    };

    let legs: f64 = sequence
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum();

    distance(depot, *first) + legs + distance(*last, depot)
}

/// Same as [`route_length`] but visiting `points` through an index permutation.
pub(crate) fn indexed_route_length(depot: Point, points: &[Point], order: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };

    let legs: f64 = order
        .windows(2)
        .map(|pair| distance(points[pair[0]], points[pair[1]]))
        .sum();

    distance(depot, points[first]) + legs + distance(points[last], depot)
}
