//! Polygon construction and point-in-polygon testing.

use serde::Serialize;

use crate::boundary::Boundary;
use crate::types::Point2;

/// A polygon in projection coordinates. The closing edge from the last
/// vertex back to the first is implicit.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from a stitched loop by dereferencing each edge's
    /// start index against the point set the edges were built over.
    pub fn from_boundary(boundary: &Boundary, points: &[Point2]) -> Self {
        Self {
            vertices: boundary.iter().map(|&(i, _)| points[i]).collect(),
        }
    }

    /// Horizontal-ray crossing-number containment test.
    ///
    /// Casts a ray to the right from (x, y) and counts edge crossings;
    /// works for non-convex polygons. A query exactly on an edge or
    /// vertex resolves to `include_edges` instead of floating-point
    /// tie-breaking, and horizontal edges are handled explicitly.
    pub fn contains(&self, x: f64, y: f64, include_edges: bool) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut p1 = self.vertices[0];
        for i in 1..=n {
            let p2 = self.vertices[i % n];
            if p1.y == p2.y {
                if y == p1.y {
                    if p1.x.min(p2.x) <= x && x <= p1.x.max(p2.x) {
                        // on a horizontal edge
                        return include_edges;
                    }
                    if x < p1.x.min(p2.x) {
                        inside = !inside;
                    }
                }
            } else if p1.y.min(p2.y) <= y && y <= p1.y.max(p2.y) {
                let x_cross = (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if x == x_cross {
                    return include_edges;
                }
                if x < x_cross {
                    inside = !inside;
                }
            }
            p1 = p2;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn square_ground_truths() {
        let poly = unit_square();
        assert!(poly.contains(0.5, 0.5, true));
        assert!(!poly.contains(2.0, 2.0, true));
        assert!(!poly.contains(-0.5, 0.5, false));
    }

    #[test]
    fn on_edge_resolves_to_flag() {
        let poly = unit_square();
        assert!(poly.contains(0.0, 0.5, true));
        assert!(!poly.contains(0.0, 0.5, false));
        // horizontal edge
        assert!(poly.contains(0.5, 1.0, true));
        assert!(!poly.contains(0.5, 1.0, false));
        // vertex
        assert!(poly.contains(0.0, 0.0, true));
        assert!(!poly.contains(0.0, 0.0, false));
    }

    #[test]
    fn concave_polygon() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(poly.contains(0.5, 1.5, true));
        assert!(poly.contains(1.5, 0.5, true));
        assert!(!poly.contains(1.5, 1.5, true));
    }

    #[test]
    fn explicit_closing_vertex_is_tolerated() {
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ]);
        assert!(poly.contains(0.5, 0.5, true));
        assert!(!poly.contains(2.0, 0.5, true));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let poly = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(!poly.contains(0.5, 0.0, true));
    }
}
