//! Concave-hull ("alpha shape") extraction over a 2-D point set.
//!
//! Delaunay-triangulates the points and keeps the edges of triangles whose
//! circumscribed-circle radius is below `alpha`. In outer-only mode an edge
//! shared by two accepted triangles cancels out, leaving exactly the edges
//! that belong to one accepted triangle: the boundary of the shape.

use std::collections::BTreeSet;

use delaunator::{triangulate, Point};
use log::debug;

use crate::error::WedgeError;
use crate::types::Point2;

/// Directed edges keyed by (start, end) indices into the input points.
/// Ordered so downstream traversal is reproducible run to run.
pub type EdgeSet = BTreeSet<(usize, usize)>;

/// Squared-area floor below which a triangle is numerically degenerate.
/// Its circumradius would blow up toward infinity and never pass the
/// alpha threshold anyway; skipping keeps NaN out of the edge set.
const AREA_SQ_EPS: f64 = 1e-24;

/// Computes the alpha shape of `points` as a set of directed edges.
///
/// Needs at least 4 points; a concave hull is undefined below a full
/// triangle cover with interior structure. A point set with no valid
/// triangulation (all collinear) yields an empty edge set; the caller
/// decides whether that is an error.
pub fn alpha_shape(
    points: &[Point2],
    alpha: f64,
    only_outer: bool,
) -> Result<EdgeSet, WedgeError> {
    if points.len() < 4 {
        return Err(WedgeError::InvalidInput(format!(
            "alpha shape needs at least 4 points, got {}",
            points.len()
        )));
    }

    let sites: Vec<Point> = points.iter().map(|p| Point { x: p.x, y: p.y }).collect();
    let triangulation = triangulate(&sites);

    let mut edges = EdgeSet::new();
    let mut skipped = 0usize;
    for tri in triangulation.triangles.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0], tri[1], tri[2]);
        let a = dist(points[ia], points[ib]);
        let b = dist(points[ib], points[ic]);
        let c = dist(points[ic], points[ia]);
        // Heron's formula, then R = abc / 4A.
        let s = (a + b + c) / 2.0;
        let area_sq = s * (s - a) * (s - b) * (s - c);
        if area_sq <= AREA_SQ_EPS {
            skipped += 1;
            continue;
        }
        let circum_r = a * b * c / (4.0 * area_sq.sqrt());
        if circum_r < alpha {
            add_edge(&mut edges, ia, ib, only_outer)?;
            add_edge(&mut edges, ib, ic, only_outer)?;
            add_edge(&mut edges, ic, ia, only_outer)?;
        }
    }

    if skipped > 0 {
        debug!("alpha_shape: skipped {skipped} degenerate triangle(s)");
    }
    debug!(
        "alpha_shape: {} triangles over {} points -> {} edges",
        triangulation.triangles.len() / 3,
        points.len(),
        edges.len()
    );
    Ok(edges)
}

/// Inserts the directed edge (i, j). A reverse edge already present means
/// the undirected edge is shared by two accepted triangles, i.e. interior
/// to the shape: in outer-only mode both directions are dropped.
fn add_edge(edges: &mut EdgeSet, i: usize, j: usize, only_outer: bool) -> Result<(), WedgeError> {
    if edges.contains(&(i, j)) {
        // A consistently oriented triangulation emits each directed edge
        // at most once.
        return Err(WedgeError::DegenerateGeometry(format!(
            "directed edge ({i}, {j}) produced twice by the triangulation"
        )));
    }
    if edges.contains(&(j, i)) {
        if only_outer {
            edges.remove(&(j, i));
        }
        return Ok(());
    }
    edges.insert((i, j));
    Ok(())
}

#[inline]
fn dist(p: Point2, q: Point2) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_keeps_four_boundary_edges() {
        // Both triangles of the square have circumradius ~0.707 < 1, so
        // the shared diagonal cancels and the four sides remain.
        let edges = alpha_shape(&unit_square(), 1.0, true).unwrap();
        assert_eq!(edges.len(), 4);
        for &(i, j) in &edges {
            assert!(!edges.contains(&(j, i)), "reverse duplicate of ({i}, {j})");
        }
    }

    #[test]
    fn inner_mode_keeps_the_diagonal() {
        let edges = alpha_shape(&unit_square(), 1.0, false).unwrap();
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn tight_alpha_rejects_everything() {
        let edges = alpha_shape(&unit_square(), 0.1, true).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn too_few_points_is_invalid_input() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(matches!(
            alpha_shape(&points, 1.0, true),
            Err(WedgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn collinear_points_yield_no_edges() {
        let points: Vec<Point2> = (0..5).map(|k| Point2::new(k as f64, 0.0)).collect();
        let edges = alpha_shape(&points, 1.0, true).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn concave_cloud_stays_concave() {
        // A dense C-shaped cloud: a loose alpha follows the concavity
        // instead of snapping to the convex hull.
        let mut points = Vec::new();
        for k in 0..=20 {
            let t = std::f64::consts::PI * 1.5 * k as f64 / 20.0;
            points.push(Point2::new(t.cos(), t.sin()));
            points.push(Point2::new(0.6 * t.cos(), 0.6 * t.sin()));
        }
        let edges = alpha_shape(&points, 0.5, true).unwrap();
        assert!(!edges.is_empty());
        for &(i, j) in &edges {
            assert!(!edges.contains(&(j, i)));
        }
    }
}
