//! Stitches an unordered directed-edge set into ordered vertex loops.
//!
//! Loop starts and continuations always consume the lowest available edge,
//! so the traversal order is reproducible run to run.

use crate::alpha_shape::EdgeSet;

/// An ordered edge path; consecutive edges share an endpoint.
pub type Boundary = Vec<(usize, usize)>;

/// Reorders `edges` into boundary loops.
///
/// Each loop starts from the lowest remaining edge. At the running
/// endpoint the stitcher prefers an edge leaving it; failing that it takes
/// an edge arriving at it, flipped on append. A loop ends when it returns
/// to its starting vertex or no continuing edge remains, so a dangling
/// chain terminates as an unclosed path: callers check closure with
/// [`is_closed`] rather than assume it.
pub fn stitch_boundaries(edges: &EdgeSet) -> Vec<Boundary> {
    let mut edge_set = edges.clone();
    let mut boundaries = Vec::new();

    while let Some(&first) = edge_set.iter().next() {
        edge_set.remove(&first);
        let start = first.0;
        let mut end = first.1;
        let mut boundary = vec![first];

        while end != start {
            let forward = edge_set.range((end, 0)..=(end, usize::MAX)).next().copied();
            let next = match forward {
                Some(edge) => {
                    edge_set.remove(&edge);
                    edge
                }
                None => match edge_set.iter().find(|&&(_, j)| j == end).copied() {
                    Some(edge) => {
                        edge_set.remove(&edge);
                        (edge.1, edge.0) // flip to keep the path directed
                    }
                    None => break,
                },
            };
            end = next.1;
            boundary.push(next);
        }
        boundaries.push(boundary);
    }
    boundaries
}

/// True when the path returns to its starting vertex.
pub fn is_closed(boundary: &Boundary) -> bool {
    match (boundary.first(), boundary.last()) {
        (Some(first), Some(last)) => first.0 == last.1,
        _ => false,
    }
}
