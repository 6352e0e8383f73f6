//! Wedge stability engine.
//!
//! Composes the stereonet primitives with alpha-shape extraction, boundary
//! stitching, and polygon containment into the Stable / Unstable decision.
//!
//! Pipeline
//! - Pairwise plane intersections: 1∩2, 1∩3, 2∩3.
//! - Per joint, keep the great-circle sub-arc between the trends of its
//!   own two intersection lines, ordered onto the minor arc; the pooled
//!   sub-arc points trace the directions a removable block could take.
//! - Alpha shape + stitching over the pooled points → the unsafe polygon.
//! - Origin inside (gravity has no joint resistance) → Falling. Otherwise
//!   probe the three dip vectors and the three intersection lines against
//!   the polygon and the friction angle; the steepest qualifying candidate
//!   names the sliding mode.

use log::debug;
use serde::Deserialize;
use std::time::Instant;

use crate::alpha_shape::alpha_shape;
use crate::angle::{is_between, minor_arc_order};
use crate::boundary::{is_closed, stitch_boundaries, Boundary};
use crate::error::WedgeError;
use crate::polygon::Polygon;
use crate::stereonet::{plane_arc, plane_intersection, project};
use crate::types::{
    Classification, FailureMode, IntersectionLine, JointOrientation, Point2, WedgeResult,
};

/// Joint pairs behind the three intersection lines. The two lines bounding
/// joint k's sub-arc are exactly the two its index participates in, which
/// lands on the same table.
const INTERSECT_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Candidate labels: three dip vectors, then three intersection lines.
const SLIDE_LABELS: [&str; 6] = ["1", "2", "3", "1/2", "1/3", "2/3"];

/// Tunables for the stability analysis.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WedgeParams {
    /// Circumradius threshold for the alpha shape, in disk units.
    pub alpha: f64,
    /// Great-circle sampling density per joint plane.
    pub arc_segments: usize,
    /// How far candidate probe points are pulled toward the rim, in
    /// degrees of plunge. Keeps probes lying exactly on a bounding arc
    /// from testing indecisively.
    pub probe_offset_deg: f64,
}

impl Default for WedgeParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            arc_segments: 180,
            probe_offset_deg: 1.0,
        }
    }
}

/// Stability analyzer for a three-joint rock wedge.
///
/// Stateless apart from its parameters; every call allocates its own
/// intermediate structures, so one analyzer can serve concurrent callers.
pub struct WedgeAnalyzer {
    params: WedgeParams,
}

impl WedgeAnalyzer {
    pub fn new(params: WedgeParams) -> Self {
        Self { params }
    }

    /// Runs one full analysis. All angles are degrees; dips and the
    /// friction angle must lie in (0, 90), dip directions in [0, 360).
    pub fn analyze(
        &self,
        joints: &[JointOrientation; 3],
        friction_angle_deg: f64,
    ) -> Result<WedgeResult, WedgeError> {
        let t0 = Instant::now();
        self.validate(joints, friction_angle_deg)?;

        let mut intersections = [IntersectionLine::default(); 3];
        for (k, &(i, j)) in INTERSECT_PAIRS.iter().enumerate() {
            intersections[k] = plane_intersection(&joints[i], &joints[j])?;
        }

        let points = self.collect_unsafe_points(joints, &intersections)?;
        let polygon = self.unsafe_polygon(&points)?;
        let (classification, mode) =
            self.classify(joints, &intersections, &polygon, friction_angle_deg);

        Ok(WedgeResult {
            classification,
            mode,
            intersections,
            polygon,
            latency_ms: t0.elapsed().as_secs_f64() * 1000.0,
        })
    }

    fn validate(
        &self,
        joints: &[JointOrientation; 3],
        friction_angle_deg: f64,
    ) -> Result<(), WedgeError> {
        for (k, joint) in joints.iter().enumerate() {
            joint
                .validate()
                .map_err(|e| WedgeError::InvalidInput(format!("joint {}: {e}", k + 1)))?;
        }
        if !(friction_angle_deg > 0.0 && friction_angle_deg < 90.0) {
            return Err(WedgeError::InvalidInput(format!(
                "friction angle must be in (0, 90) degrees, got {friction_angle_deg}"
            )));
        }
        if self.params.arc_segments < 8 {
            return Err(WedgeError::InvalidInput(format!(
                "arc_segments must be at least 8, got {}",
                self.params.arc_segments
            )));
        }
        if !(self.params.alpha > 0.0) {
            return Err(WedgeError::InvalidInput(format!(
                "alpha must be positive, got {}",
                self.params.alpha
            )));
        }
        Ok(())
    }

    /// Pools, per joint, the projected sub-arc of its great circle lying
    /// between the trends of its two intersection lines.
    fn collect_unsafe_points(
        &self,
        joints: &[JointOrientation; 3],
        intersections: &[IntersectionLine; 3],
    ) -> Result<Vec<Point2>, WedgeError> {
        let mut points = Vec::new();
        for (k, joint) in joints.iter().enumerate() {
            let (ia, ib) = INTERSECT_PAIRS[k];
            let (from, to) =
                minor_arc_order(intersections[ia].trend_deg, intersections[ib].trend_deg)
                    .ok_or_else(|| {
                        WedgeError::DegenerateGeometry(format!(
                            "intersection trends bounding joint {} coincide",
                            k + 1
                        ))
                    })?;
            let arc = plane_arc(joint, self.params.arc_segments);
            let total = arc.len();
            let kept: Vec<Point2> = arc
                .into_iter()
                .filter(|&(trend, _)| is_between(trend, from, to))
                .map(|(trend, plunge)| project(trend, plunge))
                .collect();
            debug!(
                "joint {}: kept {}/{} arc samples between trends {from:.1} and {to:.1}",
                k + 1,
                kept.len(),
                total
            );
            points.extend(kept);
        }
        // The joints were valid, so too few survivors means the bounding
        // arcs collapsed, not that the caller broke a precondition.
        if points.len() < 4 {
            return Err(WedgeError::DegenerateGeometry(format!(
                "only {} arc sample(s) fall between the bounding intersections",
                points.len()
            )));
        }
        Ok(points)
    }

    /// Extracts the closed outer boundary of the pooled point set.
    fn unsafe_polygon(&self, points: &[Point2]) -> Result<Polygon, WedgeError> {
        let edges = alpha_shape(points, self.params.alpha, true)?;
        if edges.is_empty() {
            return Err(WedgeError::DegenerateGeometry(
                "no triangle passed the alpha threshold".into(),
            ));
        }
        let loops = stitch_boundaries(&edges);
        debug!(
            "stitched {} boundary loop(s) from {} edges",
            loops.len(),
            edges.len()
        );
        // The outer boundary is the longest loop; first wins on ties.
        let mut outer: Option<&Boundary> = None;
        for b in &loops {
            if outer.map_or(true, |o| b.len() > o.len()) {
                outer = Some(b);
            }
        }
        let outer = outer
            .ok_or_else(|| WedgeError::DegenerateGeometry("no boundary loop stitched".into()))?;
        if !is_closed(outer) {
            return Err(WedgeError::DegenerateGeometry(
                "outer boundary does not close".into(),
            ));
        }
        Ok(Polygon::from_boundary(outer, points))
    }

    /// The stability decision over the unsafe polygon.
    ///
    /// Candidate order is J1, J2, J3, J1/2, J1/3, J2/3 and the comparison
    /// is strict, so the steepest qualifying candidate wins and ties go to
    /// the earliest in that order.
    fn classify(
        &self,
        joints: &[JointOrientation; 3],
        intersections: &[IntersectionLine; 3],
        polygon: &Polygon,
        friction_angle_deg: f64,
    ) -> (Classification, FailureMode) {
        if polygon.contains(0.0, 0.0, true) {
            debug!("origin inside unsafe region: falling wedge");
            return (Classification::Unstable, FailureMode::Falling);
        }

        // (label, trend, plunge); the plunge doubles as the candidate's
        // true dip angle for the friction comparison.
        let mut candidates: Vec<(&'static str, f64, f64)> = Vec::with_capacity(6);
        for (k, joint) in joints.iter().enumerate() {
            candidates.push((SLIDE_LABELS[k], joint.dip_direction_deg, joint.dip_deg));
        }
        for (k, line) in intersections.iter().enumerate() {
            candidates.push((SLIDE_LABELS[3 + k], line.trend_deg, line.plunge_deg));
        }

        let mut best: Option<(&'static str, f64)> = None;
        for (label, trend, plunge) in candidates {
            let probe = project(trend, plunge - self.params.probe_offset_deg);
            let inside = polygon.contains(probe.x, probe.y, true);
            debug!("candidate {label}: plunge {plunge:.1}, probe inside={inside}");
            if inside
                && plunge >= friction_angle_deg
                && best.map_or(true, |(_, angle)| plunge > angle)
            {
                best = Some((label, plunge));
            }
        }

        match best {
            Some((joint, angle_deg)) => {
                debug!("sliding on joint {joint} at {angle_deg:.1} degrees");
                (
                    Classification::Unstable,
                    FailureMode::Sliding { joint, angle_deg },
                )
            }
            None => (Classification::Stable, FailureMode::None),
        }
    }
}
