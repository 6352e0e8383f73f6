//! Lower-hemisphere equal-area (Schmidt) projection primitives.
//!
//! Reference frame: x north, y east, z down. Directions are flipped into
//! the lower hemisphere before use; the projection maps a downward unit
//! direction onto the unit disk with north up and east right, so a
//! vertical line (gravity) lands on the origin and horizontal lines land
//! on the rim.
//!
//! These are the collaborators the stability engine consumes; they carry
//! no decision logic of their own.

use nalgebra::Vector3;

use crate::angle::normalize_360;
use crate::error::WedgeError;
use crate::types::{IntersectionLine, JointOrientation, Point2};

/// Minimum cross-product norm accepted when intersecting two planes.
const PARALLEL_EPS: f64 = 1e-9;

/// Plunge below which an intersection line counts as horizontal and its
/// trend gets canonicalized, degrees.
const HORIZONTAL_PLUNGE_EPS: f64 = 1e-9;

/// Unit direction of a line given compass trend and downward plunge,
/// degrees.
pub fn direction(trend_deg: f64, plunge_deg: f64) -> Vector3<f64> {
    let t = trend_deg.to_radians();
    let p = plunge_deg.to_radians();
    Vector3::new(p.cos() * t.cos(), p.cos() * t.sin(), p.sin())
}

/// Trend and plunge (degrees) of a direction vector, flipped into the
/// lower hemisphere when it points upward.
pub fn trend_plunge(v: &Vector3<f64>) -> (f64, f64) {
    let w = if v.z < 0.0 { -*v } else { *v };
    let w = w.normalize();
    let trend = normalize_360(w.y.atan2(w.x).to_degrees());
    let plunge = w.z.clamp(-1.0, 1.0).asin().to_degrees();
    (trend, plunge)
}

/// Equal-area projection of a line onto the unit disk.
pub fn project(trend_deg: f64, plunge_deg: f64) -> Point2 {
    let t = trend_deg.to_radians();
    let r = std::f64::consts::SQRT_2
        * (std::f64::consts::FRAC_PI_4 - plunge_deg.to_radians() / 2.0).sin();
    Point2::new(r * t.sin(), r * t.cos())
}

/// Pole (downward normal) of a joint plane as (trend, plunge), degrees.
pub fn pole(joint: &JointOrientation) -> (f64, f64) {
    (
        normalize_360(joint.dip_direction_deg + 180.0),
        90.0 - joint.dip_deg,
    )
}

/// Unit downward normal vector of a joint plane.
pub fn plane_normal(joint: &JointOrientation) -> Vector3<f64> {
    let (trend, plunge) = pole(joint);
    direction(trend, plunge)
}

/// Samples the great-circle trace of a joint plane as `segments + 1`
/// lower-hemisphere (trend, plunge) pairs, degrees, running from one
/// strike end through the downdip direction to the other strike end.
pub fn plane_arc(joint: &JointOrientation, segments: usize) -> Vec<(f64, f64)> {
    let strike = direction(joint.strike_deg(), 0.0);
    let downdip = direction(joint.dip_direction_deg, joint.dip_deg);
    (0..=segments)
        .map(|k| {
            let theta = std::f64::consts::PI * k as f64 / segments as f64;
            trend_plunge(&(strike * theta.cos() + downdip * theta.sin()))
        })
        .collect()
}

/// Line of intersection of two joint planes.
///
/// Errors when the planes are parallel or coincident within tolerance.
pub fn plane_intersection(
    a: &JointOrientation,
    b: &JointOrientation,
) -> Result<IntersectionLine, WedgeError> {
    let cross = plane_normal(a).cross(&plane_normal(b));
    if cross.norm() < PARALLEL_EPS {
        return Err(WedgeError::DegenerateGeometry(format!(
            "planes {a:?} and {b:?} are parallel or coincident"
        )));
    }
    let (mut trend_deg, mut plunge_deg) = trend_plunge(&cross);
    if plunge_deg < HORIZONTAL_PLUNGE_EPS {
        // A horizontal cross product carries a noise-scale z component, so
        // the hemisphere flip inside trend_plunge would pick one of the two
        // rim representatives at random. Canonicalize the trend into the
        // south half [90, 270) and pin the plunge to zero.
        if !(90.0..270.0).contains(&trend_deg) {
            trend_deg = normalize_360(trend_deg + 180.0);
        }
        plunge_deg = 0.0;
    }
    Ok(IntersectionLine {
        trend_deg,
        plunge_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn vertical_line_projects_to_origin() {
        let p = project(123.0, 90.0);
        assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12);
    }

    #[test]
    fn horizontal_lines_project_to_the_rim() {
        let north = project(0.0, 0.0);
        assert!(approx_eq(north.x, 0.0) && approx_eq(north.y, 1.0));
        let east = project(90.0, 0.0);
        assert!(approx_eq(east.x, 1.0) && east.y.abs() < 1e-12);
    }

    #[test]
    fn equal_area_radius_at_45_degrees() {
        // sqrt(2) * sin(22.5°)
        let p = project(90.0, 45.0);
        assert!(approx_eq(p.x, 0.5411961001461971));
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn pole_of_plane() {
        let joint = JointOrientation::new(30.0, 45.0);
        let (trend, plunge) = pole(&joint);
        assert!(approx_eq(trend, 225.0));
        assert!(approx_eq(plunge, 60.0));
    }

    #[test]
    fn direction_trend_plunge_round_trip() {
        let (trend, plunge) = trend_plunge(&direction(123.0, 37.0));
        assert!(approx_eq(trend, 123.0));
        assert!(approx_eq(plunge, 37.0));
    }

    #[test]
    fn upward_vectors_flip_to_lower_hemisphere() {
        let (trend, plunge) = trend_plunge(&-direction(123.0, 37.0));
        assert!(approx_eq(trend, 123.0));
        assert!(approx_eq(plunge, 37.0));
    }

    #[test]
    fn plane_arc_runs_strike_to_strike_through_downdip() {
        let joint = JointOrientation::new(60.0, 90.0);
        let arc = plane_arc(&joint, 180);
        assert_eq!(arc.len(), 181);
        assert!(approx_eq(arc[0].0, 0.0) && arc[0].1.abs() < 1e-9);
        let (mid_trend, mid_plunge) = arc[90];
        assert!(approx_eq(mid_trend, 90.0));
        assert!(approx_eq(mid_plunge, 60.0));
        assert!(approx_eq(arc[180].0, 180.0) && arc[180].1.abs() < 1e-9);
        assert!(arc.iter().all(|&(_, p)| (0.0..=60.0 + 1e-9).contains(&p)));
    }

    #[test]
    fn opposed_45_degree_planes_intersect_horizontally() {
        let a = JointOrientation::new(45.0, 90.0);
        let b = JointOrientation::new(45.0, 270.0);
        let line = plane_intersection(&a, &b).unwrap();
        assert_eq!(line.plunge_deg, 0.0);
        assert!(approx_eq(line.trend_deg, 180.0));
    }

    #[test]
    fn horizontal_intersection_trend_is_canonical_for_either_order() {
        // The normals' cross product here is horizontal up to a noise-scale
        // z component of either sign; both argument orders must land on the
        // same rim representative.
        let a = JointOrientation::new(45.0, 90.0);
        let b = JointOrientation::new(45.0, 270.0);
        let ab = plane_intersection(&a, &b).unwrap();
        let ba = plane_intersection(&b, &a).unwrap();
        assert_eq!(ab.plunge_deg, 0.0);
        assert_eq!(ba.plunge_deg, 0.0);
        assert!(approx_eq(ab.trend_deg, 180.0));
        assert!(approx_eq(ba.trend_deg, 180.0));
    }

    #[test]
    fn perpendicular_45_degree_planes_intersect_at_classic_angles() {
        let a = JointOrientation::new(45.0, 90.0);
        let b = JointOrientation::new(45.0, 180.0);
        let line = plane_intersection(&a, &b).unwrap();
        assert!(approx_eq(line.trend_deg, 135.0));
        assert!((line.plunge_deg - 35.264389682754654).abs() < 1e-9);
    }

    #[test]
    fn coincident_planes_are_degenerate() {
        let a = JointOrientation::new(45.0, 90.0);
        assert!(matches!(
            plane_intersection(&a, &a),
            Err(WedgeError::DegenerateGeometry(_))
        ));
    }
}
