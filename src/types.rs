use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;

/// A point in projected (equal-area stereonet) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One rock discontinuity plane in dip / dip-direction convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointOrientation {
    /// Steepest-descent angle of the plane, degrees in (0, 90).
    pub dip_deg: f64,
    /// Compass bearing of that descent, degrees in [0, 360).
    pub dip_direction_deg: f64,
}

impl JointOrientation {
    pub const fn new(dip_deg: f64, dip_direction_deg: f64) -> Self {
        Self {
            dip_deg,
            dip_direction_deg,
        }
    }

    /// Strike in the right-hand convention (dip direction − 90°).
    pub fn strike_deg(&self) -> f64 {
        crate::angle::normalize_360(self.dip_direction_deg - 90.0)
    }

    /// Checks the documented input ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.dip_deg > 0.0 && self.dip_deg < 90.0) {
            return Err(format!(
                "dip must be in (0, 90) degrees, got {}",
                self.dip_deg
            ));
        }
        if !(0.0..360.0).contains(&self.dip_direction_deg) {
            return Err(format!(
                "dip direction must be in [0, 360) degrees, got {}",
                self.dip_direction_deg
            ));
        }
        Ok(())
    }
}

/// A plane-plane intersection line in trend / plunge convention, degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct IntersectionLine {
    pub trend_deg: f64,
    pub plunge_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Classification {
    Stable,
    Unstable,
}

/// Reported failure mode. `Sliding` carries the joint label ("1", "2",
/// "3", "1/2", "1/3" or "2/3") and the controlling dip or plunge angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureMode {
    None,
    Falling,
    Sliding { joint: &'static str, angle_deg: f64 },
}

/// Full analysis report returned by the engine.
#[derive(Clone, Debug, Serialize)]
pub struct WedgeResult {
    pub classification: Classification,
    pub mode: FailureMode,
    /// Pairwise joint intersections: 1∩2, 1∩3, 2∩3.
    pub intersections: [IntersectionLine; 3],
    /// Boundary of the unsafe direction region, for downstream rendering.
    pub polygon: Polygon,
    pub latency_ms: f64,
}
