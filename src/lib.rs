#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

// Geometry building blocks – public, but considered unstable internals.
pub mod alpha_shape;
pub mod angle;
pub mod boundary;
pub mod polygon;
pub mod stereonet;

// --- High-level re-exports -------------------------------------------------

pub use crate::engine::{WedgeAnalyzer, WedgeParams};
pub use crate::error::WedgeError;
pub use crate::polygon::Polygon;
pub use crate::types::{
    Classification, FailureMode, IntersectionLine, JointOrientation, Point2, WedgeResult,
};

/// Small prelude for quick experiments.
///
/// ```
/// use wedge_stability::prelude::*;
///
/// # fn main() -> Result<(), wedge_stability::WedgeError> {
/// let joints = [
///     JointOrientation::new(60.0, 90.0),
///     JointOrientation::new(70.0, 180.0),
///     JointOrientation::new(80.0, 270.0),
/// ];
/// let analyzer = WedgeAnalyzer::new(WedgeParams::default());
/// let report = analyzer.analyze(&joints, 30.0)?;
/// println!("{:?} {:?}", report.classification, report.mode);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::types::{Classification, FailureMode, JointOrientation, WedgeResult};
    pub use crate::{WedgeAnalyzer, WedgeError, WedgeParams};
}
