use thiserror::Error;

/// Failures surfaced by the stability engine and its geometry stages.
///
/// Every failure is deterministic given the inputs; there is no I/O and
/// nothing to retry. No partial result accompanies an error.
#[derive(Debug, Error)]
pub enum WedgeError {
    /// An input violated a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Geometry degenerated mid-pipeline: parallel or coincident planes,
    /// an empty triangulation, or a boundary that fails to close.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
