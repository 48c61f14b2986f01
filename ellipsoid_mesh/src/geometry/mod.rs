use thiserror::Error;

pub mod ellipsoid;

use ellipsoid::EllipsoidErrors;

#[derive(Debug, Error)]
pub enum GeometryErrors {
    #[error("{0}")]
    EllipsoidErrors(#[from] EllipsoidErrors),
}

/// Minimum number of samples along either parametric direction. With fewer
/// samples the angular step divides by zero.
pub const MIN_RESOLUTION: usize = 2;
