use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown surface type [{0}]")]
    UnknownSurface(i32),

    #[error("Unknown coordinate type [{0}]")]
    UnknownCoordinateType(i32),

    #[error("Unknown coordinate type name: {0}")]
    UnknownCoordinateName(String),

    #[error("Spherical velocities are not supported")]
    SphericalVelocity,

    #[error("Geodetic inversion did not converge for ECEF ({x}, {y}, {z})")]
    NonConvergent { x: f64, y: f64, z: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
