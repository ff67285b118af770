pub mod angle;
pub mod config;
pub mod error;
pub mod frame;
pub mod geodetic;
pub mod heading;
pub mod spherical_coordinates;
pub mod surface;
pub mod tangent;

pub use angle::Angle;
pub use error::{Error, Result};
pub use frame::CoordinateType;
pub use spherical_coordinates::SphericalCoordinates;
pub use surface::{Ellipsoid, SurfaceType};

pub use nalgebra::Vector3;
