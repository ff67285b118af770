use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Reference frame a vector is expressed in.
///
/// Only a selector for the transform calls. Integers outside the four
/// known frames are carried as `Unknown` so the dispatcher can pass the
/// input through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateType {
    /// Latitude, longitude, elevation
    Spherical,
    /// Earth centered, earth fixed Cartesian
    Ecef,
    /// Local tangent plane (East, North, Up)
    Global,
    /// Heading-adjusted tangent plane
    Local,
    Unknown(i32),
}

impl CoordinateType {
    pub const KNOWN: [CoordinateType; 4] = [
        CoordinateType::Spherical,
        CoordinateType::Ecef,
        CoordinateType::Global,
        CoordinateType::Local,
    ];

    pub fn raw(self) -> i32 {
        match self {
            CoordinateType::Spherical => 1,
            CoordinateType::Ecef => 2,
            CoordinateType::Global => 3,
            CoordinateType::Local => 4,
            CoordinateType::Unknown(value) => value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CoordinateType::Spherical => "SPHERICAL",
            CoordinateType::Ecef => "ECEF",
            CoordinateType::Global => "GLOBAL",
            CoordinateType::Local => "LOCAL",
            CoordinateType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<i32> for CoordinateType {
    fn from(value: i32) -> Self {
        match value {
            1 => CoordinateType::Spherical,
            2 => CoordinateType::Ecef,
            3 => CoordinateType::Global,
            4 => CoordinateType::Local,
            other => CoordinateType::Unknown(other),
        }
    }
}

impl FromStr for CoordinateType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spherical" => Ok(CoordinateType::Spherical),
            "ecef" => Ok(CoordinateType::Ecef),
            "global" => Ok(CoordinateType::Global),
            "local" => Ok(CoordinateType::Local),
            _ => Err(Error::UnknownCoordinateName(s.to_string())),
        }
    }
}

impl fmt::Display for CoordinateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateType::Unknown(value) => write!(f, "{}", value),
            known => f.write_str(known.as_str()),
        }
    }
}
