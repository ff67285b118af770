use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::Error;

// WGS84 ellipsoid parameters
const WGS84_AXIS_EQUATORIAL: f64 = 6378137.0; // semi-major axis (meters)
const WGS84_AXIS_POLAR: f64 = 6356752.314245; // semi-minor axis (meters)

/// Mean Earth radius used by the great-circle distance (meters)
pub const EARTH_RADIUS: f64 = 6371000.0;

/// Body model the reference frame is defined on.
///
/// Any integer can be stored; only `EarthWgs84` has numeric parameters.
#[derive(Debug, Clone, Copy, Default)]
pub enum SurfaceType {
    #[default]
    EarthWgs84,
    Unknown(i32),
}

impl SurfaceType {
    const EARTH_WGS84_RAW: i32 = 1;

    /// Resolve a surface label, falling back to `EarthWgs84`.
    pub fn convert(name: &str) -> SurfaceType {
        match name {
            "EARTH_WGS84" => SurfaceType::EarthWgs84,
            other => {
                tracing::warn!("SurfaceType string '{}' is not recognized, using EARTH_WGS84", other);
                SurfaceType::EarthWgs84
            }
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            SurfaceType::EarthWgs84 => Self::EARTH_WGS84_RAW,
            SurfaceType::Unknown(value) => value,
        }
    }

    pub fn as_str(&self) -> &str {
        match SurfaceType::from(self.raw()) {
            SurfaceType::EarthWgs84 => "EARTH_WGS84",
            SurfaceType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<i32> for SurfaceType {
    fn from(value: i32) -> Self {
        match value {
            Self::EARTH_WGS84_RAW => SurfaceType::EarthWgs84,
            other => SurfaceType::Unknown(other),
        }
    }
}

// Compared by raw value so `Unknown(1)` is the same body as `EarthWgs84`
impl PartialEq for SurfaceType {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for SurfaceType {}

impl Hash for SurfaceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl PartialEq<i32> for SurfaceType {
    fn eq(&self, other: &i32) -> bool {
        self.raw() == *other
    }
}

impl FromStr for SurfaceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SurfaceType::convert(s))
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SurfaceType::from(self.raw()) {
            SurfaceType::EarthWgs84 => f.write_str(self.as_str()),
            SurfaceType::Unknown(value) => write!(f, "{}", value),
        }
    }
}

/// Reference ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Semi-minor axis (meters)
    pub b: f64,
    /// First eccentricity: sqrt(1 - b^2 / a^2)
    pub e: f64,
    /// Second eccentricity: sqrt(a^2 / b^2 - 1)
    pub ep: f64,
}

impl Ellipsoid {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            e: (1.0 - (b * b) / (a * a)).sqrt(),
            ep: ((a * a) / (b * b) - 1.0).sqrt(),
        }
    }

    pub fn wgs84() -> Self {
        Self::new(WGS84_AXIS_EQUATORIAL, WGS84_AXIS_POLAR)
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.e * self.e
    }

    /// Prime-vertical radius of curvature at the given latitude
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.a / (1.0 - self.e2() * sin_lat * sin_lat).sqrt()
    }
}

impl TryFrom<SurfaceType> for Ellipsoid {
    type Error = Error;

    fn try_from(surface: SurfaceType) -> Result<Self, Self::Error> {
        match SurfaceType::from(surface.raw()) {
            SurfaceType::EarthWgs84 => Ok(Ellipsoid::wgs84()),
            SurfaceType::Unknown(value) => Err(Error::UnknownSurface(value)),
        }
    }
}
