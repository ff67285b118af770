use nalgebra::Vector3;

use crate::angle::Angle;
use crate::error::{Error, Result};
use crate::frame::CoordinateType;
use crate::geodetic::{ecef_to_geodetic, geodetic_to_ecef};
use crate::heading::HeadingRotation;
use crate::surface::{Ellipsoid, SurfaceType, EARTH_RADIUS};
use crate::tangent::TangentPlane;

/// Converts between spherical, ECEF, global (ENU) and local frames.
/// Spherical lat/lon are radians here and degrees in the `*_spherical_*` helpers.
#[derive(Debug, Clone)]
pub struct SphericalCoordinates {
    surface: SurfaceType,
    latitude_reference: Angle,
    longitude_reference: Angle,
    elevation_reference: f64,
    heading_offset: Angle,

    // Derived from the fields above, rebuilt by every setter
    ellipsoid: Ellipsoid,
    tangent: TangentPlane,
    heading: HeadingRotation,
}

impl Default for SphericalCoordinates {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalCoordinates {
    pub fn new() -> Self {
        Self::with_surface(SurfaceType::EarthWgs84)
    }

    pub fn with_surface(surface: SurfaceType) -> Self {
        Self::with_reference(surface, Angle::ZERO, Angle::ZERO, 0.0, Angle::ZERO)
    }

    pub fn with_reference(
        surface: SurfaceType,
        latitude: Angle,
        longitude: Angle,
        elevation: f64,
        heading: Angle,
    ) -> Self {
        let ellipsoid = Ellipsoid::wgs84();
        let reference = Vector3::new(latitude.radian(), longitude.radian(), elevation);

        let mut coordinates = Self {
            surface: SurfaceType::EarthWgs84,
            latitude_reference: latitude,
            longitude_reference: longitude,
            elevation_reference: elevation,
            heading_offset: heading,
            tangent: TangentPlane::new(&ellipsoid, &reference),
            heading: HeadingRotation::new(heading),
            ellipsoid,
        };
        if !matches!(SurfaceType::from(surface.raw()), SurfaceType::EarthWgs84) {
            coordinates.set_surface(surface);
        }
        coordinates
    }

    /// Resolve a surface label; unknown labels fall back to `EarthWgs84`.
    pub fn convert(name: &str) -> SurfaceType {
        SurfaceType::convert(name)
    }

    pub fn surface(&self) -> SurfaceType {
        self.surface
    }

    pub fn latitude_reference(&self) -> Angle {
        self.latitude_reference
    }

    pub fn longitude_reference(&self) -> Angle {
        self.longitude_reference
    }

    pub fn elevation_reference(&self) -> f64 {
        self.elevation_reference
    }

    pub fn heading_offset(&self) -> Angle {
        self.heading_offset
    }

    /// ECEF position of the reference point
    pub fn ecef_origin(&self) -> Vector3<f64> {
        *self.tangent.origin()
    }

    // Unknown surfaces are stored but keep the previous ellipsoid
    pub fn set_surface(&mut self, surface: SurfaceType) {
        let surface = SurfaceType::from(surface.raw());
        self.surface = surface;
        match Ellipsoid::try_from(surface) {
            Ok(ellipsoid) => self.ellipsoid = ellipsoid,
            Err(err) => tracing::error!("{}", err),
        }
        self.update_transformation();
    }

    pub fn set_latitude_reference(&mut self, angle: Angle) {
        self.latitude_reference = angle;
        self.update_transformation();
    }

    pub fn set_longitude_reference(&mut self, angle: Angle) {
        self.longitude_reference = angle;
        self.update_transformation();
    }

    pub fn set_elevation_reference(&mut self, elevation: f64) {
        self.elevation_reference = elevation;
        self.update_transformation();
    }

    pub fn set_heading_offset(&mut self, angle: Angle) {
        self.heading_offset = angle;
        self.update_transformation();
    }

    fn update_transformation(&mut self) {
        let reference = Vector3::new(
            self.latitude_reference.radian(),
            self.longitude_reference.radian(),
            self.elevation_reference,
        );
        self.tangent = TangentPlane::new(&self.ellipsoid, &reference);
        self.heading = HeadingRotation::new(self.heading_offset);

        tracing::debug!(
            "Reference updated: surface={} lat={} lon={} elev={} heading={}",
            self.surface,
            self.latitude_reference,
            self.longitude_reference,
            self.elevation_reference,
            self.heading_offset
        );
    }

    pub fn spherical_from_local_position(&self, xyz: &Vector3<f64>) -> Vector3<f64> {
        match self.try_position_transform(xyz, CoordinateType::Local, CoordinateType::Spherical) {
            Ok(mut result) => {
                result.x = result.x.to_degrees();
                result.y = result.y.to_degrees();
                result
            }
            Err(err) => {
                tracing::warn!("Spherical from local position skipped: {}", err);
                *xyz
            }
        }
    }

    pub fn local_from_spherical_position(&self, spherical: &Vector3<f64>) -> Vector3<f64> {
        let radians = Vector3::new(
            spherical.x.to_radians(),
            spherical.y.to_radians(),
            spherical.z,
        );
        self.position_transform(&radians, CoordinateType::Spherical, CoordinateType::Local)
    }

    pub fn global_from_local_velocity(&self, xyz: &Vector3<f64>) -> Vector3<f64> {
        self.velocity_transform(xyz, CoordinateType::Local, CoordinateType::Global)
    }

    pub fn local_from_global_velocity(&self, xyz: &Vector3<f64>) -> Vector3<f64> {
        self.velocity_transform(xyz, CoordinateType::Global, CoordinateType::Local)
    }

    /// Returns the input unchanged when the transform can't be done.
    pub fn position_transform(
        &self,
        position: &Vector3<f64>,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Vector3<f64> {
        self.try_position_transform(position, from, to)
            .unwrap_or_else(|err| {
                tracing::warn!("Position transform {} -> {} skipped: {}", from, to, err);
                *position
            })
    }

    pub fn velocity_transform(
        &self,
        velocity: &Vector3<f64>,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Vector3<f64> {
        self.try_velocity_transform(velocity, from, to)
            .unwrap_or_else(|err| {
                tracing::warn!("Velocity transform {} -> {} skipped: {}", from, to, err);
                *velocity
            })
    }

    pub fn try_position_transform(
        &self,
        position: &Vector3<f64>,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Result<Vector3<f64>> {
        if from == to {
            return Ok(*position);
        }

        match (from, to) {
            (CoordinateType::Local, CoordinateType::Global) => {
                return Ok(self.heading.global_from_local(position))
            }
            (CoordinateType::Global, CoordinateType::Local) => {
                return Ok(self.heading.local_from_global(position))
            }
            _ => {}
        }

        // Everything pivots through ECEF
        let ecef = match from {
            CoordinateType::Spherical => geodetic_to_ecef(&self.ellipsoid, position),
            CoordinateType::Ecef => *position,
            CoordinateType::Global => self.tangent.ecef_from_global_position(position),
            CoordinateType::Local => {
                let global = self.heading.global_from_local(position);
                self.tangent.ecef_from_global_position(&global)
            }
            CoordinateType::Unknown(value) => return Err(Error::UnknownCoordinateType(value)),
        };

        match to {
            CoordinateType::Spherical => ecef_to_geodetic(&self.ellipsoid, &ecef),
            CoordinateType::Ecef => Ok(ecef),
            CoordinateType::Global => Ok(self.tangent.global_from_ecef_position(&ecef)),
            CoordinateType::Local => {
                let global = self.tangent.global_from_ecef_position(&ecef);
                Ok(self.heading.local_from_global(&global))
            }
            CoordinateType::Unknown(value) => Err(Error::UnknownCoordinateType(value)),
        }
    }

    pub fn try_velocity_transform(
        &self,
        velocity: &Vector3<f64>,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Result<Vector3<f64>> {
        if from == to {
            return Ok(*velocity);
        }

        match (from, to) {
            (CoordinateType::Spherical, _) | (_, CoordinateType::Spherical) => {
                return Err(Error::SphericalVelocity)
            }
            (CoordinateType::Local, CoordinateType::Global) => {
                return Ok(self.heading.global_from_local(velocity))
            }
            (CoordinateType::Global, CoordinateType::Local) => {
                return Ok(self.heading.local_from_global(velocity))
            }
            _ => {}
        }

        // Rotation only, no translation to the reference origin
        let ecef = match from {
            CoordinateType::Ecef => *velocity,
            CoordinateType::Global => self.tangent.ecef_from_global_velocity(velocity),
            CoordinateType::Local => {
                let global = self.heading.global_from_local(velocity);
                self.tangent.ecef_from_global_velocity(&global)
            }
            CoordinateType::Spherical => return Err(Error::SphericalVelocity),
            CoordinateType::Unknown(value) => return Err(Error::UnknownCoordinateType(value)),
        };

        match to {
            CoordinateType::Ecef => Ok(ecef),
            CoordinateType::Global => Ok(self.tangent.global_from_ecef_velocity(&ecef)),
            CoordinateType::Local => {
                let global = self.tangent.global_from_ecef_velocity(&ecef);
                Ok(self.heading.local_from_global(&global))
            }
            CoordinateType::Spherical => Err(Error::SphericalVelocity),
            CoordinateType::Unknown(value) => Err(Error::UnknownCoordinateType(value)),
        }
    }

    /// Great-circle (haversine) distance in meters between two points on a
    /// sphere of the mean Earth radius.
    pub fn distance(lat_a: Angle, lon_a: Angle, lat_b: Angle, lon_b: Angle) -> f64 {
        let d_lat = (lat_b - lat_a).radian();
        let d_lon = (lon_b - lon_a).radian();

        let a = (d_lat / 2.0).sin().powi(2)
            + (d_lon / 2.0).sin().powi(2) * lat_a.radian().cos() * lat_b.radian().cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

impl PartialEq for SphericalCoordinates {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
            && self.latitude_reference == other.latitude_reference
            && self.longitude_reference == other.longitude_reference
            && self.elevation_reference == other.elevation_reference
            && self.heading_offset == other.heading_offset
    }
}
