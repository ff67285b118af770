use nalgebra::{Matrix3, Vector3};

use crate::geodetic::geodetic_to_ecef;
use crate::surface::Ellipsoid;

/// East-North-Up tangent plane anchored at a geodetic reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentPlane {
    origin: Vector3<f64>,
    ecef_to_global: Matrix3<f64>,
    global_to_ecef: Matrix3<f64>,
}

impl TangentPlane {
    pub fn new(ellipsoid: &Ellipsoid, reference: &Vector3<f64>) -> Self {
        let (sin_lat, cos_lat) = reference.x.sin_cos();
        let (sin_lon, cos_lon) = reference.y.sin_cos();

        // Rows are the East, North and Up axes expressed in ECEF
        let ecef_to_global = Matrix3::new(
            -sin_lon,
            cos_lon,
            0.0,
            -cos_lon * sin_lat,
            -sin_lon * sin_lat,
            cos_lat,
            cos_lon * cos_lat,
            sin_lon * cos_lat,
            sin_lat,
        );

        Self {
            origin: geodetic_to_ecef(ellipsoid, reference),
            ecef_to_global,
            global_to_ecef: ecef_to_global.transpose(),
        }
    }

    pub fn origin(&self) -> &Vector3<f64> {
        &self.origin
    }

    pub fn global_from_ecef_position(&self, ecef: &Vector3<f64>) -> Vector3<f64> {
        self.ecef_to_global * (ecef - self.origin)
    }

    pub fn ecef_from_global_position(&self, global: &Vector3<f64>) -> Vector3<f64> {
        self.origin + self.global_to_ecef * global
    }

    pub fn global_from_ecef_velocity(&self, ecef: &Vector3<f64>) -> Vector3<f64> {
        self.ecef_to_global * ecef
    }

    pub fn ecef_from_global_velocity(&self, global: &Vector3<f64>) -> Vector3<f64> {
        self.global_to_ecef * global
    }
}
