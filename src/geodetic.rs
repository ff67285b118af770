use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::surface::Ellipsoid;

// Geodetic vectors are (latitude rad, longitude rad, elevation m)
pub fn geodetic_to_ecef(ellipsoid: &Ellipsoid, geodetic: &Vector3<f64>) -> Vector3<f64> {
    let (sin_lat, cos_lat) = geodetic.x.sin_cos();
    let (sin_lon, cos_lon) = geodetic.y.sin_cos();
    let elevation = geodetic.z;

    let n = ellipsoid.prime_vertical_radius(geodetic.x);
    let b2_over_a2 = (ellipsoid.b * ellipsoid.b) / (ellipsoid.a * ellipsoid.a);

    Vector3::new(
        (n + elevation) * cos_lat * cos_lon,
        (n + elevation) * cos_lat * sin_lon,
        (b2_over_a2 * n + elevation) * sin_lat,
    )
}

/// Bowring's closed form. Fails inside the evolute (within e^2 * a of the centre).
pub fn ecef_to_geodetic(ellipsoid: &Ellipsoid, ecef: &Vector3<f64>) -> Result<Vector3<f64>> {
    let non_convergent = || Error::NonConvergent {
        x: ecef.x,
        y: ecef.y,
        z: ecef.z,
    };

    if !ecef.iter().all(|c| c.is_finite()) || ecef.norm() < ellipsoid.e2() * ellipsoid.a {
        return Err(non_convergent());
    }

    let a = ellipsoid.a;
    let b = ellipsoid.b;
    let e2 = ellipsoid.e2();
    let ep2 = ellipsoid.ep * ellipsoid.ep;

    let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();
    let lon = ecef.y.atan2(ecef.x);

    // Polar axis
    if p <= f64::EPSILON * a {
        let lat = std::f64::consts::FRAC_PI_2.copysign(ecef.z);
        return Ok(Vector3::new(lat, lon, ecef.z.abs() - b));
    }

    let theta = ((ecef.z * a) / (p * b)).atan();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let lat = ((ecef.z + ep2 * b * sin_theta.powi(3)) / (p - e2 * a * cos_theta.powi(3))).atan();

    // Recalculate radius of curvature at the solved latitude
    let n = ellipsoid.prime_vertical_radius(lat);
    let (sin_lat, cos_lat) = lat.sin_cos();

    let elevation = if cos_lat.abs() > 1e-6 {
        p / cos_lat - n
    } else {
        p * cos_lat + ecef.z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt()
    };

    let geodetic = Vector3::new(lat, lon, elevation);
    if geodetic.iter().all(|c| c.is_finite()) {
        Ok(geodetic)
    } else {
        Err(non_convergent())
    }
}
