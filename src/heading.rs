use nalgebra::Vector3;

use crate::angle::Angle;

// Heading of 90 degrees turns local +X North and local +Y West
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingRotation {
    sin: f64,
    cos: f64,
}

impl HeadingRotation {
    pub fn new(heading: Angle) -> Self {
        let (sin, cos) = heading.radian().sin_cos();
        Self { sin, cos }
    }

    pub fn global_from_local(&self, local: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            local.x * self.cos - local.y * self.sin,
            local.x * self.sin + local.y * self.cos,
            local.z,
        )
    }

    pub fn local_from_global(&self, global: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            global.x * self.cos + global.y * self.sin,
            -global.x * self.sin + global.y * self.cos,
            global.z,
        )
    }
}
