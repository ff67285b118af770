use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::angle::Angle;
use crate::spherical_coordinates::SphericalCoordinates;
use crate::surface::SurfaceType;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reference: ReferenceConfig,
}

/// Reference point of the tangent plane. Angles are in degrees.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub surface: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64, // meters
    pub heading: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceType::EarthWgs84.as_str().to_string(),
            latitude: 0.0,
            longitude: 0.0,
            elevation: 0.0,
            heading: 0.0,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Per-user config file location, e.g. `~/.config/geoframe/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("geoframe").join("config.toml"))
    }

    pub fn spherical_coordinates(&self) -> SphericalCoordinates {
        let reference = &self.reference;
        SphericalCoordinates::with_reference(
            SurfaceType::convert(&reference.surface),
            Angle::from_degrees(reference.latitude),
            Angle::from_degrees(reference.longitude),
            reference.elevation,
            Angle::from_degrees(reference.heading),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.spherical_coordinates(), SphericalCoordinates::new());
    }

    #[test]
    fn test_reference_in_degrees() {
        let config = Config::parse(
            r#"
            [reference]
            surface = "EARTH_WGS84"
            latitude = 37.3877349
            longitude = -122.0651166
            elevation = 32.0
            heading = 90.0
            "#,
        )
        .unwrap();

        let sc = config.spherical_coordinates();
        assert_eq!(sc.surface(), SurfaceType::EarthWgs84);
        assert_relative_eq!(sc.latitude_reference().degree(), 37.3877349, epsilon = 1e-9);
        assert_relative_eq!(sc.longitude_reference().degree(), -122.0651166, epsilon = 1e-9);
        assert_relative_eq!(sc.elevation_reference(), 32.0);
        assert_relative_eq!(
            sc.heading_offset().radian(),
            Angle::HALF_PI.radian(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unknown_surface_label_falls_back() {
        let config = Config::parse("[reference]\nsurface = \"MARS\"\nelevation = 10.0\n").unwrap();

        let sc = config.spherical_coordinates();
        assert_eq!(sc.surface(), SurfaceType::EarthWgs84);
        assert_relative_eq!(sc.elevation_reference(), 10.0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("[reference]\nlatitude = \"north\"\n").is_err());
        assert!(Config::load("/nonexistent/geoframe.toml").is_err());
    }
}
