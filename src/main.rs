use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use geoframe::config::Config;
use geoframe::{Angle, CoordinateType, SphericalCoordinates, Vector3};

#[derive(Parser)]
#[command(
    name = "geoframe",
    version,
    about = "Convert positions and velocities between geographic reference frames"
)]
struct Cli {
    /// TOML file describing the reference point
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform a position. Spherical latitude/longitude are in degrees.
    Position(TransformArgs),
    /// Transform a velocity (spherical is not a valid frame)
    Velocity(TransformArgs),
    /// Great-circle distance in meters between two points given in degrees
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat_a: f64,
        #[arg(allow_negative_numbers = true)]
        lon_a: f64,
        #[arg(allow_negative_numbers = true)]
        lat_b: f64,
        #[arg(allow_negative_numbers = true)]
        lon_b: f64,
    },
}

#[derive(Args)]
struct TransformArgs {
    /// Frame of the input vector (spherical, ecef, global, local)
    #[arg(long)]
    from: CoordinateType,
    /// Frame of the output vector
    #[arg(long)]
    to: CoordinateType,
    #[arg(allow_negative_numbers = true)]
    x: f64,
    #[arg(allow_negative_numbers = true)]
    y: f64,
    #[arg(allow_negative_numbers = true)]
    z: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config)?;
    let coordinates = config.spherical_coordinates();

    match cli.command {
        Command::Position(args) => {
            let result = transform_position(&coordinates, &args);
            print_vector(&result);
        }
        Command::Velocity(args) => {
            let input = Vector3::new(args.x, args.y, args.z);
            let result = coordinates.velocity_transform(&input, args.from, args.to);
            print_vector(&result);
        }
        Command::Distance {
            lat_a,
            lon_a,
            lat_b,
            lon_b,
        } => {
            let distance = SphericalCoordinates::distance(
                Angle::from_degrees(lat_a),
                Angle::from_degrees(lon_a),
                Angle::from_degrees(lat_b),
                Angle::from_degrees(lon_b),
            );
            println!("{:.3}", distance);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    match Config::default_path().filter(|path| path.exists()) {
        Some(path) => {
            tracing::info!("Using config {}", path.display());
            Config::load(path)
        }
        None => {
            tracing::info!("No config found, using the default reference point");
            Ok(Config::default())
        }
    }
}

// Spherical vectors are degrees on the command line and radians in the engine
fn transform_position(coordinates: &SphericalCoordinates, args: &TransformArgs) -> Vector3<f64> {
    let mut input = Vector3::new(args.x, args.y, args.z);
    if args.from == CoordinateType::Spherical && args.to != CoordinateType::Spherical {
        input.x = input.x.to_radians();
        input.y = input.y.to_radians();
    }

    match coordinates.try_position_transform(&input, args.from, args.to) {
        Ok(mut result) => {
            if args.to == CoordinateType::Spherical && args.from != CoordinateType::Spherical {
                result.x = result.x.to_degrees();
                result.y = result.y.to_degrees();
            }
            result
        }
        Err(err) => {
            tracing::warn!("Position transform {} -> {} skipped: {}", args.from, args.to, err);
            Vector3::new(args.x, args.y, args.z)
        }
    }
}

fn print_vector(v: &Vector3<f64>) {
    println!("{:.6} {:.6} {:.6}", v.x, v.y, v.z);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(from: CoordinateType, to: CoordinateType, xyz: [f64; 3]) -> TransformArgs {
        TransformArgs {
            from,
            to,
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    #[test]
    fn test_parse_position_command() {
        let cli = Cli::try_parse_from([
            "geoframe", "position", "--from", "Spherical", "--to", "ecef", "37.5", "-122.1", "30",
        ])
        .unwrap();

        match cli.command {
            Command::Position(args) => {
                assert_eq!(args.from, CoordinateType::Spherical);
                assert_eq!(args.to, CoordinateType::Ecef);
                assert_eq!(args.y, -122.1);
            }
            _ => panic!("expected position command"),
        }
    }

    #[test]
    fn test_rejects_unknown_frame_name() {
        let result = Cli::try_parse_from([
            "geoframe", "velocity", "--from", "body", "--to", "ecef", "1", "2", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spherical_degrees_round_trip() {
        let coordinates = SphericalCoordinates::new();

        let ecef = transform_position(
            &coordinates,
            &args(CoordinateType::Spherical, CoordinateType::Ecef, [0.0, 90.0, 0.0]),
        );
        assert_relative_eq!(ecef, Vector3::new(0.0, 6378137.0, 0.0), epsilon = 1e-6);

        let back = transform_position(
            &coordinates,
            &args(CoordinateType::Ecef, CoordinateType::Spherical, [ecef.x, ecef.y, ecef.z]),
        );
        assert_relative_eq!(back, Vector3::new(0.0, 90.0, 0.0), epsilon = 1e-6);

        // Same frame is untouched, no unit conversion
        let same = transform_position(
            &coordinates,
            &args(CoordinateType::Spherical, CoordinateType::Spherical, [1.0, 2.0, 3.0]),
        );
        assert_eq!(same, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_failed_position_is_printed_unchanged() {
        let coordinates = SphericalCoordinates::new();

        // Too close to the centre of the Earth to invert
        let result = transform_position(
            &coordinates,
            &args(CoordinateType::Ecef, CoordinateType::Spherical, [1.0, 2.0, -4.0]),
        );
        assert_eq!(result, Vector3::new(1.0, 2.0, -4.0));

        let result = transform_position(
            &coordinates,
            &args(CoordinateType::Spherical, CoordinateType::from(9), [45.0, 90.0, 10.0]),
        );
        assert_eq!(result, Vector3::new(45.0, 90.0, 10.0));
    }
}
