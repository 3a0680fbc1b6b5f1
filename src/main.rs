//! Face shape recognition demo driver.
//!
//! Camera capture and landmark detection live outside this crate, so the
//! demo replaces them with a synthetic landmark stream: a canonical face
//! for the requested shape, jittered per frame the way a real detector
//! wobbles, paced at a configurable frame rate.

use anyhow::Result;
use clap::Parser;
use face_shape_recognition::{
    config::Config,
    landmarks::LandmarkSet,
    session::Session,
};
use log::{info, warn};
use nalgebra::Point2;
use rand::Rng;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Face shape preset to synthesize (round, oval, square, diamond, heart)
    #[arg(short, long, default_value = "oval")]
    shape: String,

    /// Frames per second for the synthetic stream
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// How long to run, in seconds
    #[arg(long, default_value_t = 12.0)]
    duration: f64,

    /// Uniform landmark jitter amplitude, in pixels
    #[arg(short, long, default_value_t = 2.0)]
    jitter: f64,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Canonical measurement quadruple (face length, jaw, cheekbone,
/// forehead) that classifies as the named shape
fn shape_preset(name: &str) -> Option<(f64, f64, f64, f64)> {
    match name {
        "round" => Some((100.0, 95.0, 100.0, 80.0)),
        "oval" => Some((140.0, 85.0, 100.0, 105.0)),
        "square" => Some((130.0, 95.0, 100.0, 98.0)),
        "diamond" => Some((130.0, 90.0, 110.0, 85.0)),
        "heart" => Some((120.0, 60.0, 90.0, 50.0)),
        _ => None,
    }
}

/// Place the canonical widths onto the measured landmark indices; the
/// remaining points are irrelevant to the measurements
fn synthetic_face(
    face_length: f64,
    jaw_width: f64,
    cheekbone_width: f64,
    forehead_width: f64,
) -> Vec<Point2<f64>> {
    let mut points = vec![Point2::new(0.0, 0.0); 68];
    points[19] = Point2::new(0.0, 0.0);
    points[8] = Point2::new(0.0, face_length);
    points[2] = Point2::new(-cheekbone_width / 2.0, 40.0);
    points[14] = Point2::new(cheekbone_width / 2.0, 40.0);
    points[3] = Point2::new(-jaw_width / 2.0, 70.0);
    points[13] = Point2::new(jaw_width / 2.0, 70.0);
    points[17] = Point2::new(-forehead_width / 2.0, 10.0);
    points[26] = Point2::new(forehead_width / 2.0, 10.0);
    points[7] = Point2::new(-5.0, face_length - 2.0);
    points[9] = Point2::new(5.0, face_length - 2.0);
    points
}

fn jittered(base: &[Point2<f64>], amplitude: f64, rng: &mut impl Rng) -> Vec<Point2<f64>> {
    if amplitude <= 0.0 {
        return base.to_vec();
    }
    base.iter()
        .map(|p| {
            Point2::new(
                p.x + rng.gen_range(-amplitude..=amplitude),
                p.y + rng.gen_range(-amplitude..=amplitude),
            )
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Frame counts are small positive numbers
fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Shape Recognition - synthetic demo");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.validate()?;

    let (face_length, jaw, cheek, forehead) = shape_preset(&args.shape)
        .ok_or_else(|| anyhow::anyhow!("unknown shape preset: {}", args.shape))?;
    let base = synthetic_face(face_length, jaw, cheek, forehead);

    let mut session = Session::new(&config);
    session.start()?;

    let mut rng = rand::thread_rng();
    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let total_frames = (args.duration * f64::from(args.fps)).max(1.0) as u64;

    for frame in 0..total_frames {
        let points = jittered(&base, args.jitter, &mut rng);
        let landmarks = LandmarkSet::from_points(&points)?;

        match session.process_frame(&landmarks) {
            Ok(result) => {
                if let Some(description) = result.description {
                    info!(
                        "Analysis complete: {} (confidence {:.0}%)",
                        result.label,
                        result.confidence.unwrap_or(0.0) * 100.0
                    );
                    info!("{}", description);
                    break;
                }
                if frame % u64::from(args.fps.max(1)) == 0 {
                    info!(
                        "Provisional: {} ({}s remaining, {} observations)",
                        result.label,
                        result.remaining_seconds,
                        session.observations()
                    );
                }
            }
            Err(e) => warn!("Dropped frame: {}", e),
        }

        std::thread::sleep(frame_interval);
    }

    if !session.snapshot().is_final {
        info!(
            "Window did not close with a confident verdict; last label: {}",
            session.snapshot().label
        );
    }

    Ok(())
}
