//! Face shape recognition library for real-time webcam analysis.
//!
//! This library classifies a face into one of five shape categories
//! (Round, Oval, Square, Diamond, Heart) from 68-point facial landmarks,
//! smoothing the per-frame classification over an observation window
//! before committing to a final verdict with styling guidance.
//!
//! The pipeline consists of:
//! 1. Geometric measurement extraction from a validated landmark set
//! 2. A rule-based decision tree mapping measurements to a shape label
//! 3. A temporal stabilizer holding a rolling label history and a
//!    majority vote with a configurable confidence gate
//! 4. A session state machine governing start/pause/resume/restart
//!
//! Camera capture, face detection, and landmark extraction belong to an
//! external layer; the library consumes its per-frame landmark output.
//!
//! # Examples
//!
//! ## Classifying a single frame
//!
//! ```
//! use face_shape_recognition::{
//!     classifier::{classify, ShapeLabel},
//!     landmarks::LandmarkSet,
//!     measurement::Measurements,
//! };
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Landmarks normally arrive from an external 68-point detector
//! let mut points = vec![Point2::new(0.0, 0.0); 68];
//! points[19] = Point2::new(0.0, 0.0); // mid-forehead
//! points[8] = Point2::new(0.0, 100.0); // chin tip
//! points[2] = Point2::new(-50.0, 40.0); // cheekbone edges
//! points[14] = Point2::new(50.0, 40.0);
//! points[3] = Point2::new(-47.5, 70.0); // jaw edges
//! points[13] = Point2::new(47.5, 70.0);
//! points[17] = Point2::new(-35.0, 10.0); // forehead edges
//! points[26] = Point2::new(35.0, 10.0);
//!
//! let landmarks = LandmarkSet::from_points(&points)?;
//! let measurements = Measurements::from_landmarks(&landmarks)?;
//! assert_eq!(classify(&measurements), ShapeLabel::Round);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running a stabilized session
//!
//! ```
//! use face_shape_recognition::{
//!     clock::ManualClock,
//!     config::Config,
//!     landmarks::LandmarkSet,
//!     session::Session,
//! };
//! use nalgebra::Point2;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let mut points = vec![Point2::new(0.0, 0.0); 68];
//! # points[8] = Point2::new(0.0, 100.0);
//! # points[2] = Point2::new(-50.0, 40.0);
//! # points[14] = Point2::new(50.0, 40.0);
//! # points[3] = Point2::new(-47.5, 70.0);
//! # points[13] = Point2::new(47.5, 70.0);
//! # points[17] = Point2::new(-35.0, 10.0);
//! # points[26] = Point2::new(35.0, 10.0);
//! # let landmarks = LandmarkSet::from_points(&points)?;
//! let clock = ManualClock::new();
//! let mut session = Session::with_clock(&Config::default(), clock.clone());
//!
//! session.start()?;
//! let mut result = session.process_frame(&landmarks)?;
//! assert!(!result.is_final);
//!
//! // One frame per second until the 10 s observation window closes
//! for _ in 0..10 {
//!     clock.advance(Duration::from_secs(1));
//!     result = session.process_frame(&landmarks)?;
//! }
//!
//! assert!(result.is_final);
//! println!("{}: {}", result.label, result.description.unwrap_or(""));
//! # Ok(())
//! # }
//! ```

/// Validated 68-point landmark container with anatomical accessors
pub mod landmarks;

/// Geometric measurements derived from a landmark set
pub mod measurement;

/// Rule-based shape classification and styling descriptions
pub mod classifier;

/// Temporal stabilization via rolling-history majority vote
pub mod stabilizer;

/// Session state machine and pause-aware observation timer
pub mod session;

/// Monotonic time sources
pub mod clock;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
