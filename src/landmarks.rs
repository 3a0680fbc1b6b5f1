//! Validated container for a 68-point facial landmark set.
//!
//! Landmark coordinates arrive from an external detector once per frame.
//! The ordering follows the iBUG 68-point annotation scheme, so indices
//! carry anatomical meaning: the jaw line spans 0-16 with the chin tip at
//! 8, the eyebrows span 17-26, and so on. The measurement code only ever
//! touches points through the named accessors below.

use crate::constants::{
    CHEEK_LEFT, CHEEK_RIGHT, CHIN_NEIGHBOR_LEFT, CHIN_NEIGHBOR_RIGHT, CHIN_TIP, FOREHEAD_LEFT,
    FOREHEAD_RIGHT, JAW_CORNER_LEFT, JAW_CORNER_RIGHT, JAW_LEFT, JAW_RIGHT, MID_FOREHEAD,
    NUM_FACIAL_LANDMARKS,
};
use crate::{Error, Result};
use nalgebra::Point2;

/// An immutable set of exactly 68 facial landmark points
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point2<f64>>,
}

impl LandmarkSet {
    /// Create a landmark set from detector output
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLandmarks` if the slice does not contain
    /// exactly 68 points.
    pub fn from_points(points: &[Point2<f64>]) -> Result<Self> {
        if points.len() != NUM_FACIAL_LANDMARKS {
            return Err(Error::InvalidLandmarks {
                expected: NUM_FACIAL_LANDMARKS,
                actual: points.len(),
            });
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    /// Create a landmark set from raw (x, y) coordinate pairs
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLandmarks` if the slice does not contain
    /// exactly 68 pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        let points: Vec<Point2<f64>> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        Self::from_points(&points)
    }

    /// Point at a raw landmark index (0..68)
    #[must_use]
    pub fn point(&self, index: usize) -> Point2<f64> {
        self.points[index]
    }

    /// All 68 points in annotation order
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Lowest point of the jaw line
    #[must_use]
    pub fn chin_tip(&self) -> Point2<f64> {
        self.points[CHIN_TIP]
    }

    /// Mid-forehead reference point on the brow line
    #[must_use]
    pub fn mid_forehead(&self) -> Point2<f64> {
        self.points[MID_FOREHEAD]
    }

    /// Left and right cheekbone edges
    #[must_use]
    pub fn cheek_edges(&self) -> (Point2<f64>, Point2<f64>) {
        (self.points[CHEEK_LEFT], self.points[CHEEK_RIGHT])
    }

    /// Left and right jawline edges
    #[must_use]
    pub fn jaw_edges(&self) -> (Point2<f64>, Point2<f64>) {
        (self.points[JAW_LEFT], self.points[JAW_RIGHT])
    }

    /// Left and right forehead edges at the outer brow
    #[must_use]
    pub fn forehead_edges(&self) -> (Point2<f64>, Point2<f64>) {
        (self.points[FOREHEAD_LEFT], self.points[FOREHEAD_RIGHT])
    }

    /// Left and right jaw corners below the cheekbones
    #[must_use]
    pub fn jaw_corners(&self) -> (Point2<f64>, Point2<f64>) {
        (self.points[JAW_CORNER_LEFT], self.points[JAW_CORNER_RIGHT])
    }

    /// Points immediately adjacent to the chin tip on the jaw line
    #[must_use]
    pub fn chin_neighbors(&self) -> (Point2<f64>, Point2<f64>) {
        (self.points[CHIN_NEIGHBOR_LEFT], self.points[CHIN_NEIGHBOR_RIGHT])
    }
}
