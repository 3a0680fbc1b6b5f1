//! Geometric measurements derived from a facial landmark set.
//!
//! All values are computed fresh per frame; nothing here holds state.

use crate::constants::EPSILON;
use crate::landmarks::LandmarkSet;
use crate::{Error, Result};
use nalgebra::distance;

/// Named distances and ratios describing a face's proportions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Vertical chin-to-forehead distance
    pub face_length: f64,
    /// Width across the jawline edges
    pub jaw_width: f64,
    /// Width across the cheekbone edges
    pub cheekbone_width: f64,
    /// Width across the outer brow
    pub forehead_width: f64,
    /// Vertical chin-to-cheekbone height
    pub chin_to_cheekbone: f64,
    /// Angle of the jaw line approaching the chin tip, radians
    pub chin_angle: f64,
    /// face_length / cheekbone_width
    pub length_to_width: f64,
    /// jaw_width / cheekbone_width
    pub jaw_to_cheek: f64,
    /// forehead_width / jaw_width
    pub forehead_to_jaw: f64,
    /// Cheekbones wider than the jawline
    pub cheekbones_dominate_jaw: bool,
    /// Cheekbones wider than the forehead
    pub cheekbones_dominate_forehead: bool,
}

impl Measurements {
    /// Extract measurements from a landmark set
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateGeometry` if the cheekbone or jaw width
    /// collapses to zero, which would make a ratio undefined. Duplicate
    /// detector points are the usual cause.
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Result<Self> {
        let chin = landmarks.chin_tip();
        let forehead_mid = landmarks.mid_forehead();
        let (cheek_l, cheek_r) = landmarks.cheek_edges();
        let (jaw_l, jaw_r) = landmarks.jaw_edges();
        let (brow_l, brow_r) = landmarks.forehead_edges();
        let (chin_prev, _) = landmarks.chin_neighbors();

        // Face length is a vertical-only difference, not a full norm
        let face_length = (chin.y - forehead_mid.y).abs();
        let jaw_width = distance(&jaw_l, &jaw_r);
        let cheekbone_width = distance(&cheek_l, &cheek_r);
        let forehead_width = distance(&brow_l, &brow_r);

        if cheekbone_width <= EPSILON {
            return Err(Error::DegenerateGeometry(
                "cheekbone width is zero".to_string(),
            ));
        }
        if jaw_width <= EPSILON {
            return Err(Error::DegenerateGeometry("jaw width is zero".to_string()));
        }

        let chin_to_cheekbone = chin.y - cheek_l.y;
        let chin_angle = (chin.y - chin_prev.y).atan2(chin.x - chin_prev.x);

        Ok(Self {
            face_length,
            jaw_width,
            cheekbone_width,
            forehead_width,
            chin_to_cheekbone,
            chin_angle,
            length_to_width: face_length / cheekbone_width,
            jaw_to_cheek: jaw_width / cheekbone_width,
            forehead_to_jaw: forehead_width / jaw_width,
            cheekbones_dominate_jaw: cheekbone_width > jaw_width,
            cheekbones_dominate_forehead: cheekbone_width > forehead_width,
        })
    }
}
