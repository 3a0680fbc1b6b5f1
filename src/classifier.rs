//! Rule-based face shape classification.
//!
//! The decision tree maps one `Measurements` record to exactly one shape
//! label. Rule regions overlap, so evaluation order is fixed and the
//! first matching rule wins; reordering the rules or relaxing a `<=` to
//! `<` changes observable results.

use crate::constants::{
    HEART_MAX_FOREHEAD_TO_JAW, HEART_MAX_JAW_TO_CHEEK, ROUND_MAX_LENGTH_TO_WIDTH,
    ROUND_MIN_JAW_TO_CHEEK, SQUARE_MIN_JAW_TO_CHEEK, SQUARE_MIN_LENGTH_TO_WIDTH,
};
use crate::measurement::Measurements;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Face shape categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeLabel {
    /// Similar face width and length, soft curves
    Round,
    /// Balanced proportions, the default category
    Oval,
    /// Wide jawline on a longer face
    Square,
    /// Cheekbones wider than both forehead and jawline
    Diamond,
    /// Narrow jaw under a comparatively wide forehead
    Heart,
    /// No observation yet
    Undetermined,
}

impl ShapeLabel {
    /// Styling description shown alongside a finalized verdict
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Round => {
                "Characterized by soft curves and similar face width and length. \
                 Best suited for angular hairstyles to add definition."
            }
            Self::Oval => {
                "Considered the ideal face shape with balanced proportions. \
                 Suits most hairstyles and facial features."
            }
            Self::Square => {
                "Strong jaw and angular features. Characterized by a wide \
                 hairline and jawline of similar width."
            }
            Self::Diamond => {
                "Wide cheekbones with narrow forehead and jawline. Features \
                 dramatic angles and defined cheekbones."
            }
            Self::Heart => {
                "Wider forehead and cheekbones with a narrow, pointed chin. \
                 Often considered a very feminine face shape."
            }
            Self::Undetermined => "",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Round => "Round",
            Self::Oval => "Oval",
            Self::Square => "Square",
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Undetermined => "Undetermined",
        };
        write!(f, "{name}")
    }
}

/// Classify a measurement record into one of the five shape categories
///
/// Pure function; never returns `ShapeLabel::Undetermined`.
#[must_use]
pub fn classify(m: &Measurements) -> ShapeLabel {
    if m.length_to_width <= ROUND_MAX_LENGTH_TO_WIDTH && m.jaw_to_cheek > ROUND_MIN_JAW_TO_CHEEK {
        ShapeLabel::Round
    } else if m.jaw_to_cheek < HEART_MAX_JAW_TO_CHEEK && m.forehead_to_jaw < HEART_MAX_FOREHEAD_TO_JAW
    {
        ShapeLabel::Heart
    } else if m.jaw_to_cheek > SQUARE_MIN_JAW_TO_CHEEK && m.length_to_width > SQUARE_MIN_LENGTH_TO_WIDTH
    {
        ShapeLabel::Square
    } else if m.cheekbones_dominate_jaw && m.cheekbones_dominate_forehead {
        ShapeLabel::Diamond
    } else {
        ShapeLabel::Oval
    }
}
