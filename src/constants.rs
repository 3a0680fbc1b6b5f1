//! Constants used throughout the application

/// Number of facial landmarks for full face
pub const NUM_FACIAL_LANDMARKS: usize = 68;

/// Landmark indices from the iBUG 68-point annotation scheme.
/// Ref: https://ibug.doc.ic.ac.uk/resources/facial-point-annotations/
pub const CHIN_TIP: usize = 8;
pub const MID_FOREHEAD: usize = 19;
pub const CHEEK_LEFT: usize = 2;
pub const CHEEK_RIGHT: usize = 14;
pub const JAW_LEFT: usize = 3;
pub const JAW_RIGHT: usize = 13;
pub const FOREHEAD_LEFT: usize = 17;
pub const FOREHEAD_RIGHT: usize = 26;
pub const JAW_CORNER_LEFT: usize = 5;
pub const JAW_CORNER_RIGHT: usize = 11;
pub const CHIN_NEIGHBOR_LEFT: usize = 7;
pub const CHIN_NEIGHBOR_RIGHT: usize = 9;

/// Classifier thresholds. The comparison operators in the decision tree
/// are part of the observable contract, so these pair with a specific
/// `<`/`<=`/`>` in `classifier::classify`.
pub const ROUND_MAX_LENGTH_TO_WIDTH: f64 = 1.1;
pub const ROUND_MIN_JAW_TO_CHEEK: f64 = 0.9;
pub const HEART_MAX_JAW_TO_CHEEK: f64 = 0.8;
pub const HEART_MAX_FOREHEAD_TO_JAW: f64 = 0.9;
pub const SQUARE_MIN_JAW_TO_CHEEK: f64 = 0.9;
pub const SQUARE_MIN_LENGTH_TO_WIDTH: f64 = 1.2;

/// Observation window before a verdict may be finalized, in seconds
pub const DEFAULT_FINALIZATION_WINDOW_SECS: f64 = 10.0;

/// Minimum majority-vote confidence required to finalize
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
