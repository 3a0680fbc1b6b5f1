//! End-to-end classifier tests: landmarks through measurements to labels


use face_shape_recognition::{
    classifier::{classify, ShapeLabel},
    measurement::Measurements,
};
use test_helpers::{diamond_face, face_with, heart_face, oval_face, round_face, square_face};

#[test]
fn test_each_preset_classifies_as_expected() {
    let cases = [
        (round_face(), ShapeLabel::Round),
        (oval_face(), ShapeLabel::Oval),
        (square_face(), ShapeLabel::Square),
        (diamond_face(), ShapeLabel::Diamond),
        (heart_face(), ShapeLabel::Heart),
    ];

    for (landmarks, expected) in cases {
        let m = Measurements::from_landmarks(&landmarks).unwrap();
        assert_eq!(classify(&m), expected);
    }
}

#[test]
fn test_classifier_never_returns_undetermined() {
    // Sweep a grid of plausible proportions; every cell must land on one
    // of the five defined categories
    for face_length in [80.0, 100.0, 120.0, 140.0, 160.0] {
        for jaw_width in [60.0, 80.0, 95.0, 110.0] {
            for forehead_width in [50.0, 70.0, 90.0, 110.0] {
                let landmarks = face_with(face_length, jaw_width, 100.0, forehead_width);
                let m = Measurements::from_landmarks(&landmarks).unwrap();
                assert_ne!(classify(&m), ShapeLabel::Undetermined);
            }
        }
    }
}

#[test]
fn test_round_for_equal_length_and_width() {
    // face_length 100, cheekbone 100, jaw 95, forehead 70:
    // length_to_width = 1.0, jaw_to_cheek = 0.95 -> Round
    let m = Measurements::from_landmarks(&round_face()).unwrap();
    assert!((m.length_to_width - 1.0).abs() < 1e-9);
    assert!((m.jaw_to_cheek - 0.95).abs() < 1e-9);
    assert_eq!(classify(&m), ShapeLabel::Round);
}

#[test]
fn test_round_takes_priority_over_diamond() {
    // The round preset also satisfies the Diamond condition (cheekbones
    // wider than both jaw and forehead); rule order keeps it Round
    let m = Measurements::from_landmarks(&round_face()).unwrap();
    assert!(m.cheekbones_dominate_jaw);
    assert!(m.cheekbones_dominate_forehead);
    assert_eq!(classify(&m), ShapeLabel::Round);
}

#[test]
fn test_heart_takes_priority_over_diamond() {
    // Heart preset cheekbones also dominate jaw and forehead
    let m = Measurements::from_landmarks(&heart_face()).unwrap();
    assert!(m.cheekbones_dominate_jaw);
    assert!(m.cheekbones_dominate_forehead);
    assert_eq!(classify(&m), ShapeLabel::Heart);
}

#[test]
fn test_classification_is_idempotent() {
    let m = Measurements::from_landmarks(&square_face()).unwrap();
    let first = classify(&m);
    for _ in 0..10 {
        assert_eq!(classify(&m), first);
    }
}

#[test]
fn test_measurements_survive_translation() {
    // Shifting every landmark by a constant offset must not change the
    // derived ratios or the label
    let base = Measurements::from_landmarks(&diamond_face()).unwrap();

    let shifted: Vec<(f64, f64)> = diamond_face()
        .points()
        .iter()
        .map(|p| (p.x + 320.0, p.y + 240.0))
        .collect();
    let shifted_set = face_shape_recognition::landmarks::LandmarkSet::from_coords(&shifted).unwrap();
    let moved = Measurements::from_landmarks(&shifted_set).unwrap();

    assert!((base.length_to_width - moved.length_to_width).abs() < 1e-9);
    assert!((base.jaw_to_cheek - moved.jaw_to_cheek).abs() < 1e-9);
    assert!((base.forehead_to_jaw - moved.forehead_to_jaw).abs() < 1e-9);
    assert_eq!(classify(&base), classify(&moved));
}
