//! Session state machine and stabilization integration tests


use face_shape_recognition::{
    classifier::ShapeLabel,
    clock::ManualClock,
    config::Config,
    landmarks::LandmarkSet,
    session::{Session, SessionPhase, SharedSession},
    Error,
};
use nalgebra::Point2;
use std::time::Duration;
use test_helpers::{round_face, square_face};

fn manual_session() -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::with_clock(&Config::default(), clock.clone());
    (session, clock)
}

/// Drive one frame per second until the observation window closes
fn run_to_verdict(session: &mut Session<ManualClock>, clock: &ManualClock, landmarks: &LandmarkSet) {
    session.start().unwrap();
    session.process_frame(landmarks).unwrap();
    for _ in 0..10 {
        clock.advance(Duration::from_secs(1));
        session.process_frame(landmarks).unwrap();
    }
}

#[test]
fn test_provisional_until_window_closes() {
    let (mut session, clock) = manual_session();
    session.start().unwrap();

    for i in 0..10 {
        let result = session.process_frame(&round_face()).unwrap();
        assert!(!result.is_final, "frame {i} finalized early");
        assert_eq!(result.label, ShapeLabel::Round);
        clock.advance(Duration::from_millis(999));
    }
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn test_finalizes_with_majority_and_description() {
    let (mut session, clock) = manual_session();
    session.start().unwrap();

    // 7 Round frames, then 4 Square frames spread over the window
    let mut finalizing = None;
    for i in 0..11 {
        let landmarks = if i < 7 { round_face() } else { square_face() };
        let result = session.process_frame(&landmarks).unwrap();
        if result.is_final {
            finalizing = Some(result);
            break;
        }
        clock.advance(Duration::from_secs(1));
    }

    let result = finalizing.expect("session never finalized");
    assert_eq!(result.label, ShapeLabel::Round);
    assert!((result.confidence.unwrap() - 7.0 / 11.0).abs() < 1e-9);
    assert_eq!(result.description, Some(ShapeLabel::Round.description()));
    assert_eq!(session.phase(), SessionPhase::Finalized);
}

#[test]
fn test_finalization_fires_exactly_once() {
    let (mut session, clock) = manual_session();
    run_to_verdict(&mut session, &clock, &round_face());
    assert_eq!(session.phase(), SessionPhase::Finalized);
    let observations = session.observations();

    // 100 further frames, even of a contradicting shape, change nothing
    for _ in 0..100 {
        clock.advance(Duration::from_millis(33));
        let result = session.process_frame(&square_face()).unwrap();
        assert!(result.is_final);
        assert_eq!(result.label, ShapeLabel::Round);
        assert_eq!(result.description, None);
    }
    assert_eq!(session.observations(), observations);
}

#[test]
fn test_pause_freezes_elapsed_time() {
    let (mut session, clock) = manual_session();
    session.start().unwrap();

    clock.advance(Duration::from_secs(4));
    assert_eq!(session.elapsed(), Duration::from_secs(4));

    session.stop().unwrap();
    assert_eq!(session.phase(), SessionPhase::Paused);

    // 5 seconds of real time pass while paused
    clock.advance(Duration::from_secs(5));
    assert_eq!(session.elapsed(), Duration::from_secs(4));

    // Elapsed reads 4, not 9, immediately after resume
    session.start().unwrap();
    assert_eq!(session.elapsed(), Duration::from_secs(4));

    clock.advance(Duration::from_secs(2));
    assert_eq!(session.elapsed(), Duration::from_secs(6));
}

#[test]
fn test_pause_does_not_rush_finalization() {
    let (mut session, clock) = manual_session();
    session.start().unwrap();
    session.process_frame(&round_face()).unwrap();

    clock.advance(Duration::from_secs(6));
    session.stop().unwrap();
    clock.advance(Duration::from_secs(60));
    session.start().unwrap();

    // Only 6 observation seconds have passed despite the long gap
    let result = session.process_frame(&round_face()).unwrap();
    assert!(!result.is_final);
    assert_eq!(result.remaining_seconds, 4);
}

#[test]
fn test_frames_rejected_while_idle_and_paused() {
    let (mut session, clock) = manual_session();

    let err = session.process_frame(&round_face()).unwrap_err();
    assert!(matches!(err, Error::SessionStateViolation(_)));

    session.start().unwrap();
    session.process_frame(&round_face()).unwrap();
    clock.advance(Duration::from_secs(1));
    session.stop().unwrap();

    let err = session.process_frame(&round_face()).unwrap_err();
    assert!(matches!(err, Error::SessionStateViolation(_)));

    // The rejected frames were not counted
    assert_eq!(session.observations(), 1);
}

#[test]
fn test_bad_frame_is_dropped_without_touching_history() {
    let (mut session, clock) = manual_session();
    session.start().unwrap();
    session.process_frame(&round_face()).unwrap();
    clock.advance(Duration::from_secs(1));

    // All points coincide: degenerate geometry
    let degenerate = LandmarkSet::from_points(&vec![Point2::new(0.0, 0.0); 68]).unwrap();
    let err = session.process_frame(&degenerate).unwrap_err();
    assert!(matches!(err, Error::DegenerateGeometry(_)));

    assert_eq!(session.observations(), 1);
    assert_eq!(session.phase(), SessionPhase::Running);

    // Session continues normally afterwards
    session.process_frame(&round_face()).unwrap();
    assert_eq!(session.observations(), 2);
}

#[test]
fn test_restart_clears_all_state() {
    let (mut session, clock) = manual_session();
    run_to_verdict(&mut session, &clock, &round_face());
    assert_eq!(session.phase(), SessionPhase::Finalized);

    session.restart();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.observations(), 0);
    assert_eq!(session.elapsed(), Duration::ZERO);

    let snap = session.snapshot();
    assert_eq!(snap.label, ShapeLabel::Undetermined);
    assert!(!snap.is_final);
    assert_eq!(snap.remaining_seconds, 10);

    // A restarted session can immediately run a fresh analysis
    run_to_verdict(&mut session, &clock, &square_face());
    assert_eq!(session.snapshot().label, ShapeLabel::Square);
}

#[test]
fn test_finalized_session_rejects_start_and_stop() {
    let (mut session, clock) = manual_session();
    run_to_verdict(&mut session, &clock, &round_face());

    assert!(matches!(
        session.start(),
        Err(Error::SessionStateViolation(_))
    ));
    assert!(matches!(
        session.stop(),
        Err(Error::SessionStateViolation(_))
    ));
}

#[test]
fn test_disabled_confidence_gate_finalizes_weak_majorities() {
    let mut config = Config::default();
    config.stabilizer.confidence_gate = false;
    let clock = ManualClock::new();
    let mut session = Session::with_clock(&config, clock.clone());
    session.start().unwrap();

    // Alternate labels so no shape reaches 60% confidence
    let faces = [round_face(), square_face()];
    let mut last = None;
    for i in 0..11 {
        last = Some(session.process_frame(&faces[i % 2]).unwrap());
        if last.unwrap().is_final {
            break;
        }
        clock.advance(Duration::from_secs(1));
    }

    let result = last.unwrap();
    assert!(result.is_final);
    assert!(result.confidence.unwrap() <= 0.6);
}

#[test]
fn test_shared_session_snapshot_across_threads() {
    let clock = ManualClock::new();
    let shared = SharedSession::with_session(Session::with_clock(&Config::default(), clock.clone()));
    shared.start().unwrap();

    let capture = shared.clone();
    let capture_clock = clock.clone();
    let handle = std::thread::spawn(move || {
        capture.process_frame(&round_face()).unwrap();
        for _ in 0..10 {
            capture_clock.advance(Duration::from_secs(1));
            capture.process_frame(&round_face()).unwrap();
        }
    });
    handle.join().unwrap();

    // The display-side handle sees the committed verdict
    let snap = shared.snapshot();
    assert!(snap.is_final);
    assert_eq!(snap.label, ShapeLabel::Round);
    assert_eq!(snap.confidence, Some(1.0));
    assert_eq!(snap.remaining_seconds, 0);
    assert_eq!(shared.phase(), SessionPhase::Finalized);
}
