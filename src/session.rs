//! Session lifecycle around the temporal stabilizer.
//!
//! A session owns the observation history and the pause-aware timer, and
//! enforces when frames may be processed: only a Running session accepts
//! frames, pausing freezes observation time without losing it, and a
//! restart drops everything back to a clean Idle state. The capture side
//! of the application submits frames; the display side reads consistent
//! snapshots through `SharedSession`.

use crate::classifier::{classify, ShapeLabel};
use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::landmarks::LandmarkSet;
use crate::measurement::Measurements;
use crate::stabilizer::{FrameResult, ShapeStabilizer};
use crate::{Error, Result};
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Lifecycle phase of an analysis session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No observation yet; frames are rejected
    Idle,
    /// Frames are processed and appended to the history
    Running,
    /// Observation time is frozen; frames are rejected
    Paused,
    /// Verdict committed; frames return the latched result
    Finalized,
}

/// Pause-aware observation timer.
///
/// Elapsed time accumulates only while started; pausing folds the running
/// span into `accumulated` so a later resume continues seamlessly.
#[derive(Debug, Clone, Copy, Default)]
struct SessionTimer {
    started_at: Option<Duration>,
    accumulated: Duration,
}

impl SessionTimer {
    fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    fn pause(&mut self, now: Duration) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.saturating_sub(started);
        }
    }

    fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + now.saturating_sub(started),
            None => self.accumulated,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Consistent view of the current result for a display layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSnapshot {
    /// Current label; `Undetermined` before any observation
    pub label: ShapeLabel,
    /// True once the verdict is committed
    pub is_final: bool,
    /// Majority confidence, once the window has elapsed
    pub confidence: Option<f64>,
    /// Whole seconds left in the observation window
    pub remaining_seconds: u64,
}

/// One face shape analysis session
pub struct Session<C: Clock = MonotonicClock> {
    clock: C,
    phase: SessionPhase,
    timer: SessionTimer,
    stabilizer: ShapeStabilizer,
    snapshot: ResultSnapshot,
    initial_remaining: u64,
}

impl Session<MonotonicClock> {
    /// Create a session driven by wall-clock time
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> Session<C> {
    /// Create a session with an explicit time source
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Window is validated positive and small
    pub fn with_clock(config: &Config, clock: C) -> Self {
        let initial_remaining = config.stabilizer.finalization_window_seconds.ceil() as u64;
        Self {
            clock,
            phase: SessionPhase::Idle,
            timer: SessionTimer::default(),
            stabilizer: ShapeStabilizer::new(&config.stabilizer),
            snapshot: ResultSnapshot {
                label: ShapeLabel::Undetermined,
                is_final: false,
                confidence: None,
                remaining_seconds: initial_remaining,
            },
            initial_remaining,
        }
    }

    /// Begin or resume observation
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionStateViolation` if the session has already
    /// finalized; a restart is required first.
    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            SessionPhase::Idle => {
                info!("Starting face shape analysis session");
                self.timer.start(self.clock.now());
                self.phase = SessionPhase::Running;
                Ok(())
            }
            SessionPhase::Paused => {
                info!("Resuming analysis at {:.1}s elapsed", self.timer.accumulated.as_secs_f64());
                self.timer.start(self.clock.now());
                self.phase = SessionPhase::Running;
                Ok(())
            }
            SessionPhase::Running => {
                debug!("start() while already running, ignoring");
                Ok(())
            }
            SessionPhase::Finalized => Err(Error::SessionStateViolation(
                "session is finalized; restart before starting again".to_string(),
            )),
        }
    }

    /// Pause observation, freezing elapsed time at its current value
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionStateViolation` when the session is idle or
    /// finalized; there is nothing to pause.
    pub fn stop(&mut self) -> Result<()> {
        match self.phase {
            SessionPhase::Running => {
                let now = self.clock.now();
                self.timer.pause(now);
                self.phase = SessionPhase::Paused;
                info!("Paused analysis at {:.1}s elapsed", self.timer.accumulated.as_secs_f64());
                Ok(())
            }
            SessionPhase::Paused => {
                debug!("stop() while already paused, ignoring");
                Ok(())
            }
            SessionPhase::Idle => Err(Error::SessionStateViolation(
                "cannot stop a session that was never started".to_string(),
            )),
            SessionPhase::Finalized => Err(Error::SessionStateViolation(
                "session is finalized; restart instead of stopping".to_string(),
            )),
        }
    }

    /// Discard all observation state and return to Idle
    pub fn restart(&mut self) {
        info!("Restarting analysis session");
        self.timer.reset();
        self.stabilizer.reset();
        self.phase = SessionPhase::Idle;
        self.snapshot = ResultSnapshot {
            label: ShapeLabel::Undetermined,
            is_final: false,
            confidence: None,
            remaining_seconds: self.initial_remaining,
        };
    }

    /// Process one frame's landmark set
    ///
    /// # Errors
    ///
    /// - `Error::SessionStateViolation` while Idle or Paused
    /// - `Error::InvalidLandmarks` / `Error::DegenerateGeometry` for a
    ///   bad frame; the frame is dropped and history and timer are left
    ///   untouched
    pub fn process_frame(&mut self, landmarks: &LandmarkSet) -> Result<FrameResult> {
        match self.phase {
            SessionPhase::Idle => {
                return Err(Error::SessionStateViolation(
                    "frame submitted while idle".to_string(),
                ))
            }
            SessionPhase::Paused => {
                return Err(Error::SessionStateViolation(
                    "frame submitted while paused".to_string(),
                ))
            }
            SessionPhase::Finalized => {
                if let Some(v) = self.stabilizer.verdict() {
                    return Ok(FrameResult {
                        label: v.label,
                        is_final: true,
                        confidence: Some(v.confidence),
                        remaining_seconds: 0,
                        description: None,
                    });
                }
            }
            SessionPhase::Running => {}
        }

        let measurements = Measurements::from_landmarks(landmarks)?;
        let label = classify(&measurements);
        let elapsed = self.timer.elapsed(self.clock.now());

        let result = self.stabilizer.observe(label, elapsed);
        if result.is_final {
            self.phase = SessionPhase::Finalized;
        }

        self.snapshot = ResultSnapshot {
            label: result.label,
            is_final: result.is_final,
            confidence: result.confidence,
            remaining_seconds: result.remaining_seconds,
        };
        Ok(result)
    }

    /// Current result view for the display layer
    #[must_use]
    pub fn snapshot(&self) -> ResultSnapshot {
        self.snapshot
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Observation time elapsed so far, excluding paused spans
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed(self.clock.now())
    }

    /// Number of frames observed since the last restart
    #[must_use]
    pub fn observations(&self) -> usize {
        self.stabilizer.history_len()
    }
}

/// Cloneable, mutex-guarded handle to a session.
///
/// One handle lives on the capture thread submitting frames, another on
/// the display thread reading snapshots. Each operation takes the lock
/// once, so readers never observe a partially updated result.
pub struct SharedSession<C: Clock = MonotonicClock> {
    inner: Arc<Mutex<Session<C>>>,
}

impl<C: Clock> Clone for SharedSession<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedSession<MonotonicClock> {
    /// Create a shared session driven by wall-clock time
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_session(Session::new(config))
    }
}

impl<C: Clock> SharedSession<C> {
    /// Wrap an existing session for sharing across threads
    pub fn with_session(session: Session<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session<C>> {
        self.inner.lock().expect("session lock poisoned")
    }

    /// See [`Session::start`]
    pub fn start(&self) -> Result<()> {
        self.lock().start()
    }

    /// See [`Session::stop`]
    pub fn stop(&self) -> Result<()> {
        self.lock().stop()
    }

    /// See [`Session::restart`]
    pub fn restart(&self) {
        self.lock().restart();
    }

    /// See [`Session::process_frame`]
    pub fn process_frame(&self, landmarks: &LandmarkSet) -> Result<FrameResult> {
        self.lock().process_frame(landmarks)
    }

    /// See [`Session::snapshot`]
    #[must_use]
    pub fn snapshot(&self) -> ResultSnapshot {
        self.lock().snapshot()
    }

    /// See [`Session::phase`]
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.lock().phase()
    }

    /// See [`Session::elapsed`]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.lock().elapsed()
    }
}
