//! Temporal stabilization of per-frame shape classifications.
//!
//! Raw classifier output jitters between neighboring categories as the
//! detector's landmarks wobble, so no single frame is trusted as a
//! verdict. The stabilizer accumulates every observed label and, once the
//! observation window has elapsed, commits to the majority label. A
//! configurable confidence gate can hold back finalization while the
//! majority is weak; the majority label is still reported either way.

use crate::classifier::ShapeLabel;
use crate::config::StabilizerConfig;
use std::time::Duration;

/// Per-frame output of the stabilizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    /// Current shape label: raw while observing, majority afterwards
    pub label: ShapeLabel,
    /// True once the verdict is committed
    pub is_final: bool,
    /// Majority confidence, present once the window has elapsed
    pub confidence: Option<f64>,
    /// Whole seconds left in the observation window
    pub remaining_seconds: u64,
    /// Styling description, emitted exactly once on the finalizing frame
    pub description: Option<&'static str>,
}

/// Majority label over the observation history with its vote share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorityVerdict {
    pub label: ShapeLabel,
    pub confidence: f64,
}

/// Accumulates per-frame labels and commits a majority verdict after the
/// observation window elapses
pub struct ShapeStabilizer {
    window: Duration,
    min_confidence: f64,
    confidence_gate: bool,
    history: Vec<ShapeLabel>,
    verdict: Option<MajorityVerdict>,
}

impl ShapeStabilizer {
    /// Create a stabilizer with the given configuration
    #[must_use]
    pub fn new(config: &StabilizerConfig) -> Self {
        Self {
            window: Duration::from_secs_f64(config.finalization_window_seconds),
            min_confidence: config.min_confidence,
            confidence_gate: config.confidence_gate,
            history: Vec::new(),
            verdict: None,
        }
    }

    /// Record one classified frame and produce the current result
    ///
    /// `elapsed` is the session's observation time, already adjusted for
    /// pauses. Exactly one history entry is appended per call until the
    /// verdict is committed; afterwards the committed verdict is returned
    /// unchanged without touching the history.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Remaining time fits in u64 seconds
    pub fn observe(&mut self, label: ShapeLabel, elapsed: Duration) -> FrameResult {
        if let Some(v) = &self.verdict {
            return FrameResult {
                label: v.label,
                is_final: true,
                confidence: Some(v.confidence),
                remaining_seconds: 0,
                description: None,
            };
        }

        self.history.push(label);

        if elapsed < self.window {
            let remaining = self.window - elapsed;
            return FrameResult {
                label,
                is_final: false,
                confidence: None,
                remaining_seconds: remaining.as_secs_f64().ceil() as u64,
                description: None,
            };
        }

        let verdict = self.majority().expect("history is non-empty after push");

        if !self.confidence_gate || verdict.confidence > self.min_confidence {
            log::info!(
                "Face shape finalized as {} with confidence {:.2} over {} observations",
                verdict.label,
                verdict.confidence,
                self.history.len()
            );
            self.verdict = Some(verdict);
            FrameResult {
                label: verdict.label,
                is_final: true,
                confidence: Some(verdict.confidence),
                remaining_seconds: 0,
                description: Some(verdict.label.description()),
            }
        } else {
            log::debug!(
                "Majority {} below confidence gate ({:.2} <= {:.2}), continuing observation",
                verdict.label,
                verdict.confidence,
                self.min_confidence
            );
            FrameResult {
                label: verdict.label,
                is_final: false,
                confidence: Some(verdict.confidence),
                remaining_seconds: 0,
                description: None,
            }
        }
    }

    /// Most frequent label in the history, ties broken toward the label
    /// observed first
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // History length is far below f64 precision limits
    pub fn majority(&self) -> Option<MajorityVerdict> {
        if self.history.is_empty() {
            return None;
        }

        // Tally preserves first-occurrence order so a strict > keeps the
        // earliest label on ties
        let mut tally: Vec<(ShapeLabel, usize)> = Vec::new();
        for &label in &self.history {
            match tally.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => tally.push((label, 1)),
            }
        }

        let mut best = tally[0];
        for &(label, count) in &tally[1..] {
            if count > best.1 {
                best = (label, count);
            }
        }

        Some(MajorityVerdict {
            label: best.0,
            confidence: best.1 as f64 / self.history.len() as f64,
        })
    }

    /// True once the verdict has been committed
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.verdict.is_some()
    }

    /// Committed verdict, if any
    #[must_use]
    pub fn verdict(&self) -> Option<MajorityVerdict> {
        self.verdict
    }

    /// Number of observations accumulated since the last reset
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Clear the history and any committed verdict
    pub fn reset(&mut self) {
        self.history.clear();
        self.verdict = None;
    }
}
