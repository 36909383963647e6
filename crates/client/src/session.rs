//! Client session state machine.
//!
//! Mirrors the original form flow: Idle (input editable, submit gated
//! on a minimum length) -> Submitting (input locked, one request in
//! flight) -> Result (before/after display with copy and reset). A
//! network failure is a terminal display state showing a fixed
//! placeholder, not a retry -- the client-side placeholder and the
//! server-side template are two independent degrade layers.

use std::time::{Duration, Instant};

/// Minimum trimmed input length before submission is allowed.
pub const MIN_IDEA_CHARS: usize = 15;

/// How long the transient "copied" flag stays set.
pub const COPY_FLAG_TTL: Duration = Duration::from_secs(2);

/// Displayed when the service is unreachable or answers abnormally.
pub const NETWORK_FAILURE_PLACEHOLDER: &str =
    "Server is waking up, please try again in a moment...";

/// Where the session currently is in its linear flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input editable, submit gated on [`MIN_IDEA_CHARS`].
    Idle,
    /// One request outstanding; input locked, no second submit.
    Submitting,
    /// A result (or the failure placeholder) is on display.
    Result,
}

/// All client-side state for one enhancement session.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    input: String,
    result: Option<String>,
    copied_until: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session in the Idle phase with empty input.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            result: None,
            copied_until: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Raw (untrimmed) character count of the current input.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Replace the input text. Ignored outside the Idle phase -- the
    /// input is locked while a request is outstanding or a result is
    /// shown.
    pub fn set_input(&mut self, text: &str) {
        if self.phase == Phase::Idle {
            self.input = text.to_string();
        }
    }

    /// Whether submission is currently allowed: Idle phase and trimmed
    /// input at or above the minimum length.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.input.trim().chars().count() >= MIN_IDEA_CHARS
    }

    /// Move to Submitting if the gate allows it.
    ///
    /// Returns `false` without changing state when the input is below
    /// the threshold or a request is already outstanding. The guard
    /// exists because the gate is a soft minimum that callers can
    /// otherwise bypass.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Record a successful response and move to Result.
    pub fn complete(&mut self, text: String) {
        if self.phase == Phase::Submitting {
            self.result = Some(text);
            self.phase = Phase::Result;
        }
    }

    /// Record a network-level failure and move to Result showing the
    /// fixed placeholder. No automatic retry.
    pub fn fail(&mut self) {
        if self.phase == Phase::Submitting {
            self.result = Some(NETWORK_FAILURE_PLACEHOLDER.to_string());
            self.phase = Phase::Result;
        }
    }

    /// The displayed result text, if any.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Set the transient "copied" flag. Only meaningful in Result.
    pub fn mark_copied(&mut self, now: Instant) {
        if self.phase == Phase::Result {
            self.copied_until = Some(now + COPY_FLAG_TTL);
        }
    }

    /// Whether the "copied" flag is still showing at `now`. Reverts
    /// automatically once [`COPY_FLAG_TTL`] has elapsed, regardless of
    /// any other action.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
