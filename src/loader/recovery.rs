//! Recovery State Machine
//!
//! Retry policy for chunk-loading failures, decoupled from the rendering
//! framework: the machine consumes events and answers with dispositions,
//! while the hosting component owns the actual timer handle.

use std::time::Duration;

use super::backoff::{retry_delay, BASE_RETRY_DELAY};
use super::classify::{default_predicate, RecoveryPredicate};
use super::error::LoadError;

/// Consecutive recoverable errors tolerated before giving up.
pub const MAX_RETRIES: u32 = 3;

/// Where the machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryPhase {
    /// Children render normally.
    Ok,
    /// A retry timer is pending; children are hidden behind a quiet
    /// retrying indicator.
    RetryScheduled,
    /// Budget spent or the error was never recoverable; only a full page
    /// reload remains.
    Exhausted,
}

/// Answer to an error event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Recoverable: schedule a retry timer with this delay.
    Retry(Duration),
    /// Recoverable, but the budget is spent.
    Exhausted,
    /// Not a chunk failure. Report it; never auto-retry.
    Declined,
}

pub struct RecoveryMachine {
    phase: RecoveryPhase,
    retry_count: u32,
    max_retries: u32,
    last_error: Option<LoadError>,
    is_recoverable: RecoveryPredicate,
}

impl RecoveryMachine {
    pub fn new() -> Self {
        Self::with_predicate(default_predicate())
    }

    /// Build a machine around a custom recoverability test.
    pub fn with_predicate(is_recoverable: RecoveryPredicate) -> Self {
        Self {
            phase: RecoveryPhase::Ok,
            retry_count: 0,
            max_retries: MAX_RETRIES,
            last_error: None,
            is_recoverable,
        }
    }

    pub fn phase(&self) -> RecoveryPhase {
        self.phase
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// Whether a manual retry is still on the table.
    pub fn can_retry(&self) -> bool {
        self.phase != RecoveryPhase::Exhausted && self.retry_count < self.max_retries
    }

    /// A child reported an error. Recoverable errors consume one unit of
    /// budget and schedule a retry; the budget's last unit exhausts the
    /// machine instead. Anything else is declined outright.
    pub fn on_error(&mut self, error: LoadError) -> ErrorDisposition {
        let recoverable = (self.is_recoverable)(&error);
        self.last_error = Some(error);

        if !recoverable {
            self.phase = RecoveryPhase::Exhausted;
            return ErrorDisposition::Declined;
        }

        if self.retry_count + 1 >= self.max_retries {
            self.phase = RecoveryPhase::Exhausted;
            return ErrorDisposition::Exhausted;
        }

        let delay = retry_delay(self.retry_count, BASE_RETRY_DELAY);
        self.retry_count += 1;
        self.phase = RecoveryPhase::RetryScheduled;
        ErrorDisposition::Retry(delay)
    }

    /// The scheduled retry timer fired; the host re-renders its children.
    pub fn on_timer_fired(&mut self) {
        if self.phase == RecoveryPhase::RetryScheduled {
            self.phase = RecoveryPhase::Ok;
        }
    }

    /// Manual "Try Again": fire the pending retry immediately. Returns
    /// true when the host should cancel its timer and re-render.
    pub fn on_manual_retry(&mut self) -> bool {
        if self.phase == RecoveryPhase::RetryScheduled {
            self.phase = RecoveryPhase::Ok;
            true
        } else {
            false
        }
    }

    /// Clear the bookkeeping after a confirmed successful recovery.
    pub fn reset(&mut self) {
        self.phase = RecoveryPhase::Ok;
        self.retry_count = 0;
        self.last_error = None;
    }
}

impl Default for RecoveryMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn chunk_error() -> LoadError {
        LoadError::new("Error", "ChunkLoadError: Loading chunk 7 failed")
    }

    #[test]
    fn first_chunk_error_schedules_a_one_second_retry() {
        let mut machine = RecoveryMachine::new();
        let disposition = machine.on_error(chunk_error());

        assert_eq!(disposition, ErrorDisposition::Retry(Duration::from_secs(1)));
        assert_eq!(machine.phase(), RecoveryPhase::RetryScheduled);
        assert_eq!(machine.retry_count(), 1);
    }

    #[test]
    fn timer_firing_returns_to_ok() {
        let mut machine = RecoveryMachine::new();
        machine.on_error(chunk_error());
        machine.on_timer_fired();
        assert_eq!(machine.phase(), RecoveryPhase::Ok);
        assert_eq!(machine.retry_count(), 1);
    }

    #[test]
    fn backoff_doubles_on_the_second_error() {
        let mut machine = RecoveryMachine::new();
        machine.on_error(chunk_error());
        machine.on_timer_fired();

        let disposition = machine.on_error(chunk_error());
        assert_eq!(disposition, ErrorDisposition::Retry(Duration::from_secs(2)));
    }

    #[test]
    fn third_consecutive_error_exhausts() {
        let mut machine = RecoveryMachine::new();
        for _ in 0..2 {
            machine.on_error(chunk_error());
            machine.on_timer_fired();
        }

        let disposition = machine.on_error(chunk_error());
        assert_eq!(disposition, ErrorDisposition::Exhausted);
        assert_eq!(machine.phase(), RecoveryPhase::Exhausted);
        assert!(!machine.can_retry());
    }

    #[test]
    fn non_chunk_errors_are_declined_without_spending_budget() {
        let mut machine = RecoveryMachine::new();
        let error = LoadError::new("TypeError", "TypeError: x is not a function");

        let disposition = machine.on_error(error);
        assert_eq!(disposition, ErrorDisposition::Declined);
        assert_eq!(machine.phase(), RecoveryPhase::Exhausted);
        assert_eq!(machine.retry_count(), 0);
    }

    #[test]
    fn manual_retry_only_valid_while_scheduled() {
        let mut machine = RecoveryMachine::new();
        assert!(!machine.on_manual_retry());

        machine.on_error(chunk_error());
        assert!(machine.on_manual_retry());
        assert_eq!(machine.phase(), RecoveryPhase::Ok);
    }

    #[test]
    fn reset_clears_count_and_error() {
        let mut machine = RecoveryMachine::new();
        machine.on_error(chunk_error());
        machine.reset();

        assert_eq!(machine.phase(), RecoveryPhase::Ok);
        assert_eq!(machine.retry_count(), 0);
        assert!(machine.last_error().is_none());
    }

    #[test]
    fn custom_predicate_overrides_classification() {
        let mut machine = RecoveryMachine::with_predicate(Rc::new(|_| true));
        let error = LoadError::new("TypeError", "TypeError: x is not a function");
        assert!(matches!(
            machine.on_error(error),
            ErrorDisposition::Retry(_)
        ));
    }
}
