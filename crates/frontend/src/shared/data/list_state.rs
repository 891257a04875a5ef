//! Pure state machine behind every resource store.
//!
//! All transitions live here, free of signals and network code, so the
//! supersession and failure-containment rules are host-testable.

use contracts::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// List state plus the generation token that guards against racing loads.
///
/// Two overlapping `load()` calls used to race, with whichever response
/// resolved last silently winning. Each load now takes a token from
/// [`begin_load`], and [`apply_load`] rejects any response whose token is not
/// the latest one issued: the last *issued* request wins, not the last
/// *resolved* one.
#[derive(Debug, Clone)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub phase: LoadPhase,
    pub error: Option<ApiError>,
    generation: u64,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
            generation: 0,
        }
    }
}

impl<R> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a user-visible load. Supersedes any load still in flight.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }

    /// Apply a finished load. Returns `false` when the response was stale and
    /// the state was left untouched.
    ///
    /// Failures never escape: the list degrades to empty with the error
    /// recorded for the retry affordance.
    pub fn apply_load(&mut self, token: u64, result: Result<Vec<R>, ApiError>) -> bool {
        if token != self.generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
                self.error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.phase = LoadPhase::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    /// Take a token for a background refresh without flipping the phase to
    /// `Loading`; silent refreshes must not show a spinner.
    pub fn begin_silent(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a background refresh: success replaces the list, failure is
    /// swallowed (the user keeps whatever was on screen).
    pub fn apply_silent(&mut self, token: u64, result: Result<Vec<R>, ApiError>) -> bool {
        if token != self.generation {
            return false;
        }
        if let Ok(items) = result {
            self.items = items;
            self.phase = LoadPhase::Loaded;
            self.error = None;
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// Doubling backoff for the silent-refresh poller.
#[derive(Debug, Clone, Copy)]
pub struct RefreshBackoff {
    base_ms: u32,
    max_ms: u32,
    consecutive_failures: u32,
}

/// Doubling stops here; any further shift would overflow past every cap.
const MAX_BACKOFF_SHIFT: u32 = 8;

impl RefreshBackoff {
    pub fn new(base_ms: u32, max_ms: u32) -> Self {
        Self { base_ms, max_ms, consecutive_failures: 0 }
    }

    /// Delay before the next poll: base interval doubled per consecutive
    /// failure, capped at the maximum.
    pub fn current_delay_ms(&self) -> u32 {
        let factor = 1u32 << self.consecutive_failures.min(MAX_BACKOFF_SHIFT);
        self.base_ms.saturating_mul(factor).min(self.max_ms)
    }

    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    pub fn record_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    /// A failure that retrying soon will not fix (server bug, bad payload):
    /// go straight to the longest interval.
    pub fn record_persistent_failure(&mut self) {
        self.consecutive_failures = MAX_BACKOFF_SHIFT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net_err() -> ApiError {
        ApiError::Network("connection refused".into())
    }

    #[test]
    fn load_failure_is_contained() {
        let mut state: ListState<String> = ListState::new();
        state.items = vec!["previa".into()];
        let token = state.begin_load();

        assert!(state.apply_load(token, Err(net_err())));
        assert!(state.items.is_empty());
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.error, Some(net_err()));
    }

    #[test]
    fn stale_response_is_rejected() {
        let mut state: ListState<String> = ListState::new();
        let primero = state.begin_load();
        let segundo = state.begin_load();

        // The slower first response arrives after the second was issued.
        assert!(!state.apply_load(primero, Ok(vec!["vieja".into()])));
        assert!(state.items.is_empty());

        assert!(state.apply_load(segundo, Ok(vec!["nueva".into()])));
        assert_eq!(state.items, vec!["nueva".to_string()]);
        assert_eq!(state.phase, LoadPhase::Loaded);
    }

    #[test]
    fn successful_load_clears_previous_error() {
        let mut state: ListState<String> = ListState::new();
        let token = state.begin_load();
        state.apply_load(token, Err(net_err()));

        let token = state.begin_load();
        state.apply_load(token, Ok(vec!["a".into()]));
        assert!(state.error.is_none());
        assert_eq!(state.phase, LoadPhase::Loaded);
    }

    #[test]
    fn resync_replaces_the_whole_list() {
        // After a mutation the store re-loads; the state must equal the fresh
        // load result with no drift from the pre-mutation list.
        let mut state: ListState<String> = ListState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(vec!["a".into(), "b".into()]));

        let token = state.begin_load();
        state.apply_load(token, Ok(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(state.items, vec!["a".to_string(), "b".into(), "c".into()]);
    }

    #[test]
    fn silent_refresh_swallows_failures() {
        let mut state: ListState<String> = ListState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(vec!["a".into()]));

        let token = state.begin_silent();
        assert!(state.apply_silent(token, Err(net_err())));
        // The visible list and phase are untouched.
        assert_eq!(state.items, vec!["a".to_string()]);
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert!(state.error.is_none());
    }

    #[test]
    fn silent_refresh_does_not_show_spinner() {
        let mut state: ListState<String> = ListState::new();
        state.begin_silent();
        assert!(!state.is_loading());
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let mut backoff = RefreshBackoff::new(30_000, 300_000);
        assert_eq!(backoff.current_delay_ms(), 30_000);
        backoff.record_failure();
        assert_eq!(backoff.current_delay_ms(), 60_000);
        backoff.record_failure();
        backoff.record_failure();
        assert_eq!(backoff.current_delay_ms(), 240_000);
        backoff.record_failure();
        assert_eq!(backoff.current_delay_ms(), 300_000);
        backoff.record_success();
        assert_eq!(backoff.current_delay_ms(), 30_000);
    }

    #[test]
    fn persistent_failure_jumps_to_the_cap() {
        let mut backoff = RefreshBackoff::new(30_000, 300_000);
        backoff.record_persistent_failure();
        assert_eq!(backoff.current_delay_ms(), 300_000);
        backoff.record_success();
        assert_eq!(backoff.current_delay_ms(), 30_000);
    }
}
