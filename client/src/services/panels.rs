//! Fetch lifecycle state for data-backed panels
//!
//! Each panel owns a `PanelFetch` keyed by its request parameters. A new
//! submission replaces the key; responses arriving for an old key are
//! discarded (last-write-wins), so a since-changed location never shows a
//! stale result. Fallback substitution is explicit and only possible from
//! the Error state; the underlying fetch state stays Error so tests and
//! the offline notice can see what actually happened.

use crate::error::AppError;

/// Lifecycle of a single fetch: Idle → Loading → Success | Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }
}

/// A panel's fetch slot, keyed by the request parameters that produced it
#[derive(Debug, Clone)]
pub struct PanelFetch<K, T> {
    key: Option<K>,
    state: FetchState<T>,
    fallback: Option<T>,
}

impl<K: PartialEq, T> Default for PanelFetch<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, T> PanelFetch<K, T> {
    pub fn new() -> Self {
        Self {
            key: None,
            state: FetchState::Idle,
            fallback: None,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a fetch for the given request key. Supersedes any in-flight
    /// interest and clears a previously substituted fallback.
    pub fn begin(&mut self, key: K) {
        self.key = Some(key);
        self.state = FetchState::Loading;
        self.fallback = None;
    }

    /// Deliver a result for the given key. Returns false (and changes
    /// nothing) when the key no longer matches the panel's current one.
    pub fn apply(&mut self, key: &K, result: Result<T, AppError>) -> bool {
        if self.key.as_ref() != Some(key) {
            tracing::debug!("discarding stale fetch result");
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Error(err.to_string()),
        };
        true
    }

    /// Substitute static data for display after a failed fetch. The fetch
    /// state remains Error; `is_offline` reports the substitution.
    pub fn substitute_fallback(&mut self, data: T) {
        if self.state.is_error() {
            self.fallback = Some(data);
        }
    }

    /// Data to render: the live result, or the substituted fallback
    pub fn display(&self) -> Option<&T> {
        match &self.state {
            FetchState::Success(data) => Some(data),
            FetchState::Error(_) => self.fallback.as_ref(),
            FetchState::Idle | FetchState::Loading => None,
        }
    }

    /// True when the panel is showing fallback data because the live fetch
    /// failed; drives the passive "sample data (offline)" notice.
    pub fn is_offline(&self) -> bool {
        self.state.is_error() && self.fallback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_err() -> AppError {
        AppError::Network("connection refused".into())
    }

    #[test]
    fn test_success_path() {
        let mut panel: PanelFetch<String, u32> = PanelFetch::new();
        assert_eq!(panel.state(), &FetchState::Idle);
        assert!(panel.display().is_none());

        panel.begin("key".to_string());
        assert!(panel.state().is_loading());

        assert!(panel.apply(&"key".to_string(), Ok(7)));
        assert_eq!(panel.display(), Some(&7));
        assert!(!panel.is_offline());
    }

    #[test]
    fn test_error_then_fallback_substitution() {
        let mut panel: PanelFetch<String, u32> = PanelFetch::new();
        panel.begin("key".to_string());
        assert!(panel.apply(&"key".to_string(), Err(network_err())));

        // Error state renders nothing until the fallback is substituted
        assert!(panel.display().is_none());
        assert!(!panel.is_offline());

        panel.substitute_fallback(42);
        assert_eq!(panel.display(), Some(&42));
        assert!(panel.is_offline());
        // Underlying state is still Error
        assert!(panel.state().is_error());
    }

    #[test]
    fn test_fallback_ignored_outside_error_state() {
        let mut panel: PanelFetch<String, u32> = PanelFetch::new();
        panel.substitute_fallback(42);
        assert!(panel.display().is_none());

        panel.begin("key".to_string());
        panel.substitute_fallback(42);
        assert!(panel.display().is_none());
        assert!(!panel.is_offline());
    }

    #[test]
    fn test_stale_result_discarded_last_write_wins() {
        let mut panel: PanelFetch<String, u32> = PanelFetch::new();
        panel.begin("old".to_string());
        panel.begin("new".to_string());

        // The response for the superseded key is dropped
        assert!(!panel.apply(&"old".to_string(), Ok(1)));
        assert!(panel.state().is_loading());

        assert!(panel.apply(&"new".to_string(), Ok(2)));
        assert_eq!(panel.display(), Some(&2));
    }

    #[test]
    fn test_new_submission_clears_previous_fallback() {
        let mut panel: PanelFetch<String, u32> = PanelFetch::new();
        panel.begin("key".to_string());
        panel.apply(&"key".to_string(), Err(network_err()));
        panel.substitute_fallback(42);
        assert!(panel.is_offline());

        panel.begin("key2".to_string());
        assert!(!panel.is_offline());
        assert!(panel.display().is_none());
    }
}
