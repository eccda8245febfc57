//! Roster configuration loaded from the environment.

use std::time::Duration;

/// Environment variable holding the `update()` deadline in milliseconds.
pub const UPDATE_TIMEOUT_ENV: &str = "FELLOWSHIP_UPDATE_TIMEOUT_MS";

/// Default `update()` deadline.
pub const DEFAULT_UPDATE_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterConfig {
    /// Upper bound on the wall-clock time of a single `update()`.
    pub update_timeout: Duration,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            update_timeout: DEFAULT_UPDATE_TIMEOUT,
        }
    }
}

impl RosterConfig {
    pub fn with_update_timeout(mut self, update_timeout: Duration) -> Self {
        self.update_timeout = update_timeout;
        self
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let update_timeout = match lookup(UPDATE_TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "Invalid {}, using default",
                        UPDATE_TIMEOUT_ENV
                    );
                    DEFAULT_UPDATE_TIMEOUT
                }
            },
            None => DEFAULT_UPDATE_TIMEOUT,
        };

        Self { update_timeout }
    }
}
