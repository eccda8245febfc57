//! Roster service - the fixed fellowship and its ring bearers.
//!
//! The roster is frozen at construction. Members are shared as `Arc`s so the
//! ring-bearer map can point at the very same records the fellowship holds:
//! a bearer who is also a member is always `Arc::ptr_eq` to that member.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use fellowship_domain::{Character, DomainError, Race, Ring};
use thiserror::Error;

use crate::config::RosterConfig;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::ports::{ClockPort, RosterData, RosterSource, SourceError};
use crate::infrastructure::roster_source::BuiltInRoster;

/// Errors from building or refreshing a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The source now disagrees with the frozen roster.
    #[error("Roster source no longer matches the loaded roster: {0}")]
    SourceMismatch(String),

    #[error("Roster invariant violated: {0}")]
    Invariant(String),

    /// `update()` ran past its configured deadline.
    #[error("Roster update exceeded its deadline: {elapsed_ms}ms > {limit_ms}ms")]
    Timeout { elapsed_ms: u64, limit_ms: u64 },
}

/// Outcome of a successful `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub members_checked: usize,
    pub ring_bearers_checked: usize,
    pub elapsed: Duration,
}

#[derive(Clone)]
pub struct RosterService {
    fellowship: Vec<Arc<Character>>,
    ring_bearers: HashMap<Ring, Arc<Character>>,
    source: Arc<dyn RosterSource>,
    clock: Arc<dyn ClockPort>,
    config: RosterConfig,
}

impl RosterService {
    /// Build the service over the built-in fellowship.
    pub fn new() -> Self {
        let source = BuiltInRoster::new();
        Self::assemble(
            source.data(),
            Arc::new(source),
            Arc::new(SystemClock::new()),
            RosterConfig::default(),
        )
    }

    /// Build the service from an injected source and clock.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read or its data breaks a roster
    /// invariant (see [`validate_roster`]).
    pub fn with_parts(
        source: Arc<dyn RosterSource>,
        clock: Arc<dyn ClockPort>,
        config: RosterConfig,
    ) -> Result<Self, RosterError> {
        let data = source.load()?;
        validate_roster(&data)?;
        Ok(Self::assemble(data, source, clock, config))
    }

    fn assemble(
        data: RosterData,
        source: Arc<dyn RosterSource>,
        clock: Arc<dyn ClockPort>,
        config: RosterConfig,
    ) -> Self {
        let fellowship: Vec<Arc<Character>> = data.fellowship.into_iter().map(Arc::new).collect();

        let ring_bearers = data
            .ring_bearers
            .into_iter()
            .map(|(ring, bearer)| {
                let shared = fellowship
                    .iter()
                    .find(|&member| **member == bearer)
                    .cloned()
                    .unwrap_or_else(|| Arc::new(bearer));
                (ring, shared)
            })
            .collect();

        tracing::debug!(
            members = fellowship.len(),
            update_timeout_ms = config.update_timeout.as_millis() as u64,
            "Roster assembled"
        );

        Self {
            fellowship,
            ring_bearers,
            source,
            clock,
            config,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The fellowship in construction order.
    pub fn fellowship(&self) -> &[Arc<Character>] {
        &self.fellowship
    }

    /// Checked positional access into the fellowship.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` when `index` is past the end.
    pub fn fellowship_member(&self, index: usize) -> Result<&Arc<Character>, DomainError> {
        self.fellowship
            .get(index)
            .ok_or_else(|| DomainError::out_of_range(index, self.fellowship.len()))
    }

    /// First member whose name matches exactly, or `None`.
    pub fn fellowship_character(&self, name: &str) -> Option<&Arc<Character>> {
        self.fellowship
            .iter()
            .find(|member| member.name().as_str() == name)
    }

    pub fn ring_bearers(&self) -> &HashMap<Ring, Arc<Character>> {
        &self.ring_bearers
    }

    pub fn ring_bearer(&self, ring: Ring) -> Option<&Arc<Character>> {
        self.ring_bearers.get(&ring)
    }

    pub fn members_of(&self, race: Race) -> impl Iterator<Item = &Arc<Character>> {
        self.fellowship
            .iter()
            .filter(move |member| member.race() == race)
    }

    pub fn len(&self) -> usize {
        self.fellowship.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fellowship.is_empty()
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Re-read the source and re-check the roster, within the configured deadline.
    ///
    /// Never modifies the fellowship or the ring-bearer map; a source that has
    /// drifted is reported as `SourceMismatch` and the frozen roster is kept.
    pub fn update(&self) -> Result<UpdateReport, RosterError> {
        let started = self.clock.now();

        let data = self.source.load()?;
        self.verify_matches(&data)?;
        self.check_invariants()?;

        let elapsed = (self.clock.now() - started)
            .to_std()
            .unwrap_or(Duration::ZERO);
        if elapsed > self.config.update_timeout {
            let err = RosterError::Timeout {
                elapsed_ms: millis(elapsed),
                limit_ms: millis(self.config.update_timeout),
            };
            tracing::warn!(error = %err, "Roster update timed out");
            return Err(err);
        }

        tracing::debug!(
            members = self.fellowship.len(),
            elapsed_ms = millis(elapsed),
            "Roster update complete"
        );

        Ok(UpdateReport {
            members_checked: self.fellowship.len(),
            ring_bearers_checked: self.ring_bearers.len(),
            elapsed,
        })
    }

    fn verify_matches(&self, data: &RosterData) -> Result<(), RosterError> {
        let same_fellowship = data.fellowship.len() == self.fellowship.len()
            && data
                .fellowship
                .iter()
                .zip(&self.fellowship)
                .all(|(loaded, member)| *loaded == **member);
        if !same_fellowship {
            tracing::warn!(
                loaded = data.fellowship.len(),
                current = self.fellowship.len(),
                "Roster source fellowship drifted"
            );
            return Err(RosterError::SourceMismatch(
                "fellowship content or order changed".to_string(),
            ));
        }

        let same_bearers = data.ring_bearers.len() == self.ring_bearers.len()
            && data.ring_bearers.iter().all(|(ring, loaded)| {
                self.ring_bearers
                    .get(ring)
                    .is_some_and(|bearer| **bearer == *loaded)
            });
        if !same_bearers {
            tracing::warn!("Roster source ring bearers drifted");
            return Err(RosterError::SourceMismatch(
                "ring bearers changed".to_string(),
            ));
        }

        Ok(())
    }

    fn check_invariants(&self) -> Result<(), RosterError> {
        check_ages(self.fellowship.iter().map(|member| &**member))?;

        let bearer_in_fellowship = self
            .ring_bearers
            .values()
            .any(|bearer| self.fellowship.iter().any(|m| Arc::ptr_eq(m, bearer)));
        if !bearer_in_fellowship {
            return Err(RosterError::Invariant(
                "no ring bearer is a member of the fellowship".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}

/// Check raw roster data before it is frozen into a service.
///
/// The fellowship must be non-empty, every member's age must fit their race,
/// and at least one ring bearer must also be a fellowship member.
pub fn validate_roster(data: &RosterData) -> Result<(), RosterError> {
    if data.fellowship.is_empty() {
        return Err(RosterError::Invariant("fellowship is empty".to_string()));
    }

    check_ages(data.fellowship.iter())?;

    if !data
        .ring_bearers
        .values()
        .any(|bearer| data.fellowship.contains(bearer))
    {
        return Err(RosterError::Invariant(
            "no ring bearer is a member of the fellowship".to_string(),
        ));
    }
    Ok(())
}

fn check_ages<'a>(members: impl Iterator<Item = &'a Character>) -> Result<(), RosterError> {
    for member in members {
        if !member.has_plausible_age() {
            return Err(RosterError::Invariant(format!(
                "{} has an implausible age for a {}",
                member.name(),
                member.race()
            )));
        }
    }
    Ok(())
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
