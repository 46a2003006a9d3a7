//! Lookup orchestration: location, place info, Mapcode, and the fallback to
//! candidate places when a name is ambiguous.
//!
//! [`Lookup`] owns the session's result list and publishes one of three
//! outcomes per search. Only one search may be in flight at a time; an
//! overlapping call is rejected without touching state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use mapfind_core::{CandidatePlace, GeoCoordinate, LookupError, ResolvedPlace, ResultList};
use mapfind_gemini::{GeminiClient, GeminiError, PlaceInfo};
use mapfind_locate::LocationProvider;
use mapfind_store::{JsonFileStore, StoreError};

/// The three model-backed lookups a search is composed of.
pub(crate) trait PlaceResolver {
    async fn place_info(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<PlaceInfo, GeminiError>;

    async fn map_code(&self, address: &str) -> Result<String, GeminiError>;

    async fn candidates(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<Vec<CandidatePlace>, GeminiError>;
}

impl PlaceResolver for GeminiClient {
    async fn place_info(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<PlaceInfo, GeminiError> {
        self.fetch_place_info(place_name, location).await
    }

    async fn map_code(&self, address: &str) -> Result<String, GeminiError> {
        self.fetch_map_code(address).await
    }

    async fn candidates(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<Vec<CandidatePlace>, GeminiError> {
        self.find_possible_places(place_name, location).await
    }
}

/// What a single search produced.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LookupOutcome {
    /// The place was resolved and prepended to the result list.
    Resolved(ResolvedPlace),
    /// The name was ambiguous; the user should pick one of these.
    Ambiguous(Vec<CandidatePlace>),
    Failed(LookupError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Searching,
}

/// A point-in-time copy of the state the presentation layer renders.
#[derive(Debug, Clone)]
pub(crate) struct LookupView {
    pub phase: Phase,
    pub error: Option<LookupError>,
    pub candidates: Vec<CandidatePlace>,
    pub results: ResultList,
}

#[derive(Debug, Default)]
struct LookupState {
    error: Option<LookupError>,
    candidates: Vec<CandidatePlace>,
    results: ResultList,
}

/// Clears the in-flight flag when a search finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub(crate) struct Lookup<R> {
    resolver: R,
    location: LocationProvider,
    store: JsonFileStore,
    searching: AtomicBool,
    state: Mutex<LookupState>,
}

impl<R: PlaceResolver> Lookup<R> {
    /// Creates an orchestrator seeded with whatever `store` currently holds.
    pub(crate) fn new(resolver: R, location: LocationProvider, store: JsonFileStore) -> Self {
        let results = store.load();
        Self {
            resolver,
            location,
            store,
            searching: AtomicBool::new(false),
            state: Mutex::new(LookupState {
                results,
                ..LookupState::default()
            }),
        }
    }

    /// Runs one lookup for `place_name` and publishes its outcome.
    pub(crate) async fn search(&self, place_name: &str) -> LookupOutcome {
        if self
            .searching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::info!(place_name, "rejected overlapping search");
            return LookupOutcome::Failed(LookupError::SearchInProgress);
        }
        let _in_flight = InFlight(&self.searching);

        {
            let mut state = self.lock();
            state.error = None;
            state.candidates.clear();
        }

        let outcome = self.run(place_name).await;
        self.publish(&outcome);
        outcome
    }

    /// Searches again using the name of the candidate at `index`.
    ///
    /// The candidate list is cleared before the new search starts. Returns
    /// `None` when there is no candidate at `index`.
    pub(crate) async fn select_candidate(&self, index: usize) -> Option<LookupOutcome> {
        if self.is_searching() {
            return Some(LookupOutcome::Failed(LookupError::SearchInProgress));
        }
        let name = {
            let mut state = self.lock();
            let name = state.candidates.get(index).map(|c| c.name.clone());
            if name.is_some() {
                state.candidates.clear();
            }
            name
        }?;
        Some(self.search(&name).await)
    }

    /// Removes every saved result and persists the empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the empty list could not be written. The
    /// in-memory list is empty either way.
    pub(crate) fn clear_results(&self) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.results.clear();
        let saved = self.store.save(&state.results);
        if let Err(e) = &saved {
            tracing::warn!(error = %e, "failed to persist cleared results");
        }
        tracing::info!("cleared all results");
        saved
    }

    /// Reads the location now so a failure can be shown before any search.
    pub(crate) async fn warm_location(&self) {
        // The outcome is cached by the provider and surfaced via `location_error`.
        let _ = self.location.get_location().await;
    }

    /// The location failure, if a read has completed and failed.
    pub(crate) fn location_error(&self) -> Option<String> {
        match self.location.current() {
            Some(Err(e)) => Some(e.to_string()),
            _ => None,
        }
    }

    /// The location, if a read has completed and succeeded.
    pub(crate) fn location(&self) -> Option<GeoCoordinate> {
        match self.location.current() {
            Some(Ok(coordinate)) => Some(*coordinate),
            _ => None,
        }
    }

    pub(crate) fn is_searching(&self) -> bool {
        self.searching.load(Ordering::Acquire)
    }

    pub(crate) fn view(&self) -> LookupView {
        let state = self.lock();
        LookupView {
            phase: if self.is_searching() {
                Phase::Searching
            } else {
                Phase::Idle
            },
            error: state.error.clone(),
            candidates: state.candidates.clone(),
            results: state.results.clone(),
        }
    }

    async fn run(&self, place_name: &str) -> LookupOutcome {
        let location = match self.location.get_location().await {
            Ok(location) => location,
            Err(e) => {
                let reason = e.to_string();
                return LookupOutcome::Failed(LookupError::LocationUnavailable(
                    (!reason.is_empty()).then_some(reason),
                ));
            }
        };

        match self.resolve(place_name, location).await {
            Ok(place) => LookupOutcome::Resolved(place),
            Err(LookupError::IncompletePlaceInfo) => {
                self.disambiguate(place_name, location).await
            }
            Err(e) => LookupOutcome::Failed(e),
        }
    }

    async fn resolve(
        &self,
        place_name: &str,
        location: GeoCoordinate,
    ) -> Result<ResolvedPlace, LookupError> {
        let info = self
            .resolver
            .place_info(place_name, location)
            .await
            .map_err(|e| match e {
                GeminiError::IncompletePlaceInfo => LookupError::IncompletePlaceInfo,
                other => {
                    tracing::warn!(place_name, error = %other, "place info lookup failed");
                    LookupError::PlaceInfoFailed
                }
            })?;

        let map_code = self
            .resolver
            .map_code(&info.address)
            .await
            .map_err(|e| {
                tracing::warn!(address = %info.address, error = %e, "map code lookup failed");
                LookupError::CodeLookupFailed
            })?;

        Ok(ResolvedPlace::new(
            place_name,
            &info.phone_number,
            &info.address,
            &map_code,
        ))
    }

    async fn disambiguate(&self, place_name: &str, location: GeoCoordinate) -> LookupOutcome {
        match self.resolver.candidates(place_name, location).await {
            Ok(candidates) if candidates.is_empty() => {
                LookupOutcome::Failed(LookupError::NoCandidatesFound)
            }
            Ok(candidates) => LookupOutcome::Ambiguous(candidates),
            Err(e) => {
                tracing::warn!(place_name, error = %e, "candidate lookup failed");
                LookupOutcome::Failed(LookupError::AmbiguityLookupFailed)
            }
        }
    }

    fn publish(&self, outcome: &LookupOutcome) {
        let mut state = self.lock();
        match outcome {
            LookupOutcome::Resolved(place) => {
                tracing::info!(
                    place_name = %place.place_name,
                    map_code = %place.map_code,
                    "place resolved"
                );
                state.results.push_front(place.clone());
                if let Err(e) = self.store.save(&state.results) {
                    tracing::warn!(error = %e, "failed to persist results");
                }
            }
            LookupOutcome::Ambiguous(candidates) => {
                tracing::info!(count = candidates.len(), "place name is ambiguous");
                state.candidates.clone_from(candidates);
            }
            LookupOutcome::Failed(error) => {
                state.error = Some(error.clone());
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, LookupState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
