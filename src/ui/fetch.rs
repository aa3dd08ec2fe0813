//! Generation-counted background fetches.
//!
//! Each view section owns one `FetchSlot` per request it issues. Starting a
//! new fetch bumps the slot's generation; a response is applied only if its
//! generation still matches, so a slow response from a superseded request
//! (say, the user changed symbol mid-flight) can never overwrite fresher
//! data. Every completed fetch lands in exactly one of Ready/Failed — there
//! is no silent path.

use poll_promise::Promise;

use crate::api::ApiError;

/// Visible state of one asynchronous request.
#[derive(Debug, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

pub struct FetchSlot<T: Send + 'static> {
    generation: u64,
    promise: Option<Promise<(u64, Result<T, ApiError>)>>,
    state: FetchState<T>,
}

impl<T: Send + 'static> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            promise: None,
            state: FetchState::Idle,
        }
    }
}

impl<T: Send + 'static> FetchSlot<T> {
    /// Start a new fetch on a worker thread, superseding any in-flight one.
    /// The previous promise is dropped; even if its thread still completes,
    /// the generation check in `apply` discards the result.
    pub fn begin(&mut self, fetch: impl FnOnce() -> Result<T, ApiError> + Send + 'static) {
        self.generation += 1;
        let generation = self.generation;
        self.state = FetchState::Loading;
        self.promise = Some(Promise::spawn_thread("api_fetch", move || {
            (generation, fetch())
        }));
    }

    /// Poll the in-flight promise. Returns true when a result was applied
    /// this call (the caller then re-derives charts from the new state).
    pub fn poll(&mut self) -> bool {
        let Some(promise) = self.promise.take() else {
            return false;
        };

        match promise.try_take() {
            Ok((generation, result)) => {
                self.apply(generation, result);
                true
            }
            Err(promise) => {
                self.promise = Some(promise);
                false
            }
        }
    }

    /// Install a completed result unless it belongs to a superseded request.
    fn apply(&mut self, generation: u64, result: Result<T, ApiError>) {
        if generation != self.generation {
            log::debug!(
                "discarding stale fetch result (generation {} != {})",
                generation,
                self.generation
            );
            return;
        }

        self.state = match result {
            Ok(value) => FetchState::Ready(value),
            Err(error) => {
                log::warn!("fetch failed: {}", error);
                FetchState::Failed(error)
            }
        };
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn in_flight(&self) -> bool {
        self.promise.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, FetchState::Idle)
    }

    #[cfg(test)]
    fn force_apply(&mut self, generation: u64, result: Result<T, ApiError>) {
        self.apply(generation, result);
    }

    #[cfg(test)]
    fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn current_generation_result_is_applied() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        slot.begin(|| Ok(7));
        let generation = slot.generation();
        slot.force_apply(generation, Ok(42));
        assert!(matches!(slot.state(), FetchState::Ready(42)));
    }

    #[test]
    fn stale_generation_result_is_discarded() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        slot.begin(|| Ok(1));
        let stale = slot.generation();
        // A newer request supersedes the first one
        slot.begin(|| Ok(2));
        slot.force_apply(stale, Ok(99));
        assert!(
            matches!(slot.state(), FetchState::Loading),
            "stale result must not land"
        );
    }

    #[test]
    fn failure_is_a_visible_state() {
        let mut slot: FetchSlot<u32> = FetchSlot::default();
        slot.begin(|| Err(ApiError::Timeout));
        let generation = slot.generation();
        slot.force_apply(generation, Err(ApiError::Timeout));
        assert!(matches!(slot.state(), FetchState::Failed(ApiError::Timeout)));
    }

    #[test]
    fn poll_drains_a_spawned_fetch() {
        let mut slot: FetchSlot<&'static str> = FetchSlot::default();
        slot.begin(|| Ok("done"));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !slot.poll() {
            assert!(Instant::now() < deadline, "fetch never resolved");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(matches!(slot.state(), FetchState::Ready("done")));
        assert!(!slot.in_flight());
    }
}
