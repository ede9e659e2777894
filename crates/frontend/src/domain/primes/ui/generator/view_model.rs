use leptos::prelude::*;

use super::model;
use crate::domain::primes::display::{display, PrimesDisplay};
use crate::domain::primes::state::{update, FetchPrimes, PrimesEvent, PrimesState};
use crate::shared::api_utils::api_base;

/// ViewModel for the primes generator form
#[derive(Clone, Copy)]
pub struct PrimesGeneratorViewModel {
    pub state: RwSignal<PrimesState>,
}

impl PrimesGeneratorViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PrimesState::default()),
        }
    }

    pub fn generation_limit(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.generation_limit.clone()))
    }

    pub fn display(&self) -> Memo<PrimesDisplay> {
        let state = self.state;
        Memo::new(move |_| state.with(display))
    }

    pub fn set_generation_limit(&self, value: String) {
        log::debug!("Generation limit changed: {}", value);
        self.dispatch(PrimesEvent::LimitChanged(value));
    }

    /// Validate the entered limit and, if it is an integer, ask the service
    pub fn generate_command(&self) {
        let limit = self.state.with_untracked(|s| s.generation_limit.clone());
        log::debug!("Submitting generation limit: {}", limit);

        if !self.dispatch(PrimesEvent::Submitted) {
            log::warn!("Rejected generation limit {:?}", limit);
        }
    }

    /// Apply an event; returns whether a request was started
    fn dispatch(&self, event: PrimesEvent) -> bool {
        let mut effect = None;
        self.state.update(|current| {
            let (next, fetch) = update(std::mem::take(current), event);
            *current = next;
            effect = fetch;
        });

        match effect {
            Some(fetch) => {
                self.run_fetch(fetch);
                true
            }
            None => false,
        }
    }

    fn run_fetch(&self, fetch: FetchPrimes) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match model::primes_url(&api_base(), fetch.limit) {
                Ok(url) => {
                    log::info!("Requesting primes: {}", url);
                    model::fetch_primes(&url).await
                }
                Err(e) => Err(e),
            };

            if let Err(e) = &outcome {
                log::error!("Primes request failed: {}", e);
            }
            if fetch.submission != vm.state.with_untracked(|s| s.latest_submission) {
                log::debug!("Dropping reply to superseded submission {:?}", fetch.submission);
            }

            vm.dispatch(PrimesEvent::ReplyReceived {
                submission: fetch.submission,
                outcome,
            });
        });
    }
}

impl Default for PrimesGeneratorViewModel {
    fn default() -> Self {
        Self::new()
    }
}
