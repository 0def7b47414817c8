//! Load/display cycle of the campaign listing screen.
//!
//! The controller owns the [`ScreenState`] and at most one outstanding fetch.
//! All methods run on the UI thread; fetches run on the tokio runtime and their
//! results are picked up by [`ScreenController::poll`].
//!
//! ```text
//!            on_became_visible / on_refresh_requested
//!                          │
//!                          ▼
//!   ┌──────────── Loading ◄────────────── on_retry_requested ──┐
//!   │                │                                          │
//!   │ succeeded      │ failed with a retryable code             │
//!   ▼                ▼                                          │
//! Content          Failed ─────────────────────────────────────┘
//! ```
//!
//! Every failure is recorded in the diagnostic log. A failure without a
//! retryable code changes nothing else; the screen keeps showing whatever it
//! showed before.

use crate::campaign::CampaignList;
use crate::diagnostics::DiagnosticLog;
use crate::error::{ErrorClass, FetchError};
use crate::presentation::{DisplaySurface, PresentationSwitch, RetryHandle, RetrySignal, ScreenState};
use crate::services::{CampaignSource, FetchHandle, FetchId};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Controller for a single listing screen instance
pub struct ScreenController<S: DisplaySurface> {
    state: ScreenState,
    surface: S,
    switch: PresentationSwitch,
    source: Arc<dyn CampaignSource>,
    runtime: Handle,
    in_flight: Option<FetchHandle>,
    last_fetch_id: u64,
    retry_handle: RetryHandle,
    retry_signals: mpsc::UnboundedReceiver<RetrySignal>,
    diagnostics: DiagnosticLog,
    torn_down: bool,
}

impl<S: DisplaySurface> ScreenController<S> {
    pub fn new(
        source: Arc<dyn CampaignSource>,
        surface: S,
        runtime: Handle,
        switch: PresentationSwitch,
    ) -> Self {
        let (retry_handle, retry_signals) = RetryHandle::channel();
        Self {
            state: ScreenState::Loading,
            surface,
            switch,
            source,
            runtime,
            in_flight: None,
            last_fetch_id: 0,
            retry_handle,
            retry_signals,
            diagnostics: DiagnosticLog::new(),
            torn_down: false,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Identity of the outstanding fetch, if any
    pub fn in_flight(&self) -> Option<FetchId> {
        self.in_flight.as_ref().map(FetchHandle::id)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Handle the error renderer uses to request a retry
    pub fn retry_handle(&self) -> RetryHandle {
        self.retry_handle.clone()
    }

    /// The screen appeared. Starts a load unless content is already shown.
    pub fn on_became_visible(&mut self) {
        if self.torn_down {
            debug!("Ignoring visibility on a torn down screen");
            return;
        }
        if matches!(self.state, ScreenState::Content(_)) {
            debug!("Content already displayed, not reloading");
            return;
        }
        if let Some(id) = self.in_flight() {
            debug!("Fetch {} already in flight, not starting another", id);
            return;
        }
        self.begin_load();
    }

    /// A fetch finished with a campaign list
    pub fn on_fetch_succeeded(&mut self, id: FetchId, campaigns: CampaignList) {
        if !self.take_if_current(id) {
            return;
        }

        info!("Fetch {} returned {} campaigns", id, campaigns.len());
        self.transition(ScreenState::Content(campaigns));
    }

    /// A fetch finished with an error
    pub fn on_fetch_failed(&mut self, id: FetchId, error: FetchError) {
        if !self.take_if_current(id) {
            return;
        }

        self.diagnostics
            .record(format!("Error recorded :: {}", error));

        match ErrorClass::classify(&error) {
            Some(class) => {
                info!("Fetch {} failed with retryable error ({:?})", id, class);
                self.transition(ScreenState::Failed(class));
            }
            None => debug!(
                "Fetch {} failed without a retryable code, keeping {}",
                id,
                self.state.name()
            ),
        }
    }

    /// The user asked to retry. Only valid on the error screen.
    pub fn on_retry_requested(&mut self) {
        if self.torn_down {
            return;
        }
        if !matches!(self.state, ScreenState::Failed(_)) {
            debug!("Retry requested while {}, ignoring", self.state.name());
            return;
        }
        info!("Retrying campaign fetch");
        self.begin_load();
    }

    /// The user asked for a fresh copy of the list.
    ///
    /// Works from any state; an outstanding fetch is abandoned and its result
    /// will never be applied.
    pub fn on_refresh_requested(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(stale) = self.in_flight.take() {
            debug!("Abandoning fetch {} for refresh", stale.id());
        }
        info!("Refreshing campaigns");
        self.begin_load();
    }

    /// Deliver pending retry signals and a finished fetch, if any.
    ///
    /// Call from the UI loop on every tick.
    pub fn poll(&mut self) {
        while let Ok(RetrySignal) = self.retry_signals.try_recv() {
            self.on_retry_requested();
        }

        let Some(handle) = self.in_flight.as_mut() else {
            return;
        };
        let id = handle.id();
        match handle.try_recv() {
            None => {}
            Some(Ok(campaigns)) => self.on_fetch_succeeded(id, campaigns),
            Some(Err(error)) => self.on_fetch_failed(id, error),
        }
    }

    /// The screen is going away. The outstanding fetch is cancelled and any
    /// later completion or retry is ignored.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            debug!("Cancelling fetch {} on teardown", handle.id());
        }
        while self.retry_signals.try_recv().is_ok() {}
        self.torn_down = true;
    }

    fn begin_load(&mut self) {
        self.transition(ScreenState::Loading);

        self.last_fetch_id += 1;
        let id = FetchId(self.last_fetch_id);
        info!("Starting campaign fetch {}", id);
        self.in_flight = Some(FetchHandle::spawn(&self.runtime, id, self.source.as_ref()));
    }

    /// Clear the outstanding fetch if `id` is it. Anything else is stale.
    fn take_if_current(&mut self, id: FetchId) -> bool {
        if self.torn_down {
            debug!("Discarding completion of fetch {} after teardown", id);
            return false;
        }
        match self.in_flight() {
            Some(current) if current == id => {
                self.in_flight = None;
                true
            }
            current => {
                debug!(
                    "Discarding stale completion of fetch {} (outstanding: {:?})",
                    id, current
                );
                false
            }
        }
    }

    fn transition(&mut self, state: ScreenState) {
        debug!("Screen state {} -> {}", self.state.name(), state.name());
        self.state = state;
        self.switch
            .apply(&self.state, &mut self.surface, &self.retry_handle);
    }
}
