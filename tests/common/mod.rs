//! Shared test utilities for the screen lifecycle integration tests.
//!
//! Provides a scripted [`CampaignSource`], a surface that records every
//! installed renderer, and a helper that polls a controller until it settles.

#![allow(dead_code)]

use campaign_browser::campaign::{Campaign, CampaignList};
use campaign_browser::controller::ScreenController;
use campaign_browser::error::FetchError;
use campaign_browser::presentation::{DisplaySurface, PresentationSwitch, Renderer, ScreenState};
use campaign_browser::services::{CampaignSource, FetchResult};
use futures::future::BoxFuture;
use futures::FutureExt;
use ratatui::layout::Size;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

/// One scripted answer of a [`ScriptedSource`]
pub enum Step {
    /// Resolve immediately
    Ready(FetchResult),
    /// Resolve when the test sends on the paired channel
    Gated(oneshot::Receiver<FetchResult>),
}

/// Campaign source that answers fetches from a queue.
///
/// Once the queue is empty every further fetch stays pending forever.
#[derive(Default)]
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ready(&self, result: FetchResult) {
        self.lock().push_back(Step::Ready(result));
    }

    /// Queue a fetch the test completes by hand
    pub fn push_gated(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.lock().push_back(Step::Gated(rx));
        tx
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Step>> {
        self.steps.lock().unwrap()
    }
}

impl CampaignSource for ScriptedSource {
    fn fetch_campaigns(&self) -> BoxFuture<'static, FetchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.lock().pop_front() {
            Some(Step::Ready(result)) => async move { result }.boxed(),
            Some(Step::Gated(rx)) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::Other("gate dropped".to_string())))
            }
            .boxed(),
            None => futures::future::pending().boxed(),
        }
    }
}

/// Surface that keeps every renderer it was handed
#[derive(Debug)]
pub struct RecordingSurface {
    pub installs: Vec<Renderer>,
    pub size: Size,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            installs: Vec::new(),
            size: Size::new(80, 40),
        }
    }

    pub fn current(&self) -> Option<&Renderer> {
        self.installs.last()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.installs.iter().map(Renderer::kind).collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn install(&mut self, renderer: Renderer) {
        self.installs.push(renderer);
    }

    fn size(&self) -> Size {
        self.size
    }
}

pub type TestController = ScreenController<RecordingSurface>;

/// Controller wired to a scripted source and a recording surface
pub fn controller(runtime: &Runtime, source: Arc<ScriptedSource>) -> TestController {
    ScreenController::new(
        source,
        RecordingSurface::new(),
        runtime.handle().clone(),
        PresentationSwitch::default(),
    )
}

/// Poll until `done` holds for the controller, failing after five seconds
pub fn poll_until(controller: &mut TestController, done: impl Fn(&TestController) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(controller) {
        assert!(
            Instant::now() < deadline,
            "controller never settled, state is {}",
            controller.state().name()
        );
        controller.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Poll until the outstanding fetch has been consumed
pub fn settle(controller: &mut TestController) {
    poll_until(controller, |c| c.in_flight().is_none());
}

/// Give background tasks a moment, then poll once
pub fn poll_after_pause(controller: &mut TestController) {
    std::thread::sleep(Duration::from_millis(50));
    controller.poll();
}

pub fn campaigns(names: &[&str]) -> CampaignList {
    names
        .iter()
        .map(|name| {
            Campaign::new(
                *name,
                format!("{} description", name),
                format!("https://img.test/{}.jpg", name.to_lowercase()),
            )
        })
        .collect()
}

pub fn is_loading(controller: &TestController) -> bool {
    matches!(controller.state(), ScreenState::Loading)
}
