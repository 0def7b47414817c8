//! Campaign data source and in-flight fetch tracking.
//!
//! A [`CampaignSource`] produces a future for the campaign list. The listing
//! controller spawns that future on the tokio runtime via [`FetchHandle::spawn`]
//! and polls the handle from the UI loop, so completions are always handled on
//! the UI thread.

use crate::campaign::{CampaignList, CampaignListResponse};
use crate::error::FetchError;
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Outcome of a single campaign fetch
pub type FetchResult = std::result::Result<CampaignList, FetchError>;

/// Asynchronous provider of the campaign list
pub trait CampaignSource: Send + Sync {
    /// Start fetching the campaign list.
    ///
    /// The returned future must not borrow from `self`; it is spawned onto the
    /// runtime and may outlive the call.
    fn fetch_campaigns(&self) -> BoxFuture<'static, FetchResult>;
}

/// Campaign source backed by an HTTP JSON endpoint
pub struct HttpCampaignSource {
    http_client: Client,
    endpoint: String,
}

impl HttpCampaignSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("campaign-browser/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CampaignSource for HttpCampaignSource {
    fn fetch_campaigns(&self) -> BoxFuture<'static, FetchResult> {
        let client = self.http_client.clone();
        let url = self.endpoint.clone();

        async move {
            info!("Fetching campaigns from {}", url);

            let response = client
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .await?;

            let status = response.status();
            debug!("Campaign listing status: {}", status);
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body: CampaignListResponse = response.json().await?;
            info!("Received {} campaigns", body.campaigns.len());
            Ok(body.campaigns)
        }
        .boxed()
    }
}

/// Identity of a fetch issued by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchId(pub u64);

impl fmt::Display for FetchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for polling an outstanding fetch.
///
/// Dropping the handle aborts the task; its result is never observed.
pub struct FetchHandle {
    id: FetchId,
    receiver: oneshot::Receiver<FetchResult>,
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Spawn a fetch from `source` on `runtime`
    pub fn spawn(runtime: &Handle, id: FetchId, source: &dyn CampaignSource) -> Self {
        let (sender, receiver) = oneshot::channel();
        let fetch = source.fetch_campaigns();

        let task = runtime.spawn(async move {
            let result = fetch.await;
            let _ = sender.send(result);
        });

        Self { id, receiver, task }
    }

    pub fn id(&self) -> FetchId {
        self.id
    }

    /// Try to receive the result without blocking
    pub fn try_recv(&mut self) -> Option<FetchResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(FetchError::Other(
                "Fetch task ended without a result".to_string(),
            ))),
        }
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl fmt::Debug for FetchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchHandle")
            .field("id", &self.id)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}
