//! Application services layer.
//!
//! Services encapsulate work that happens away from the UI thread. Screens
//! start it through a handle and poll the handle from the event loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, Components)                     │
//! └─────────────────────┬───────────────────────────┘
//!                       │ FetchHandle::spawn / try_recv
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  CampaignSource ── HttpCampaignSource           │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//!                 tokio runtime + reqwest
//! ```

pub mod campaign_service;

pub use campaign_service::{CampaignSource, FetchHandle, FetchId, FetchResult, HttpCampaignSource};
