//! Campaign Browser - a terminal viewer for the campaign listing
//!
//! The library holds the screen controller, the presentation switch and the
//! campaign source so the binary and the integration tests share them.

// Core modules
pub mod app;
pub mod campaign;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod keymap;
pub mod presentation;
pub mod screens;
pub mod services;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use campaign::{Campaign, CampaignList, ImageRef};
pub use config::Config;
pub use controller::ScreenController;
pub use error::{ErrorClass, FetchError};
pub use presentation::{DisplaySurface, PresentationSwitch, Renderer, RetryHandle, ScreenState};
pub use services::{CampaignSource, FetchId, HttpCampaignSource};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
