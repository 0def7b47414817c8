//! Screen controllers for the application.
//!
//! Each screen implements the [`Screen`] trait, owns its state and handles both
//! rendering and events.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    App                        │
//! │   loop {                                      │
//! │     screen.tick()          // async results   │
//! │     screen.render(...)                        │
//! │     screen.handle_event(...) -> ScreenAction  │
//! │   }                                           │
//! └──────────────────────────────────────────────┘
//! ```

pub mod campaign_listing;
pub mod screen_trait;

pub use campaign_listing::CampaignListingScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
