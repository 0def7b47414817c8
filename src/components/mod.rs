// Shared render helpers used by the screens

pub mod footer;
pub mod header;
pub mod listing_view;
pub mod message_box;

pub use footer::Footer;
pub use header::Header;
pub use listing_view::CampaignListingView;
pub use message_box::MessageBox;
