//! Campaign data model.
//!
//! Campaigns are produced by a [`CampaignSource`](crate::services::CampaignSource)
//! and are read-only from the point of view of the listing screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a campaign's mood image (usually an URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single promotional item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign name (rendered as the item title)
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Mood image shown above the name
    #[serde(alias = "image")]
    pub mood_image: ImageRef,
}

impl Campaign {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mood_image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mood_image: ImageRef::new(mood_image),
        }
    }
}

/// Campaigns in display order. Duplicates are allowed.
pub type CampaignList = Vec<Campaign>;

/// Body returned by the campaign listing endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct CampaignListResponse {
    pub campaigns: CampaignList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing_keeps_order() {
        let body = r#"{
            "campaigns": [
                {"name": "Spring", "description": "Fresh picks", "mood_image": "https://img/spring.jpg"},
                {"name": "Summer", "description": "Beach time", "image": "https://img/summer.jpg"},
                {"name": "Spring", "mood_image": "https://img/spring.jpg"}
            ]
        }"#;

        let response: CampaignListResponse = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = response.campaigns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Spring", "Summer", "Spring"]);
        assert_eq!(response.campaigns[1].mood_image.as_str(), "https://img/summer.jpg");
        assert!(response.campaigns[2].description.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        let body = r#"{"campaigns": [{"description": "x", "mood_image": "y"}]}"#;
        assert!(serde_json::from_str::<CampaignListResponse>(body).is_err());
    }
}
