//! Spot model matching the frontend Spot interface.

use serde::{Deserialize, Serialize};

/// A curated point of interest shown to end users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Category name. Not checked against the category list.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Image URLs or inline `data:` URIs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: f64,
    /// Neighborhood name. Not checked against the neighborhood list.
    pub neighborhood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Request body for creating a new spot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpot {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub neighborhood: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub link: Option<String>,
}

pub fn default_rating() -> f64 {
    5.0
}

impl NewSpot {
    /// Attach an id, producing a stored spot.
    pub fn into_spot(self, id: String) -> Spot {
        Spot {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            address: self.address.filter(|a| !a.trim().is_empty()),
            images: self.images,
            rating: self.rating,
            neighborhood: self.neighborhood,
            link: self.link.filter(|l| !l.trim().is_empty()),
        }
    }
}
