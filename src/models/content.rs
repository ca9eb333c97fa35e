//! Content snapshot models shared by the store and the display layer.

use serde::{Deserialize, Serialize};

use super::{CategoryConfig, Spot};

/// Free-text labels for the two sidebar menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLabels {
    pub categories: String,
    pub neighborhoods: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            categories: "Categorias".to_string(),
            neighborhoods: "Bairros".to_string(),
        }
    }
}

/// Request body for editing menu labels. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuLabelsRequest {
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub neighborhoods: Option<String>,
}

/// Full home-language content at one revision.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub revision_id: i64,
    pub spots: Vec<Spot>,
    pub categories: Vec<CategoryConfig>,
    pub neighborhoods: Vec<String>,
    pub menu_labels: MenuLabels,
}

/// Spots and categories rendered in one language, positionally aligned with the
/// home-language lists they were produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedSnapshot {
    pub spots: Vec<Spot>,
    pub categories: Vec<CategoryConfig>,
}

/// Request body for adding a neighborhood.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNeighborhoodRequest {
    pub name: String,
}
