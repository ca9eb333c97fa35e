//! Spot draft and image acquisition.
//!
//! The admin builds one spot at a time. Images arrive either as pasted URLs or as
//! uploaded files that are inlined as `data:` URIs; both share a five-entry cap.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{default_rating, NewSpot};

/// Most images a single spot may carry.
pub const MAX_IMAGES: usize = 5;

/// Image every new draft starts with.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/seed/rio/800/600";

/// Encode raw image bytes as an inline `data:` URI.
pub fn to_data_uri(bytes: &[u8], mime: &str) -> Result<String, AppError> {
    let mime = mime.split(';').next().unwrap_or_default().trim();
    if !mime.starts_with("image/") {
        return Err(AppError::Validation(format!(
            "Tipo de arquivo não suportado: {}",
            if mime.is_empty() { "desconhecido" } else { mime }
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("Arquivo de imagem vazio.".to_string()));
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Spot under construction in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub neighborhood: String,
    pub address: Option<String>,
    pub rating: f64,
    pub link: Option<String>,
    images: Vec<String>,
}

/// Editable draft fields. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDraftRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Request body for adding an image by URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddImageUrlRequest {
    pub url: String,
}

impl SpotDraft {
    /// Fresh draft preselecting the first category and neighborhood.
    pub fn new(default_category: Option<&str>, default_neighborhood: Option<&str>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: default_category.unwrap_or_default().to_string(),
            neighborhood: default_neighborhood.unwrap_or_default().to_string(),
            address: None,
            rating: default_rating(),
            link: None,
            images: vec![PLACEHOLDER_IMAGE.to_string()],
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    fn ensure_room(&self) -> Result<(), AppError> {
        if self.images.len() >= MAX_IMAGES {
            return Err(AppError::Validation(format!(
                "Limite de {} imagens atingido.",
                MAX_IMAGES
            )));
        }
        Ok(())
    }

    /// Append a pasted image URL.
    pub fn add_url(&mut self, url: &str) -> Result<(), AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::Validation("URL da imagem é obrigatória.".to_string()));
        }
        self.ensure_room()?;
        self.images.push(url.to_string());
        Ok(())
    }

    /// Append an uploaded file as an inline data URI.
    pub fn add_upload(&mut self, bytes: &[u8], mime: &str) -> Result<(), AppError> {
        self.ensure_room()?;
        let uri = to_data_uri(bytes, mime)?;
        self.images.push(uri);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> Result<String, AppError> {
        if index >= self.images.len() {
            return Err(AppError::NotFound(format!("Image {} not found", index)));
        }
        Ok(self.images.remove(index))
    }

    pub fn apply(&mut self, request: UpdateDraftRequest) {
        if let Some(name) = request.name {
            self.name = name;
        }
        if let Some(description) = request.description {
            self.description = description;
        }
        if let Some(category) = request.category {
            self.category = category;
        }
        if let Some(neighborhood) = request.neighborhood {
            self.neighborhood = neighborhood;
        }
        if let Some(address) = request.address {
            self.address = Some(address);
        }
        if let Some(rating) = request.rating {
            self.rating = rating;
        }
        if let Some(link) = request.link {
            self.link = Some(link);
        }
    }

    pub fn to_new_spot(&self) -> NewSpot {
        NewSpot {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            neighborhood: self.neighborhood.clone(),
            address: self.address.clone(),
            images: self.images.clone(),
            rating: self.rating,
            link: self.link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = SpotDraft::new(Some("Restaurantes"), Some("Ipanema"));
        assert_eq!(draft.images(), [PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(draft.rating, 5.0);
        assert_eq!(draft.category, "Restaurantes");
        assert_eq!(draft.neighborhood, "Ipanema");
    }

    #[test]
    fn test_sixth_image_rejected() {
        let mut draft = SpotDraft::new(None, None);
        for i in 0..4 {
            draft.add_url(&format!("https://img/{}", i)).unwrap();
        }
        assert_eq!(draft.images().len(), 5);

        assert!(matches!(
            draft.add_url("https://img/extra"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            draft.add_upload(b"\x89PNG", "image/png"),
            Err(AppError::Validation(_))
        ));
        assert_eq!(draft.images().len(), 5);
    }

    #[test]
    fn test_upload_becomes_data_uri() {
        let mut draft = SpotDraft::new(None, None);
        draft.add_upload(b"abc", "image/png").unwrap();
        assert_eq!(draft.images()[1], "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_upload_rejects_non_image() {
        let mut draft = SpotDraft::new(None, None);
        assert!(draft.add_upload(b"abc", "text/plain").is_err());
        assert!(draft.add_upload(b"", "image/jpeg").is_err());
        assert_eq!(draft.images().len(), 1);
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut draft = SpotDraft::new(None, None);
        assert!(draft.add_url("  ").is_err());
    }

    #[test]
    fn test_remove_by_index() {
        let mut draft = SpotDraft::new(None, None);
        draft.add_url("https://img/a").unwrap();
        draft.add_url("https://img/b").unwrap();

        let removed = draft.remove_image(0).unwrap();
        assert_eq!(removed, PLACEHOLDER_IMAGE);
        assert_eq!(draft.images(), ["https://img/a", "https://img/b"]);
        assert!(matches!(draft.remove_image(5), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_apply_patch() {
        let mut draft = SpotDraft::new(Some("Bares"), Some("Lapa"));
        draft.apply(UpdateDraftRequest {
            name: Some("Bar Brasil".to_string()),
            rating: Some(4.5),
            ..Default::default()
        });

        let spot = draft.to_new_spot();
        assert_eq!(spot.name, "Bar Brasil");
        assert_eq!(spot.rating, 4.5);
        assert_eq!(spot.category, "Bares");
    }
}
