//! In-memory content store.
//!
//! Holds the canonical home-language spots, categories, neighborhoods and menu
//! labels for the process lifetime. Every mutation bumps the revision.

mod seed;

pub use seed::*;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::images::MAX_IMAGES;
use crate::models::{CategoryConfig, Content, MenuLabels, NewSpot, Spot, UpdateMenuLabelsRequest};

struct ContentState {
    revision_id: i64,
    spots: Vec<Spot>,
    categories: Vec<CategoryConfig>,
    neighborhoods: Vec<String>,
    menu_labels: MenuLabels,
    last_id_millis: i64,
}

impl ContentState {
    fn bump(&mut self) -> i64 {
        self.revision_id += 1;
        self.revision_id
    }

    /// Timestamp-derived id, nudged forward when two spots land in the same millisecond.
    fn next_spot_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis.to_string()
    }
}

/// Source of truth for directory content.
pub struct ContentStore {
    state: RwLock<ContentState>,
}

impl ContentStore {
    pub fn new(
        spots: Vec<Spot>,
        categories: Vec<CategoryConfig>,
        neighborhoods: Vec<String>,
    ) -> Self {
        Self {
            state: RwLock::new(ContentState {
                revision_id: 0,
                spots,
                categories,
                neighborhoods,
                menu_labels: MenuLabels::default(),
                last_id_millis: 0,
            }),
        }
    }

    /// Store populated with the featured Rio content.
    pub fn seeded() -> Self {
        Self::new(featured_spots(), initial_categories(), initial_neighborhoods())
    }

    pub async fn revision_id(&self) -> i64 {
        self.state.read().await.revision_id
    }

    /// Clone of all content at the current revision.
    pub async fn snapshot(&self) -> Content {
        let state = self.state.read().await;
        Content {
            revision_id: state.revision_id,
            spots: state.spots.clone(),
            categories: state.categories.clone(),
            neighborhoods: state.neighborhoods.clone(),
            menu_labels: state.menu_labels.clone(),
        }
    }

    pub async fn spot_count(&self) -> usize {
        self.state.read().await.spots.len()
    }

    pub async fn neighborhoods(&self) -> Vec<String> {
        self.state.read().await.neighborhoods.clone()
    }

    pub async fn menu_labels(&self) -> MenuLabels {
        self.state.read().await.menu_labels.clone()
    }

    // ==================== SPOT OPERATIONS ====================

    /// Validate and prepend a new spot.
    pub async fn add_spot(&self, request: NewSpot) -> Result<Spot, AppError> {
        if request.images.is_empty() {
            return Err(AppError::Validation(
                "Adicione pelo menos uma imagem.".to_string(),
            ));
        }
        if request.images.len() > MAX_IMAGES {
            return Err(AppError::Validation(format!(
                "Limite de {} imagens atingido.",
                MAX_IMAGES
            )));
        }
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Nome é obrigatório.".to_string()));
        }

        let mut state = self.state.write().await;
        let id = state.next_spot_id();
        let spot = request.into_spot(id);
        state.spots.insert(0, spot.clone());
        state.bump();

        tracing::info!(spot_id = %spot.id, name = %spot.name, "Spot added");
        Ok(spot)
    }

    pub async fn remove_spot(&self, id: &str) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.spots.len();
        state.spots.retain(|s| s.id != id);
        if state.spots.len() == before {
            return Err(AppError::NotFound(format!("Spot {} not found", id)));
        }
        state.bump();

        tracing::info!(spot_id = %id, "Spot removed");
        Ok(())
    }

    // ==================== NEIGHBORHOOD OPERATIONS ====================

    pub async fn add_neighborhood(&self, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Nome do bairro é obrigatório.".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if state.neighborhoods.iter().any(|n| n == name) {
            return Err(AppError::Conflict(format!("Bairro {} já existe.", name)));
        }
        state.neighborhoods.push(name.to_string());
        state.bump();
        Ok(())
    }

    /// Spots referencing the neighborhood keep their value.
    pub async fn remove_neighborhood(&self, name: &str) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.neighborhoods.len();
        state.neighborhoods.retain(|n| n != name);
        if state.neighborhoods.len() == before {
            return Err(AppError::NotFound(format!("Neighborhood {} not found", name)));
        }
        state.bump();
        Ok(())
    }

    // ==================== CATEGORY OPERATIONS ====================

    pub async fn add_category(&self, category: CategoryConfig) -> Result<CategoryConfig, AppError> {
        if category.name.trim().is_empty() || category.icon.trim().is_empty() {
            return Err(AppError::Validation(
                "Nome e ícone da categoria são obrigatórios.".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.name == category.name) {
            return Err(AppError::Conflict(format!(
                "Categoria {} já existe.",
                category.name
            )));
        }
        state.categories.push(category.clone());
        state.bump();

        tracing::info!(category = %category.name, "Category added");
        Ok(category)
    }

    /// Spots referencing the category keep their value.
    pub async fn remove_category(&self, name: &str) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.categories.len();
        state.categories.retain(|c| c.name != name);
        if state.categories.len() == before {
            return Err(AppError::NotFound(format!("Category {} not found", name)));
        }
        state.bump();

        tracing::info!(category = %name, "Category removed");
        Ok(())
    }

    // ==================== MENU LABELS ====================

    pub async fn update_menu_labels(&self, request: UpdateMenuLabelsRequest) -> MenuLabels {
        let mut state = self.state.write().await;
        if let Some(categories) = request.categories {
            state.menu_labels.categories = categories;
        }
        if let Some(neighborhoods) = request.neighborhoods {
            state.menu_labels.neighborhoods = neighborhoods;
        }
        state.bump();
        state.menu_labels.clone()
    }
}
