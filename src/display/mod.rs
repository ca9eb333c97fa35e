//! Display projection.
//!
//! Turns the home-language content into what clients render for a language:
//! the content itself for the home language, otherwise a translated snapshot from
//! the cache or from the translator. Translator failures fall back to the
//! untranslated content.
//!
//! The projector also owns the shared view (selected language and filters). Each
//! language switch takes a request token, and a completed projection is applied
//! to the view only if no newer switch has started since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::filter::{is_all, SpotFilter, ALL};
use crate::models::{CategoryConfig, CategoryView, Content, Language, Spot, TranslatedSnapshot};
use crate::store::ContentStore;
use crate::translate::{TranslationCache, Translator};

/// Spots and categories as rendered in one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub language: Language,
    pub spots: Vec<Spot>,
    pub categories: Vec<CategoryConfig>,
    /// True when a translation was requested but the home content is shown instead.
    pub fallback: bool,
    pub source_revision: i64,
}

impl Display {
    fn home(content: &Content, language: Language, fallback: bool) -> Self {
        Self {
            language,
            spots: content.spots.clone(),
            categories: content.categories.clone(),
            fallback,
            source_revision: content.revision_id,
        }
    }

    fn translated(content: &Content, language: Language, snapshot: TranslatedSnapshot) -> Self {
        Self {
            language,
            spots: snapshot.spots,
            categories: snapshot.categories,
            fallback: false,
            source_revision: content.revision_id,
        }
    }
}

/// Patch for the shared view. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUpdate {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// What a client renders right now.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Language most recently selected.
    pub language: Language,
    /// Language of the data below. Differs from `language` while a switch is in flight.
    pub display_language: Language,
    pub loading: bool,
    pub fallback: bool,
    pub category: String,
    pub neighborhood: String,
    pub query: String,
    pub categories: Vec<CategoryView>,
    pub spots: Vec<Spot>,
    pub result_count: usize,
}

struct ViewState {
    language: Language,
    filter: SpotFilter,
    loading: bool,
    display: Display,
}

impl ViewState {
    fn snapshot(&self) -> ViewSnapshot {
        let spots = self.filter.apply(&self.display.spots);
        ViewSnapshot {
            language: self.language,
            display_language: self.display.language,
            loading: self.loading,
            fallback: self.display.fallback,
            category: selection_label(self.filter.category.as_deref()),
            neighborhood: selection_label(self.filter.neighborhood.as_deref()),
            query: self.filter.query.clone(),
            categories: self
                .display
                .categories
                .iter()
                .cloned()
                .map(CategoryView::from)
                .collect(),
            result_count: spots.len(),
            spots,
        }
    }
}

fn selection_label(selection: Option<&str>) -> String {
    match selection {
        Some(value) if !is_all(Some(value)) => value.to_string(),
        _ => ALL.to_string(),
    }
}

/// Carry a selected category across a language switch by its position.
/// Returns `None` ("all") when the position no longer resolves.
fn remap_category(
    selected: Option<&str>,
    previous: &[CategoryConfig],
    source: &[CategoryConfig],
    next: &[CategoryConfig],
) -> Option<String> {
    let selected = selected.filter(|s| !is_all(Some(s)))?;
    let index = previous
        .iter()
        .position(|c| c.name == selected)
        .or_else(|| source.iter().position(|c| c.name == selected))?;
    next.get(index).map(|c| c.name.clone())
}

pub struct DisplayProjector {
    translator: Arc<dyn Translator>,
    cache: Mutex<TranslationCache>,
    view: RwLock<ViewState>,
    latest_token: AtomicU64,
}

impl DisplayProjector {
    /// Projector whose view starts in the home language over `content`.
    pub fn new(translator: Arc<dyn Translator>, content: &Content) -> Self {
        Self {
            translator,
            cache: Mutex::new(TranslationCache::new()),
            view: RwLock::new(ViewState {
                language: Language::HOME,
                filter: SpotFilter::default(),
                loading: false,
                display: Display::home(content, Language::HOME, false),
            }),
            latest_token: AtomicU64::new(0),
        }
    }

    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    /// Drop every cached translation. Called at each spot/category mutation site.
    pub async fn invalidate(&self) {
        self.cache.lock().await.invalidate();
    }

    pub async fn cached_languages(&self) -> usize {
        self.cache.lock().await.len()
    }

    async fn cached(&self, language: Language, spot_count: usize) -> Option<TranslatedSnapshot> {
        self.cache
            .lock()
            .await
            .lookup(language, spot_count)
            .cloned()
    }

    /// Display data for `language` over `content`.
    ///
    /// Home language returns the content verbatim without calling the translator.
    /// Otherwise a cache hit is returned as-is and a miss calls the translator once;
    /// failures are logged and yield the home content with `fallback` set.
    pub async fn project(&self, content: &Content, language: Language) -> Display {
        if language.is_home() {
            return Display::home(content, language, false);
        }

        let spot_count = content.spots.len();
        if let Some(snapshot) = self.cached(language, spot_count).await {
            tracing::debug!(%language, "Translation cache hit");
            return Display::translated(content, language, snapshot);
        }

        let generation = self.cache.lock().await.generation();
        tracing::info!(%language, spots = spot_count, "Requesting translation");

        match self
            .translator
            .translate(&content.spots, &content.categories, language)
            .await
        {
            Ok(snapshot) => {
                self.cache
                    .lock()
                    .await
                    .insert(language, snapshot.clone(), spot_count, generation);
                Display::translated(content, language, snapshot)
            }
            Err(e) => {
                tracing::error!(%language, "Translation failed, showing original content: {}", e);
                Display::home(content, language, true)
            }
        }
    }

    /// Current view, re-projected first if the content changed since it was built.
    pub async fn view(&self, store: &ContentStore) -> ViewSnapshot {
        let revision_id = store.revision_id().await;
        let pending = {
            let mut view = self.view.write().await;
            if view.display.source_revision != revision_id {
                let language = view.language;
                Some((self.begin_switch(&mut view, language), language))
            } else {
                None
            }
        };
        if let Some((token, language)) = pending {
            self.switch(store, language, token).await;
        }
        self.view.read().await.snapshot()
    }

    /// Apply filter changes, then switch language if requested or if the
    /// content changed since the view was built.
    pub async fn update_view(&self, store: &ContentStore, update: ViewUpdate) -> ViewSnapshot {
        let revision_id = store.revision_id().await;
        let pending = {
            let mut view = self.view.write().await;
            if let Some(category) = update.category {
                view.filter.category = Some(category);
            }
            if let Some(neighborhood) = update.neighborhood {
                view.filter.neighborhood = Some(neighborhood);
            }
            if let Some(query) = update.query {
                view.filter.query = query;
            }

            let target = update.language.unwrap_or(view.language);
            if target != view.language || view.display.source_revision != revision_id {
                Some((self.begin_switch(&mut view, target), target))
            } else {
                None
            }
        };

        if let Some((token, language)) = pending {
            self.switch(store, language, token).await;
        }
        self.view.read().await.snapshot()
    }

    /// Record `language` as selected and take the token that claims the next
    /// display. Must run under the same view lock that decided to switch.
    fn begin_switch(&self, view: &mut ViewState, language: Language) -> u64 {
        view.language = language;
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }

    /// Project `language` and apply the result to the view unless superseded.
    async fn switch(&self, store: &ContentStore, language: Language, token: u64) {
        let content = store.snapshot().await;

        let needs_translator =
            !language.is_home() && self.cached(language, content.spots.len()).await.is_none();
        {
            let mut view = self.view.write().await;
            if self.is_latest(token) {
                view.loading = needs_translator;
            }
        }

        let display = self.project(&content, language).await;

        let mut view = self.view.write().await;
        if !self.is_latest(token) {
            tracing::debug!(%language, token, "Discarding superseded projection");
            return;
        }

        if !is_all(view.filter.category.as_deref()) {
            let selected = if view.display.language != language {
                remap_category(
                    view.filter.category.as_deref(),
                    &view.display.categories,
                    &content.categories,
                    &display.categories,
                )
            } else {
                view.filter
                    .category
                    .clone()
                    .filter(|name| display.categories.iter().any(|c| &c.name == name))
            };
            view.filter.category = Some(selected.unwrap_or_else(|| ALL.to_string()));
        }
        view.display = display;
        view.loading = false;
    }
}
