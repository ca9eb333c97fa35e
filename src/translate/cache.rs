//! Per-language cache of translated snapshots.

use std::collections::HashMap;

use crate::models::{Language, TranslatedSnapshot};

#[derive(Debug, Clone)]
struct CachedTranslation {
    snapshot: TranslatedSnapshot,
    source_spot_count: usize,
}

/// Maps a target language to the last snapshot fetched for it.
///
/// Validity is judged only by spot count, so an edit that keeps the count goes
/// unnoticed; mutation sites must call [`TranslationCache::invalidate`].
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<Language, CachedTranslation>,
    generation: u64,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached snapshot for `lang`, if one exists for the current spot count.
    pub fn lookup(&self, lang: Language, current_spot_count: usize) -> Option<&TranslatedSnapshot> {
        self.entries
            .get(&lang)
            .filter(|entry| entry.source_spot_count == current_spot_count)
            .map(|entry| &entry.snapshot)
    }

    /// Generation to hand back to [`TranslationCache::insert`] once a translation
    /// started now completes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a snapshot translated from `source_spot_count` spots.
    /// Returns false when the cache was invalidated after `generation` was taken.
    pub fn insert(
        &mut self,
        lang: Language,
        snapshot: TranslatedSnapshot,
        source_spot_count: usize,
        generation: u64,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(%lang, "Dropping translation started before invalidation");
            return false;
        }
        self.entries.insert(
            lang,
            CachedTranslation {
                snapshot,
                source_spot_count,
            },
        );
        true
    }

    /// Drop every cached language.
    pub fn invalidate(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(languages = self.entries.len(), "Translation cache cleared");
        }
        self.entries.clear();
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{featured_spots, initial_categories};

    fn snapshot() -> TranslatedSnapshot {
        TranslatedSnapshot {
            spots: featured_spots(),
            categories: initial_categories(),
        }
    }

    #[test]
    fn test_hit_requires_matching_count() {
        let mut cache = TranslationCache::new();
        let generation = cache.generation();
        assert!(cache.insert(Language::En, snapshot(), 4, generation));

        assert!(cache.lookup(Language::En, 4).is_some());
        assert!(cache.lookup(Language::En, 5).is_none());
        assert!(cache.lookup(Language::Es, 4).is_none());
    }

    #[test]
    fn test_invalidate_clears_all_languages() {
        let mut cache = TranslationCache::new();
        cache.insert(Language::En, snapshot(), 4, 0);
        cache.insert(Language::Es, snapshot(), 4, 0);
        assert_eq!(cache.len(), 2);

        cache.invalidate();

        assert!(cache.is_empty());
        assert!(cache.lookup(Language::En, 4).is_none());
    }

    #[test]
    fn test_insert_after_invalidation_is_dropped() {
        let mut cache = TranslationCache::new();
        let generation = cache.generation();
        cache.invalidate();

        assert!(!cache.insert(Language::En, snapshot(), 4, generation));
        assert!(cache.is_empty());
    }
}
