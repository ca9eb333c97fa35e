//! Scriptable in-process translator for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::{TranslateError, TranslateResult, Translator};
use crate::models::{CategoryConfig, Language, Spot, TranslatedSnapshot};

/// Prefixes every translated field with the target tag, e.g. `[en] Bares`.
#[derive(Default)]
pub struct FakeTranslator {
    calls: AtomicUsize,
    last_spot_count: AtomicUsize,
    failing: AtomicBool,
    held: Mutex<HashMap<Language, oneshot::Receiver<()>>>,
    started: Mutex<Option<mpsc::UnboundedSender<Language>>>,
}

impl FakeTranslator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_spot_count(&self) -> usize {
        self.last_spot_count.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make the next call for `lang` wait until the returned sender fires.
    pub fn hold(&self, lang: Language) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(lang, rx);
        tx
    }

    /// Receive the language of every call as it starts.
    pub fn watch_started(&self) -> mpsc::UnboundedReceiver<Language> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.started.lock().unwrap() = Some(tx);
        rx
    }
}

pub fn tag(lang: Language, text: &str) -> String {
    format!("[{}] {}", lang, text)
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        spots: &[Spot],
        categories: &[CategoryConfig],
        target: Language,
    ) -> TranslateResult<TranslatedSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_spot_count.store(spots.len(), Ordering::SeqCst);
        if let Some(tx) = self.started.lock().unwrap().as_ref() {
            let _ = tx.send(target);
        }

        let held = self.held.lock().unwrap().remove(&target);
        if let Some(rx) = held {
            let _ = rx.await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(TranslateError::EmptyResponse);
        }

        Ok(TranslatedSnapshot {
            spots: spots
                .iter()
                .map(|s| Spot {
                    name: tag(target, &s.name),
                    description: tag(target, &s.description),
                    category: tag(target, &s.category),
                    ..s.clone()
                })
                .collect(),
            categories: categories
                .iter()
                .map(|c| CategoryConfig {
                    name: tag(target, &c.name),
                    ..c.clone()
                })
                .collect(),
        })
    }

    async fn advise(&self, prompt: &str) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(TranslateError::EmptyResponse);
        }
        Ok(format!("Dica: {}", prompt))
    }
}
