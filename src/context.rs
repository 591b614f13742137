use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{Audience, Lang};
use crate::services::audience::{AudienceStore, LocalAudienceStore};

pub type SharedAudienceStore = Arc<dyn AudienceStore + Send + Sync>;

/// Site-wide view state shared through the component tree
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub lang: RwSignal<Lang>,
    pub audience: RwSignal<Option<Audience>>,
    /// Set once the stored choice has been read in the browser
    pub audience_loaded: RwSignal<bool>,
    store: StoredValue<SharedAudienceStore>,
}

impl SiteContext {
    pub fn new(store: SharedAudienceStore) -> Self {
        Self {
            lang: RwSignal::new(Lang::default()),
            audience: RwSignal::new(None),
            audience_loaded: RwSignal::new(false),
            store: StoredValue::new(store),
        }
    }

    /// Read the stored choice. Only the first call touches the store.
    pub fn load_audience(&self) {
        if self.audience_loaded.get_untracked() {
            return;
        }
        let stored = self.store.with_value(|store| store.load());
        self.audience.set(stored);
        self.audience_loaded.set(true);
    }

    /// Explicit visitor choice: update the view and persist it
    pub fn choose_audience(&self, audience: Audience) {
        self.store.with_value(|store| store.save(audience));
        self.audience.set(Some(audience));
        tracing::info!(audience = audience.as_str(), "audience chosen");
    }

    /// Forget the choice so the gate asks again
    pub fn reset_audience(&self) {
        self.store.with_value(|store| store.clear());
        self.audience.set(None);
    }

    pub fn toggle_lang(&self) {
        self.lang.update(|lang| *lang = lang.toggled());
    }
}

/// Provide the context backed by `localStorage`
pub fn provide_site_context() -> SiteContext {
    provide_site_context_with(Arc::new(LocalAudienceStore))
}

/// Provide the context and read the stored audience once after mount
pub fn provide_site_context_with(store: SharedAudienceStore) -> SiteContext {
    let ctx = SiteContext::new(store);
    provide_context(ctx);

    // Effects only run in the browser, so SSR and the first hydrated frame agree
    Effect::new(move |_| {
        ctx.load_audience();
        #[cfg(feature = "hydrate")]
        {
            let browser_lang = window().navigator().language();
            if let Some(lang) = browser_lang.as_deref().and_then(Lang::from_code) {
                ctx.lang.set(lang);
            }
        }
    });

    ctx
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::audience::MemoryAudienceStore;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(test);
    }

    #[test]
    fn stored_choice_is_loaded_once() {
        with_owner(|| {
            let store = Arc::new(MemoryAudienceStore::with_raw("b2c"));
            let ctx = SiteContext::new(store.clone());
            assert_eq!(ctx.audience.get_untracked(), None);

            ctx.load_audience();
            assert_eq!(ctx.audience.get_untracked(), Some(Audience::B2c));
            assert!(ctx.audience_loaded.get_untracked());

            // later writes by someone else are not picked up
            store.save(Audience::B2b);
            ctx.load_audience();
            assert_eq!(ctx.audience.get_untracked(), Some(Audience::B2c));
        });
    }

    #[test]
    fn choosing_writes_the_literal_and_updates_the_view() {
        with_owner(|| {
            let store = Arc::new(MemoryAudienceStore::default());
            let ctx = SiteContext::new(store.clone());
            ctx.load_audience();
            assert_eq!(ctx.audience.get_untracked(), None);

            ctx.choose_audience(Audience::B2b);
            assert_eq!(store.raw().as_deref(), Some("b2b"));
            assert_eq!(ctx.audience.get_untracked(), Some(Audience::B2b));
        });
    }

    #[test]
    fn reset_clears_store_and_view() {
        with_owner(|| {
            let store = Arc::new(MemoryAudienceStore::with_raw("b2b"));
            let ctx = SiteContext::new(store.clone());
            ctx.load_audience();

            ctx.reset_audience();
            assert_eq!(store.raw(), None);
            assert_eq!(ctx.audience.get_untracked(), None);
        });
    }

    #[test]
    fn context_is_shared_through_the_owner() {
        with_owner(|| {
            let provided = SiteContext::new(Arc::new(MemoryAudienceStore::default()));
            provide_context(provided);
            provided.toggle_lang();
            assert_eq!(use_site_context().lang.get_untracked(), Lang::Es);
        });
    }
}
