//! Persistence of the visitor's storefront choice
//!
//! One local-storage key holds `"b2c"` or `"b2b"`. It is read once when the
//! app mounts in the browser and written only when the visitor picks a side.

use std::sync::Mutex;

use crate::models::Audience;

pub const STORAGE_KEY: &str = "marcenaria.audience";

/// Absence or any unrecognised value means no choice yet
pub fn parse_stored(raw: Option<String>) -> Option<Audience> {
    raw.as_deref().and_then(Audience::from_str)
}

pub trait AudienceStore {
    fn load(&self) -> Option<Audience>;
    fn save(&self, audience: Audience);
    fn clear(&self);
}

/// Browser `localStorage`. On the server every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAudienceStore;

#[cfg(feature = "hydrate")]
impl LocalAudienceStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl AudienceStore for LocalAudienceStore {
    fn load(&self) -> Option<Audience> {
        #[cfg(feature = "hydrate")]
        {
            let raw = Self::storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
            let audience = parse_stored(raw);
            tracing::debug!(?audience, "loaded audience choice");
            audience
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, audience: Audience) {
        #[cfg(feature = "hydrate")]
        {
            match Self::storage() {
                Some(storage) => {
                    if storage.set_item(STORAGE_KEY, audience.as_str()).is_err() {
                        tracing::warn!("could not persist audience choice");
                    }
                }
                None => tracing::warn!("localStorage unavailable"),
            }
        }
        let _ = audience;
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            match Self::storage() {
                Some(storage) => {
                    if storage.remove_item(STORAGE_KEY).is_err() {
                        tracing::warn!("could not clear audience choice");
                    }
                }
                None => tracing::warn!("localStorage unavailable"),
            }
        }
    }
}

/// In-process store holding the raw string, as the browser would
#[derive(Debug, Default)]
pub struct MemoryAudienceStore {
    raw: Mutex<Option<String>>,
}

impl MemoryAudienceStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl AudienceStore for MemoryAudienceStore {
    fn load(&self) -> Option<Audience> {
        parse_stored(self.raw())
    }

    fn save(&self, audience: Audience) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = Some(audience.as_str().to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_mean_no_choice() {
        assert_eq!(parse_stored(None), None);
        assert_eq!(parse_stored(Some("".into())), None);
        assert_eq!(parse_stored(Some("B2B".into())), None);
        assert_eq!(parse_stored(Some("b2b".into())), Some(Audience::B2b));
        assert_eq!(parse_stored(Some("b2c".into())), Some(Audience::B2c));
    }

    #[test]
    fn memory_store_writes_the_literal() {
        let store = MemoryAudienceStore::default();
        assert_eq!(store.load(), None);

        store.save(Audience::B2b);
        assert_eq!(store.raw().as_deref(), Some("b2b"));
        assert_eq!(store.load(), Some(Audience::B2b));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_is_ignored_until_overwritten() {
        let store = MemoryAudienceStore::with_raw("enterprise");
        assert_eq!(store.load(), None);
        store.save(Audience::B2c);
        assert_eq!(store.load(), Some(Audience::B2c));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn local_store_is_inert_off_browser() {
        let store = LocalAudienceStore;
        store.save(Audience::B2c);
        assert_eq!(store.load(), None);
    }
}
