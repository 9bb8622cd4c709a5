//! Guide caching between requests.
//!
//! The cache is an explicit collaborator injected into the view layer, not
//! hidden process state. Discovery is idempotent, so concurrent requests are
//! allowed to race on a rebuild; the last writer wins and nothing guards the
//! window. Invalidation is external via [`GuideCache::clear`] - there is no
//! time-based expiry.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::component::Module;

/// Store for built guides, keyed by the configured cache entry name.
pub trait GuideCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<Module>>;
    fn set(&self, key: &str, modules: Vec<Module>);
    fn clear(&self, key: &str);
}

/// Process-wide in-memory cache. The mutex only makes the map shareable;
/// it does not serialize rebuilds.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<Module>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Module>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl GuideCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<Module>> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, modules: Vec<Module>) {
        self.entries().insert(key.to_string(), modules);
    }

    fn clear(&self, key: &str) {
        self.entries().remove(key);
    }
}
