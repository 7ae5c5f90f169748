//! Process-wide schema cache.
//!
//! Keyed by the struct's stable identity key; values are write-once behind
//! an [`Arc`], so a lookup racing a store either misses or sees a fully
//! formed schema. Two first-callers may reflect the same type redundantly,
//! in which case the last store wins with an equivalent value. Entries are
//! never evicted: struct shapes are fixed for the process lifetime.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::schema::RootSchema;

static CACHE: Lazy<RwLock<HashMap<&'static str, Arc<RootSchema>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub(crate) fn lookup(key: &str) -> Option<Arc<RootSchema>> {
    // Entries are immutable once stored, so a poisoned lock still holds
    // consistent data.
    let cache = CACHE.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.get(key).cloned()
}

pub(crate) fn store(key: &'static str, schema: Arc<RootSchema>) {
    let mut cache = CACHE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.insert(key, schema);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::thread;

    use super::*;
    use crate::schema::DataType;

    fn empty_schema() -> Arc<RootSchema> {
        Arc::new(RootSchema {
            kind: DataType::Object,
            properties: BTreeMap::new(),
            required: Vec::new(),
        })
    }

    #[test]
    fn stored_entries_are_shared() {
        let schema = empty_schema();
        store("cache_tests::Shared", Arc::clone(&schema));
        let hit = lookup("cache_tests::Shared").unwrap();
        assert!(Arc::ptr_eq(&schema, &hit));
    }

    #[test]
    fn concurrent_lookups_and_stores_do_not_interfere() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        store("cache_tests::Contended", empty_schema());
                        let hit = lookup("cache_tests::Contended").unwrap();
                        assert!(hit.properties.is_empty());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
