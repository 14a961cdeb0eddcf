//! Shared query cache keyed by endpoint path.
//!
//! Every [`use_query`] resource subscribes to the generation counter of its path. Bumping the
//! counter through [`QueryCache::invalidate`] makes every page reading that path refetch.

use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::client::api::{self, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCache {
    generations: HashMap<String, u64>,
}

impl QueryCache {
    pub fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).copied().unwrap_or_default()
    }

    pub fn invalidate(&mut self, key: &str) {
        *self.generations.entry(key.to_string()).or_default() += 1;
    }

    pub fn invalidate_all<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            self.invalidate(key);
        }
    }
}

/// Fetches `path` as JSON, refetching whenever the path is invalidated
pub fn use_query<T>(path: String) -> Resource<Result<T, ApiError>>
where
    T: DeserializeOwned + 'static,
{
    let cache = use_context::<Signal<QueryCache>>();

    use_resource(move || {
        let path = path.clone();

        async move {
            // Subscribes this resource to invalidations of `path`
            let _generation = cache.read().generation(&path);

            let result = api::get::<T>(&path).await;
            if let Err(e) = &result {
                tracing::error!("Failed to fetch {}: {}", path, e);
            }

            result
        }
    })
}

/// Invalidates every key in `keys` on the shared cache, callable from event handlers
pub fn invalidate<'a, I>(keys: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cache = consume_context::<Signal<QueryCache>>();
    cache.write().invalidate_all(keys);
}
