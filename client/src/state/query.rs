//! Keyed query cache with explicit load states and invalidation.
//!
//! DESIGN
//! ======
//! `QueryCache` is a plain model: it decides when a fetch must start, which
//! result wins, and what readers see. `QueryClient` wraps it in a signal and
//! owns the browser-side fetch tasks, so components only subscribe and
//! invalidate.
//!
//! A result is stored only if its request generation is still current; an
//! invalidation issued while a fetch is in flight supersedes that fetch. The
//! last known value stays readable while a refetch runs.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Identifies a cached query by its procedure path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    pub const fn new(procedure: &'static str) -> Self {
        Self(procedure)
    }

    pub const fn procedure(self) -> &'static str {
        self.0
    }
}

/// The feed query.
pub const POSTS_GET_ALL: QueryKey = QueryKey::new("posts.getAll");

/// What a reader of a query sees.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    /// No result has arrived yet.
    Loading,
    /// The last fetch failed or returned data of the wrong shape.
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl QueryState<serde_json::Value> {
    /// Decode a cached raw value into the procedure's output type.
    pub fn decode<T: DeserializeOwned>(&self) -> QueryState<T> {
        match self {
            Self::Loading => QueryState::Loading,
            Self::Failed(message) => QueryState::Failed(message.clone()),
            Self::Ready(raw) => match serde_json::from_value::<T>(raw.clone()) {
                Ok(value) => QueryState::Ready(value),
                Err(e) => QueryState::Failed(format!("unexpected response shape: {e}")),
            },
        }
    }
}

#[derive(Clone, Debug)]
struct QueryEntry {
    state: QueryState<serde_json::Value>,
    generation: u64,
    stale: bool,
    in_flight: bool,
}

impl Default for QueryEntry {
    fn default() -> Self {
        Self { state: QueryState::Loading, generation: 0, stale: true, in_flight: false }
    }
}

/// Last known result per query key.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, QueryEntry>,
}

impl QueryCache {
    /// Current state for `key`; `Loading` if it was never fetched.
    pub fn state(&self, key: QueryKey) -> QueryState<serde_json::Value> {
        self.entries
            .get(&key)
            .map_or(QueryState::Loading, |entry| entry.state.clone())
    }

    /// True when a subscriber should trigger a fetch.
    pub fn needs_fetch(&self, key: QueryKey) -> bool {
        self.entries
            .get(&key)
            .is_none_or(|entry| entry.stale && !entry.in_flight)
    }

    pub fn is_fetching(&self, key: QueryKey) -> bool {
        self.entries.get(&key).is_some_and(|entry| entry.in_flight)
    }

    /// Claim a fetch for `key`. Returns the request generation to pass back to
    /// [`QueryCache::resolve`], or `None` if the entry is fresh or a fetch is
    /// already running.
    pub fn begin(&mut self, key: QueryKey) -> Option<u64> {
        let entry = self.entries.entry(key).or_default();
        if !entry.stale || entry.in_flight {
            return None;
        }
        entry.in_flight = true;
        Some(entry.generation)
    }

    /// Store the outcome of a fetch. Returns `false` when the result was
    /// discarded because a later invalidation superseded it.
    pub fn resolve(&mut self, key: QueryKey, generation: u64, result: Result<serde_json::Value, String>) -> bool {
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        if entry.generation != generation {
            return false;
        }
        entry.state = match result {
            Ok(value) => QueryState::Ready(value),
            Err(message) => QueryState::Failed(message),
        };
        entry.stale = false;
        entry.in_flight = false;
        true
    }

    /// Mark `key` stale so the next subscriber read re-fetches it. Returns
    /// `false` if nothing was cached under `key`.
    pub fn invalidate(&mut self, key: QueryKey) -> bool {
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        entry.generation += 1;
        entry.stale = true;
        entry.in_flight = false;
        true
    }
}

/// Page-wide handle to the shared query cache, provided via context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self { cache: RwSignal::new(QueryCache::default()) }
    }

    /// Tracked read of `key`, decoded into `T`.
    pub fn state<T: DeserializeOwned>(self, key: QueryKey) -> QueryState<T> {
        self.cache.with(|cache| cache.state(key).decode())
    }

    pub fn invalidate(self, key: QueryKey) {
        self.cache.update(|cache| {
            cache.invalidate(key);
        });
    }

    /// Start a fetch for `key` unless one is running or the entry is fresh.
    pub fn fetch(self, key: QueryKey) {
        let Some(generation) = self.cache.try_update(|cache| cache.begin(key)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let cache = self.cache;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::query_procedure(key.procedure())
                    .await
                    .map_err(|e| {
                        log::warn!("{} failed: {e}", key.procedure());
                        e.to_string()
                    });
                cache.update(|c| {
                    if !c.resolve(key, generation, result) {
                        log::debug!("{} result superseded by invalidation", key.procedure());
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    }
}

/// Subscribe the calling component to `key`: fetches on mount and again after
/// every invalidation.
pub fn use_query(key: QueryKey) -> QueryClient {
    let client = expect_context::<QueryClient>();
    Effect::new(move || {
        if client.cache.with(|cache| cache.needs_fetch(key)) {
            client.fetch(key);
        }
    });
    client
}
