//! Lazily built default font map
//!
//! The default map covers [`DEFAULT_FAMILIES`] at [`DEFAULT_PITCHES`]. It is
//! built on first access and kept for the rest of the process. Concurrent
//! first accesses block until a single build finishes; a failed build leaves
//! the cache uninitialized so a later call can retry.

use crate::config::{DEFAULT_FAMILIES, DEFAULT_PITCHES};
use crate::error::Result;
use crate::map::{FontMap, FontRequest, MapBuilder};
use crate::normalize::{FontNormalizer, StandardNormalizer};
use once_cell::sync::OnceCell;

/// Requests the default map is built from
pub fn default_requests() -> Vec<FontRequest> {
    DEFAULT_FAMILIES
        .iter()
        .map(|family| FontRequest::new(*family, DEFAULT_PITCHES))
        .collect()
}

/// Holder for a map that is built once and then only read
#[derive(Debug, Default)]
pub struct DefaultMapCache {
    map: OnceCell<FontMap>,
}

impl DefaultMapCache {
    pub const fn new() -> Self {
        DefaultMapCache {
            map: OnceCell::new(),
        }
    }

    /// Return the cached map, building it with `builder` on first call
    pub fn get_or_init<N: FontNormalizer>(&self, builder: &MapBuilder<N>) -> Result<&FontMap> {
        self.map.get_or_try_init(|| {
            let map = builder.build_map(&default_requests())?;
            tracing::debug!(entries = map.len(), "initialized default font map");
            Ok(map)
        })
    }

    /// The cached map, if built
    pub fn get(&self) -> Option<&FontMap> {
        self.map.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.map.get().is_some()
    }
}

static DEFAULT_MAP: DefaultMapCache = DefaultMapCache::new();

/// The process-wide default map, built with [`StandardNormalizer`]
pub fn default_map() -> Result<&'static FontMap> {
    DEFAULT_MAP.get_or_init(&MapBuilder::new(StandardNormalizer))
}
