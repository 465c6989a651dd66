//! Explicitly owned cache of onboarded city records

use crate::CityError;
use std::time::{Duration, Instant};
use tessera_domain::traits::CitySource;
use tessera_domain::CityRecord;

/// How long a loaded city list stays valid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLifetime {
    /// Valid until explicitly invalidated, typically one ingestion run
    PerRun,

    /// Valid for a fixed duration after loading
    Ttl(Duration),
}

#[derive(Debug)]
struct CacheEntry {
    cities: Vec<CityRecord>,
    loaded_at: Instant,
}

/// Cache of the onboarded city list.
///
/// The cache is a plain owned value: whoever drives an ingestion run creates
/// it, refreshes it and drops it. Nothing is shared implicitly.
#[derive(Debug)]
pub struct CityCache {
    lifetime: CacheLifetime,
    entry: Option<CacheEntry>,
}

impl CityCache {
    /// Create an empty cache with the given lifetime
    pub fn new(lifetime: CacheLifetime) -> Self {
        Self {
            lifetime,
            entry: None,
        }
    }

    /// Cache that lives until invalidated
    pub fn per_run() -> Self {
        Self::new(CacheLifetime::PerRun)
    }

    /// Cache whose contents expire `ttl` after loading
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::new(CacheLifetime::Ttl(ttl))
    }

    /// True when the cache holds a list that has not expired
    pub fn is_fresh(&self) -> bool {
        match (&self.entry, self.lifetime) {
            (None, _) => false,
            (Some(_), CacheLifetime::PerRun) => true,
            (Some(entry), CacheLifetime::Ttl(ttl)) => entry.loaded_at.elapsed() < ttl,
        }
    }

    /// Cached city list, `None` when empty or expired
    pub fn get(&self) -> Option<&[CityRecord]> {
        if !self.is_fresh() {
            return None;
        }
        self.entry.as_ref().map(|entry| entry.cities.as_slice())
    }

    /// Look up one cached city by slug
    pub fn find(&self, slug: &str) -> Option<&CityRecord> {
        self.get()?.iter().find(|city| city.slug == slug)
    }

    /// Replace the cached list and restart its lifetime
    pub fn set(&mut self, cities: Vec<CityRecord>) {
        tracing::debug!(count = cities.len(), "City cache populated");
        self.entry = Some(CacheEntry {
            cities,
            loaded_at: Instant::now(),
        });
    }

    /// Drop the cached list so the next lookup reloads
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::info!("City cache invalidated");
        }
    }

    /// Cached list, loading it from `source` when empty or expired
    pub fn get_or_load<S>(&mut self, source: &S) -> Result<&[CityRecord], CityError>
    where
        S: CitySource,
        S::Error: Into<CityError>,
    {
        if self.is_fresh() {
            tracing::debug!("City cache hit");
        } else {
            if self.entry.is_some() {
                tracing::debug!("City cache expired, reloading");
            } else {
                tracing::debug!("City cache miss, loading");
            }
            let cities = source.load_cities().map_err(Into::<CityError>::into)?;
            self.set(cities);
        }

        Ok(self
            .entry
            .as_ref()
            .map(|entry| entry.cities.as_slice())
            .unwrap_or(&[]))
    }
}

impl Default for CityCache {
    fn default() -> Self {
        Self::per_run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSource {
        cities: Vec<CityRecord>,
        loads: Cell<usize>,
    }

    impl CountingSource {
        fn new(slugs: &[&str]) -> Self {
            Self {
                cities: slugs
                    .iter()
                    .map(|slug| CityRecord::new(*slug, slug.to_uppercase()))
                    .collect(),
                loads: Cell::new(0),
            }
        }
    }

    impl CitySource for CountingSource {
        type Error = String;

        fn load_cities(&self) -> Result<Vec<CityRecord>, Self::Error> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.cities.clone())
        }
    }

    struct FailingSource;

    impl CitySource for FailingSource {
        type Error = String;

        fn load_cities(&self) -> Result<Vec<CityRecord>, Self::Error> {
            Err("backend unavailable".to_string())
        }
    }

    #[test]
    fn test_empty_cache() {
        let cache = CityCache::per_run();
        assert!(!cache.is_fresh());
        assert!(cache.get().is_none());
        assert!(cache.find("lisbon").is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = CityCache::per_run();
        cache.set(vec![CityRecord::new("lisbon", "Lisbon")]);

        assert!(cache.is_fresh());
        assert_eq!(cache.get().unwrap().len(), 1);
        assert_eq!(cache.find("lisbon").unwrap().name, "Lisbon");
        assert!(cache.find("porto").is_none());
    }

    #[test]
    fn test_invalidate() {
        let mut cache = CityCache::per_run();
        cache.set(vec![CityRecord::new("lisbon", "Lisbon")]);
        cache.invalidate();

        assert!(cache.get().is_none());
        // Invalidating an empty cache is a no-op.
        cache.invalidate();
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_zero_ttl_always_expired() {
        let mut cache = CityCache::with_ttl(Duration::ZERO);
        cache.set(vec![CityRecord::new("lisbon", "Lisbon")]);
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_long_ttl_stays_fresh() {
        let mut cache = CityCache::with_ttl(Duration::from_secs(3600));
        cache.set(vec![CityRecord::new("lisbon", "Lisbon")]);
        assert!(cache.get().is_some());
    }

    #[test]
    fn test_get_or_load_loads_once_per_run() {
        let source = CountingSource::new(&["lisbon", "porto"]);
        let mut cache = CityCache::per_run();

        assert_eq!(cache.get_or_load(&source).unwrap().len(), 2);
        assert_eq!(cache.get_or_load(&source).unwrap().len(), 2);
        assert_eq!(source.loads.get(), 1);

        cache.invalidate();
        cache.get_or_load(&source).unwrap();
        assert_eq!(source.loads.get(), 2);
    }

    #[test]
    fn test_get_or_load_reloads_after_expiry() {
        let source = CountingSource::new(&["lisbon"]);
        let mut cache = CityCache::with_ttl(Duration::ZERO);

        cache.get_or_load(&source).unwrap();
        cache.get_or_load(&source).unwrap();
        assert_eq!(source.loads.get(), 2);
    }

    #[test]
    fn test_get_or_load_keeps_nothing_on_error() {
        let mut cache = CityCache::per_run();
        let result = cache.get_or_load(&FailingSource);

        match result {
            Err(CityError::Source(msg)) => assert!(msg.contains("backend unavailable")),
            other => panic!("Expected Source error, got {:?}", other),
        }
        assert!(cache.get().is_none());
    }
}
