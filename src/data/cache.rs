use crate::data::series::PriceSeries;
use crate::types::FetchKey;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct CacheEntry {
    series: PriceSeries,
    inserted_at: Instant,
}

/// Fetched price series keyed by (symbol, start, end).
///
/// Entries expire after `ttl` (if set) and the oldest entry is evicted once
/// `capacity` is reached. Two threads missing the same key at once both fetch;
/// the later insert wins.
pub struct FetchCache {
    data: Mutex<HashMap<FetchKey, CacheEntry>>,
    capacity: usize,
    ttl: Option<Duration>,
}

impl FetchCache {
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Mutex::new(HashMap::with_capacity(capacity)),
            capacity,
            ttl,
        }
    }

    pub fn get(&self, key: &FetchKey) -> Option<PriceSeries> {
        let mut data = self.lock();
        let expired = match data.get(key) {
            Some(entry) => self.is_expired(entry),
            None => return None,
        };
        if expired {
            data.remove(key);
            return None;
        }
        data.get(key).map(|entry| entry.series.clone())
    }

    pub fn insert(&self, key: FetchKey, series: PriceSeries) {
        let mut data = self.lock();
        if !data.contains_key(&key) && data.len() >= self.capacity {
            let oldest = data
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                data.remove(&oldest);
            }
        }
        data.insert(
            key,
            CacheEntry {
                series,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop one entry; returns whether it was cached.
    pub fn invalidate(&self, key: &FetchKey) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        match self.ttl {
            Some(ttl) => entry.inserted_at.elapsed() >= ttl,
            None => false,
        }
    }

    // Entries are plain values, so a panic mid-update cannot leave one torn.
    fn lock(&self) -> MutexGuard<'_, HashMap<FetchKey, CacheEntry>> {
        match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
