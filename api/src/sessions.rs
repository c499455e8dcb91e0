//! Page session store
//!
//! Pins the configuration resolved by a page load to the click id issued for
//! it, so the PIN request and verification of that page load are sent with
//! the same service and publisher ids and the same redirect target.
//!
//! Entries live in process memory and expire after the configured TTL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use pl_core::domain::entities::{ClickId, Configuration};

struct PageEntry {
    configuration: Arc<Configuration>,
    opened_at: Instant,
}

/// Configurations keyed by click id
pub struct PageSessions {
    entries: DashMap<String, PageEntry>,
    ttl: Duration,
}

impl PageSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Remember `configuration` for `click_id` and return the one in effect.
    ///
    /// A live entry is never replaced, so a click id keeps the configuration
    /// it was first opened with.
    pub fn open(&self, click_id: &ClickId, configuration: Arc<Configuration>) -> Arc<Configuration> {
        self.prune();
        let entry = self
            .entries
            .entry(click_id.as_str().to_string())
            .or_insert_with(|| PageEntry {
                configuration,
                opened_at: Instant::now(),
            });
        entry.configuration.clone()
    }

    /// The configuration of a live page load, if any
    pub fn get(&self, click_id: &ClickId) -> Option<Arc<Configuration>> {
        let key = click_id.as_str();
        let expired = match self.entries.get(key) {
            Some(entry) if entry.opened_at.elapsed() < self.ttl => {
                return Some(entry.configuration.clone())
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prune(&self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.opened_at.elapsed() < ttl);
    }
}
