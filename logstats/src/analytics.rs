use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::{invariants::HourOfDay, models::LogEntry};

/// Running statistics for one aggregation run.
///
/// Built empty, fed one call per input line, then read out. Memory grows
/// with the number of distinct keys, never with the size of the file.
#[derive(Debug, Default)]
pub struct Analytics {
    requests: u64,
    failed_parses: u64,
    bytes_total: u128,
    clients: HashSet<String>,
    statuses: HashMap<u16, u64>,
    methods: HashMap<String, u64>,
    paths: HashMap<String, u64>,
    referers: HashMap<String, u64>,
    by_hour: HashMap<HourOfDay, u64>,
}

impl Analytics {
    /// Fold one parsed entry into every table. Called exactly once per entry.
    pub fn record(&mut self, entry: &LogEntry) {
        self.requests += 1;
        if !self.clients.contains(entry.client.as_str()) {
            self.clients.insert(entry.client.clone());
        }
        *self.statuses.entry(entry.status).or_default() += 1;
        *self.methods.entry(entry.method.clone()).or_default() += 1;
        *self.paths.entry(entry.path.clone()).or_default() += 1;
        if let Some(referer) = &entry.referer {
            *self.referers.entry(referer.clone()).or_default() += 1;
        }
        self.bytes_total += u128::from(entry.bytes_sent());
        if let Some(hour) = entry.hour() {
            *self.by_hour.entry(hour).or_default() += 1;
        }
    }

    /// Count a line the grammar rejected. Touches nothing else.
    pub fn record_failure(&mut self) {
        self.failed_parses += 1;
    }

    pub fn total_requests(&self) -> u64 {
        self.requests
    }

    pub fn failed_parses(&self) -> u64 {
        self.failed_parses
    }

    pub fn total_bytes(&self) -> u128 {
        self.bytes_total
    }

    pub fn distinct_clients(&self) -> usize {
        self.clients.len()
    }

    pub fn top_statuses(&self, n: usize) -> Vec<(u16, u64)> {
        top_n(&self.statuses, n)
    }

    pub fn top_methods(&self, n: usize) -> Vec<(String, u64)> {
        top_n(&self.methods, n)
    }

    pub fn top_paths(&self, n: usize) -> Vec<(String, u64)> {
        top_n(&self.paths, n)
    }

    pub fn top_referers(&self, n: usize) -> Vec<(String, u64)> {
        top_n(&self.referers, n)
    }

    /// Requests per hour of day in ascending hour order. Hours that never
    /// occurred are absent, not zero.
    pub fn requests_by_hour(&self) -> Vec<(HourOfDay, u64)> {
        let mut hours: Vec<_> = self.by_hour.iter().map(|(h, c)| (*h, *c)).collect();
        hours.sort_unstable_by_key(|(hour, _)| *hour);
        hours
    }

    /// Fold a partial aggregate built elsewhere into this one.
    ///
    /// Counters and per-key counts sum, the client set unions, so shards
    /// processed independently end up identical to one sequential pass.
    /// Commutative and associative.
    pub fn merge(&mut self, other: Analytics) {
        self.requests += other.requests;
        self.failed_parses += other.failed_parses;
        self.bytes_total += other.bytes_total;
        self.clients.extend(other.clients);
        merge_counts(&mut self.statuses, other.statuses);
        merge_counts(&mut self.methods, other.methods);
        merge_counts(&mut self.paths, other.paths);
        merge_counts(&mut self.referers, other.referers);
        merge_counts(&mut self.by_hour, other.by_hour);
    }
}

// Descending count, ascending key among equal counts, so rankings come out
// the same on every run.
fn top_n<K: Clone + Ord + Hash>(table: &HashMap<K, u64>, n: usize) -> Vec<(K, u64)> {
    let mut entries: Vec<_> = table.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

fn merge_counts<K: Eq + Hash>(into: &mut HashMap<K, u64>, from: HashMap<K, u64>) {
    for (key, count) in from {
        *into.entry(key).or_default() += count;
    }
}
