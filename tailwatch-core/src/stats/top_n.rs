use std::collections::HashMap;

/// Maximum number of keys kept per report.
pub const TOP_N: usize = 10;

/// Counts keys, remembering the order in which they were first seen.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl Tally {
    pub(crate) fn record(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    /// Highest counts first. The sort is stable, so ties keep first-seen order.
    pub(crate) fn top(self, n: usize) -> TopN {
        let mut entries = self.counts;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        TopN { entries }
    }
}

/// An ordered `key: count` list, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopN {
    entries: Vec<(String, u64)>,
}

impl TopN {
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
