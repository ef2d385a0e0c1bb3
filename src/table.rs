use std::collections::HashMap;

use crate::oui::VendorRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

/// OUI prefix to vendor name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorTable {
    prefixes: HashMap<String, String>,
}

impl VendorTable {
    pub fn new() -> Self {
        VendorTable::default()
    }

    /// Parses a whole cache file, returning the table and the number of lines
    /// that were skipped as malformed.
    pub fn from_cache(content: &str) -> (Self, usize) {
        let mut table = VendorTable::new();
        let mut skipped = 0;

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            match VendorRecord::from_cache_line(line) {
                Some(record) => table.insert(record),
                None => skipped += 1,
            }
        }

        (table, skipped)
    }

    pub fn insert(&mut self, record: VendorRecord) {
        self.prefixes.insert(record.prefix, record.vendor);
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn clear(&mut self) {
        self.prefixes.clear();
    }
}

impl Extend<VendorRecord> for VendorTable {
    fn extend<I: IntoIterator<Item = VendorRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl std::iter::FromIterator<VendorRecord> for VendorTable {
    fn from_iter<I: IntoIterator<Item = VendorRecord>>(iter: I) -> Self {
        let mut table = VendorTable::new();
        table.extend(iter);
        table
    }
}
