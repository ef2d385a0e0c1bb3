//! Record formats: the IEEE `oui.txt` registry and the normalised cache.
//!
//! Registry entries look like
//!
//! ```text
//! 00-50-C2   (hex)        MINIBAR SYSTEMS
//! 0050C2     (base 16)    MINIBAR SYSTEMS
//! ```
//!
//! Only the `(base 16)` lines are used. The cache stores one `PREFIX:VENDOR`
//! record per line.

use crate::utils::normalise_prefix;

pub const REGISTRY_MARKER: &str = "(base 16)";
pub const CACHE_DELIMITER: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRecord {
    /// Six uppercase hex characters.
    pub prefix: String,
    pub vendor: String,
}

impl VendorRecord {
    pub fn new<P: AsRef<str>, V: Into<String>>(prefix: P, vendor: V) -> Option<Self> {
        let prefix = normalise_prefix(prefix.as_ref())?;
        let vendor = vendor.into();
        if vendor.contains('\n') || vendor.contains('\r') {
            return None;
        }
        Some(VendorRecord { prefix, vendor })
    }

    /// Parses a registry line. Lines without the marker, or whose left side
    /// is not an OUI, yield `None`.
    pub fn from_registry_line(line: &str) -> Option<Self> {
        let mut parts = line.splitn(2, REGISTRY_MARKER);
        let prefix = parts.next()?.trim();
        let vendor = parts.next()?.trim();
        VendorRecord::new(prefix, vendor)
    }

    /// Parses a cache line, splitting on the first delimiter only.
    pub fn from_cache_line(line: &str) -> Option<Self> {
        let mut parts = line.splitn(2, CACHE_DELIMITER);
        let prefix = parts.next()?;
        let vendor = parts.next()?;
        VendorRecord::new(prefix, vendor.trim_end_matches('\r'))
    }

    pub fn to_cache_line(&self) -> String {
        format!("{}{}{}\n", self.prefix, CACHE_DELIMITER, self.vendor)
    }
}
