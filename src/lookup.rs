use eui48::MacAddress;
use tracing::debug;

use crate::cache::RegistryCache;
use crate::config::Config;
use crate::errors::*;
use crate::table::{LoadState, VendorTable};
use crate::utils::{mac_to_hex, oui_prefix, sanitise};

/// Resolves MAC addresses to vendors, loading the table lazily.
///
/// Operations take `&mut self`, so one instance never runs two of them at
/// once. Separate instances sharing a cache path only share the file.
pub struct AsyncMacLookup {
    cache: RegistryCache,
    table: VendorTable,
    state: LoadState,
}

impl AsyncMacLookup {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(AsyncMacLookup {
            cache: RegistryCache::new(config)?,
            table: VendorTable::new(),
            state: LoadState::Unloaded,
        })
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn cache(&self) -> &RegistryCache {
        &self.cache
    }

    /// Fills the table from the cache, downloading the registry first when
    /// there is no cache yet. A no-op once loaded.
    pub async fn load_vendors(&mut self) -> Result<()> {
        if self.state == LoadState::Loaded {
            return Ok(());
        }

        self.state = LoadState::Loading;
        match self.fill_table().await {
            Ok(()) => {
                self.state = LoadState::Loaded;
                debug!(entries = self.table.len(), "Vendor list successfully loaded");
                Ok(())
            }
            Err(e) => {
                self.state = LoadState::Unloaded;
                Err(e)
            }
        }
    }

    async fn fill_table(&mut self) -> Result<()> {
        if self.cache.exists() {
            self.table = self.cache.read().await?;
        } else {
            self.cache.ensure(&mut self.table).await?;
        }
        Ok(())
    }

    /// Rebuilds the cache from `url` and replaces the table with it.
    pub async fn update_vendors(&mut self, url: &str) -> Result<usize> {
        let count = self.cache.refresh(url, &mut self.table).await?;
        self.state = LoadState::Loaded;
        Ok(count)
    }

    /// `update_vendors` against the configured source.
    pub async fn refresh(&mut self) -> Result<usize> {
        let count = self.cache.refresh(self.cache.source_url(), &mut self.table).await?;
        self.state = LoadState::Loaded;
        Ok(count)
    }

    pub async fn lookup(&mut self, mac: &str) -> Result<String> {
        let mac = sanitise(mac)?;
        self.load_vendors().await?;

        let prefix = oui_prefix(&mac);
        match self.table.get(prefix) {
            Some(vendor) => Ok(vendor.to_string()),
            None => bail!(ErrorKind::UnknownVendor(prefix.to_string())),
        }
    }

    pub async fn lookup_eui48(&mut self, mac: &MacAddress) -> Result<String> {
        self.lookup(&mac_to_hex(mac)).await
    }

    /// Forgets the table; the next lookup loads it again.
    pub fn reset(&mut self) {
        self.table.clear();
        self.state = LoadState::Unloaded;
    }
}
