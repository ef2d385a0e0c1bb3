//! Synchronous wrapper around [`AsyncMacLookup`].

use eui48::MacAddress;
use tokio::runtime::{Builder, Runtime};

use crate::config::Config;
use crate::errors::*;
use crate::lookup::AsyncMacLookup;
use crate::table::LoadState;

/// Drives an [`AsyncMacLookup`] to completion on its own single-threaded
/// runtime. Must not be used from inside another tokio runtime.
pub struct MacLookup {
    runtime: Runtime,
    engine: AsyncMacLookup,
}

impl MacLookup {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(MacLookup {
            runtime,
            engine: AsyncMacLookup::new(config)?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    pub fn state(&self) -> LoadState {
        self.engine.state()
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn engine(&self) -> &AsyncMacLookup {
        &self.engine
    }

    pub fn load_vendors(&mut self) -> Result<()> {
        self.runtime.block_on(self.engine.load_vendors())
    }

    pub fn update_vendors(&mut self, url: &str) -> Result<usize> {
        self.runtime.block_on(self.engine.update_vendors(url))
    }

    pub fn refresh(&mut self) -> Result<usize> {
        self.runtime.block_on(self.engine.refresh())
    }

    pub fn lookup(&mut self, mac: &str) -> Result<String> {
        self.runtime.block_on(self.engine.lookup(mac))
    }

    pub fn lookup_eui48(&mut self, mac: &MacAddress) -> Result<String> {
        self.runtime.block_on(self.engine.lookup_eui48(mac))
    }

    pub fn reset(&mut self) {
        self.engine.reset()
    }
}
