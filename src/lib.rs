//! Offline MAC address to vendor resolution backed by a local copy of the
//! IEEE OUI registry.

#[macro_use] extern crate error_chain;

pub mod blocking;
pub mod cache;
pub mod config;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod oui;
pub mod table;
pub mod utils;

pub use blocking::MacLookup;
pub use cache::RegistryCache;
pub use config::{Config, OUI_URL};
pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use lookup::AsyncMacLookup;
pub use oui::VendorRecord;
pub use table::{LoadState, VendorTable};
pub use utils::AddressFault;
