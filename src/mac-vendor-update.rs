#[macro_use] extern crate error_chain;
extern crate mac_vendor_lookup;

use error_chain::ChainedError;
use mac_vendor_lookup::errors::*;
use mac_vendor_lookup::{logging, Config, MacLookup};
use std::env;

quick_main!(run);

fn run() -> Result<i32> {
    logging::init_logging("info");

    let config = Config::from_env()?;
    let url = env::args().nth(1).unwrap_or_else(|| config.source_url.clone());
    let mut lookup = MacLookup::new(&config)?;

    match lookup.update_vendors(&url) {
        Ok(count) => {
            println!("Cached {} vendor prefixes in {}", count, config.cache_path.display());
            Ok(0)
        }
        Err(e) => {
            eprint!("{}", e.display_chain());
            Ok(e.kind().exit_code())
        }
    }
}
