#[macro_use] extern crate error_chain;
extern crate mac_vendor_lookup;

use error_chain::ChainedError;
use mac_vendor_lookup::errors::*;
use mac_vendor_lookup::{logging, MacLookup};
use std::env;

quick_main!(run);

fn run() -> Result<i32> {
    logging::init_logging("warn");

    let mac = env::args().nth(1).ok_or("Usage: mac-vendor <MAC-ADDRESS>")?;
    let mut lookup = MacLookup::from_env()?;

    match lookup.lookup(&mac) {
        Ok(vendor) => {
            println!("{}", vendor);
            Ok(0)
        }
        Err(e) => {
            match *e.kind() {
                ErrorKind::InvalidAddress(..) => eprintln!("Invalid MAC address: {}", e),
                ErrorKind::UnknownVendor(..) => eprintln!("{}", e),
                _ => eprint!("{}", e.display_chain()),
            }
            Ok(e.kind().exit_code())
        }
    }
}
