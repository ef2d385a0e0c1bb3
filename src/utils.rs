use crate::errors::*;
use std::fmt;
use eui48::MacAddress;

/// Number of hex characters in an OUI.
pub const OUI_LEN: usize = 6;

/// Number of hex characters in a full EUI-48 address.
pub const MAC_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFault {
    UnexpectedCharacter,
    TooLong,
}

impl fmt::Display for AddressFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AddressFault::UnexpectedCharacter => write!(f, "contains unexpected character"),
            AddressFault::TooLong => write!(f, "is not a valid MAC address (too long)"),
        }
    }
}

/// Strips `:` and `-` separators and uppercases what is left.
///
/// Anything shorter than a full address is accepted, so a bare OUI such as
/// `00-50-C2` is a valid query. Only ASCII hex digits count: characters that
/// merely uppercase into them (`\u{FB00}` is "ff") are rejected.
pub fn sanitise(mac: &str) -> Result<String> {
    let stripped = strip_separators(mac);

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!(ErrorKind::InvalidAddress(mac.to_string(), AddressFault::UnexpectedCharacter));
    }

    if stripped.len() > MAC_LEN {
        bail!(ErrorKind::InvalidAddress(mac.to_string(), AddressFault::TooLong));
    }

    Ok(stripped.to_ascii_uppercase())
}

fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != ':' && *c != '-').collect()
}

/// First six characters of a sanitised address, or all of it when shorter.
pub fn oui_prefix(sanitised: &str) -> &str {
    &sanitised[..sanitised.len().min(OUI_LEN)]
}

/// Normalises a registry prefix such as `00-50-C2` into `0050C2`.
pub fn normalise_prefix(raw: &str) -> Option<String> {
    let prefix = strip_separators(raw);

    if prefix.len() == OUI_LEN && prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(prefix.to_ascii_uppercase())
    } else {
        None
    }
}

pub fn mac_to_hex(mac: &MacAddress) -> String {
    mac.as_bytes().iter().map(|b| format!("{:02X}", b)).collect()
}
