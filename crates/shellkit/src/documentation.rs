//! Addresses and phone numbers that are safe to publish in examples.
//!
//! IPv4 addresses come from the RFC 5737 TEST-NET blocks, IPv6 addresses
//! from the RFC 3849 prefix, and phone numbers from the 555-0100 through
//! 555-0199 range set aside for fiction.

use rand::Rng;
use shellkit_core::catalog::{
    FICTIONAL_EXCHANGE, FICTIONAL_LINES, IPV4_DOCUMENTATION_PREFIXES, IPV6_DOCUMENTATION_PREFIX,
};
use shellkit_core::{Catalog, DocumentationAddress, IpVersion, PhoneFormat, PhoneNumber};

/// Generate one documentation address.
pub fn documentation_ip<R: Rng + ?Sized>(version: IpVersion, rng: &mut R) -> DocumentationAddress {
    let address = match version {
        IpVersion::V4 => {
            let [a, b, c] = IPV4_DOCUMENTATION_PREFIXES[rng.random_range(0..IPV4_DOCUMENTATION_PREFIXES.len())];
            // .0 and .255 are the network and broadcast addresses
            let host: u8 = rng.random_range(1..=254);
            format!("{a}.{b}.{c}.{host}")
        }
        IpVersion::V6 => {
            let groups: Vec<String> = (0..6).map(|_| format!("{:04X}", rng.random::<u16>())).collect();
            format!("{IPV6_DOCUMENTATION_PREFIX}{}", groups.join(":"))
        }
    };

    DocumentationAddress { version, address }
}

/// Generate one fictional NANP number using the catalog's area codes.
pub fn phone_number<R: Rng + ?Sized>(catalog: &Catalog, format: PhoneFormat, rng: &mut R) -> PhoneNumber {
    let codes = catalog.area_codes();
    let area_code = codes[rng.random_range(0..codes.len())];
    let line = rng.random_range(FICTIONAL_LINES);

    PhoneNumber {
        area_code,
        exchange: FICTIONAL_EXCHANGE,
        line,
        formatted: format.render(area_code, FICTIONAL_EXCHANGE, line),
    }
}
