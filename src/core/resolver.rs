use crate::core::errors::{Error, Result};
use log::info;
use std::io;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Host Lookup
-------------------------------------------------------------------------------------------------*/

/// Hostname to address resolution.
pub trait HostLookup {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolves hostnames with the system resolver (`getaddrinfo`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLookup;

impl HostLookup for SystemLookup {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        dns_lookup::lookup_host(host)
    }
}

/*-------------------------------------------------------------------------------------------------
  Resolve
-------------------------------------------------------------------------------------------------*/

/// Resolve an IP address or hostname with the system resolver.
///
/// ```
/// let addresses = awsipmatch::resolve("3.4.12.4")?;
/// assert_eq!(addresses, ["3.4.12.4".parse::<std::net::IpAddr>().unwrap()]);
/// # Ok::<(), awsipmatch::Error>(())
/// ```
pub fn resolve(target: &str) -> Result<Vec<IpAddr>> {
    resolve_with(target, &SystemLookup)
}

/// Resolve an IP address or hostname to its addresses.
///
/// A literal IPv4 or IPv6 address resolves to itself without a lookup. A hostname resolves to
/// every address `lookup` returns, in order. IPv4-mapped IPv6 addresses are returned as IPv4
/// addresses.
pub fn resolve_with<L: HostLookup + ?Sized>(target: &str, lookup: &L) -> Result<Vec<IpAddr>> {
    if let Ok(address) = target.parse::<IpAddr>() {
        return Ok(vec![address.to_canonical()]);
    }

    info!("Resolving hostname: {target}");
    let addresses: Vec<IpAddr> = lookup
        .lookup(target)
        .map_err(|source| Error::Resolution {
            host: target.to_string(),
            source,
        })?
        .into_iter()
        .map(|address| address.to_canonical())
        .collect();

    if addresses.is_empty() {
        return Err(Error::NoAddresses {
            host: target.to_string(),
        });
    }

    info!("Resolved {target} to {} address(es)", addresses.len());
    Ok(addresses)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
