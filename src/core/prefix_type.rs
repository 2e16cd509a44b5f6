use std::fmt;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Prefix Type
-------------------------------------------------------------------------------------------------*/

/// IP prefix type (IPv4 or IPv6); selects which AWS IP Prefix list an address is checked
/// against.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PrefixType {
    IPv4,
    IPv6,
}

impl PrefixType {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => PrefixType::IPv4,
            IpAddr::V6(_) => PrefixType::IPv6,
        }
    }
}

impl fmt::Display for PrefixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixType::IPv4 => write!(f, "IPv4"),
            PrefixType::IPv6 => write!(f, "IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
