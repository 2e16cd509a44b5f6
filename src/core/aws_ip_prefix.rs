use crate::core::prefix_type::PrefixType;
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

/*-------------------------------------------------------------------------------------------------
  AWS IP Prefix
-------------------------------------------------------------------------------------------------*/

/// AWS IP Prefix record as published in the AWS IP Ranges: the CIDR text, and the region,
/// network border group, and service the prefix is advertised for.
///
/// The same CIDR may be published several times, once per service that uses it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AwsIpPrefix {
    /// IPv4 or IPv6 prefix, exactly as published.
    pub prefix: String,

    /// AWS region the IP prefix is associated with.
    pub region: String,

    /// Network border group the IP prefix is associated with.
    pub network_border_group: String,

    /// AWS service that uses the IP prefix.
    pub service: String,
}

impl AwsIpPrefix {
    /// Parse the published prefix as a network of the given [PrefixType].
    ///
    /// Returns `None` when the text is not in CIDR notation (`address/length`) or is not a
    /// valid prefix of that type.
    pub fn network(&self, prefix_type: PrefixType) -> Option<IpNetwork> {
        if !self.prefix.contains('/') {
            return None;
        }

        match prefix_type {
            PrefixType::IPv4 => self.prefix.parse::<Ipv4Network>().ok().map(IpNetwork::V4),
            PrefixType::IPv6 => self.prefix.parse::<Ipv6Network>().ok().map(IpNetwork::V6),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
