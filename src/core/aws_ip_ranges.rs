use crate::core::aws_ip_prefix::AwsIpPrefix;
use crate::core::datetime;
use crate::core::errors::Result;
use crate::core::grouping::group_matches;
use crate::core::json;
use crate::core::matcher::find_matches;
use crate::core::prefix_type::PrefixType;
use crate::core::search_results::{AddressResults, SearchResults};
use chrono::{DateTime, Utc};
use log::debug;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  AWS IP Ranges
-------------------------------------------------------------------------------------------------*/

/// A snapshot of the published AWS IP Ranges. The IPv4 and IPv6 prefix lists keep the order
/// in which they were published.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AwsIpRanges {
    pub(crate) sync_token: String,
    pub(crate) create_date: String,

    pub(crate) prefixes: Vec<AwsIpPrefix>,
    pub(crate) ipv6_prefixes: Vec<AwsIpPrefix>,
}

impl AwsIpRanges {
    /// Parse the AWS IP Ranges JSON document.
    ///
    /// ```
    /// let json = r#"{
    ///   "syncToken": "1722375796",
    ///   "createDate": "2024-07-30-21-43-16",
    ///   "prefixes": [
    ///     {"ip_prefix": "3.4.12.4/32", "region": "eu-west-1",
    ///      "service": "AMAZON", "network_border_group": "eu-west-1"}
    ///   ],
    ///   "ipv6_prefixes": []
    /// }"#;
    ///
    /// let aws_ip_ranges = awsipmatch::AwsIpRanges::from_json(json)?;
    /// assert_eq!(aws_ip_ranges.prefixes().len(), 1);
    /// # Ok::<(), awsipmatch::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<AwsIpRanges> {
        let json_ip_ranges = json::parse(json)?;

        let prefixes = json_ip_ranges
            .prefixes
            .into_iter()
            .map(|json_ipv4_prefix| AwsIpPrefix {
                prefix: json_ipv4_prefix.ip_prefix,
                region: json_ipv4_prefix.region,
                network_border_group: json_ipv4_prefix.network_border_group,
                service: json_ipv4_prefix.service,
            })
            .collect();

        let ipv6_prefixes = json_ip_ranges
            .ipv6_prefixes
            .into_iter()
            .map(|json_ipv6_prefix| AwsIpPrefix {
                prefix: json_ipv6_prefix.ipv6_prefix,
                region: json_ipv6_prefix.region,
                network_border_group: json_ipv6_prefix.network_border_group,
                service: json_ipv6_prefix.service,
            })
            .collect();

        Ok(AwsIpRanges {
            sync_token: json_ip_ranges.sync_token,
            create_date: json_ip_ranges.create_date,
            prefixes,
            ipv6_prefixes,
        })
    }

    /// The "sync token" is a string containing the publication time for the current set of AWS IP
    /// Ranges, in Unix epoch time format.
    pub fn sync_token(&self) -> &str {
        &self.sync_token
    }

    /// The publication date and time, as published (`YYYY-MM-DD-hh-mm-ss`).
    pub fn create_date(&self) -> &str {
        &self.create_date
    }

    /// The publication date and time in UTC, when the published value is well formed.
    pub fn create_date_utc(&self) -> Option<DateTime<Utc>> {
        datetime::parse(&self.create_date)
    }

    pub fn prefixes(&self) -> &[AwsIpPrefix] {
        &self.prefixes
    }

    pub fn ipv6_prefixes(&self) -> &[AwsIpPrefix] {
        &self.ipv6_prefixes
    }

    /// The prefix list addresses of the given [PrefixType] are checked against.
    pub fn prefixes_of(&self, prefix_type: PrefixType) -> &[AwsIpPrefix] {
        match prefix_type {
            PrefixType::IPv4 => &self.prefixes,
            PrefixType::IPv6 => &self.ipv6_prefixes,
        }
    }

    /// Match each address against the AWS IP Prefixes and group the matches into result rows.
    /// Addresses are processed in order; an address without matches is kept with no rows.
    pub fn search(&self, target: &str, addresses: &[IpAddr]) -> SearchResults {
        let addresses = addresses
            .iter()
            .map(|&address| {
                let matches = find_matches(address, self);
                let rows = group_matches(&matches);
                debug!(
                    "{address}: {} matching AWS IP prefix(es) in {} row(s)",
                    matches.len(),
                    rows.len()
                );
                AddressResults { address, rows }
            })
            .collect();

        SearchResults {
            target: target.to_string(),
            addresses,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
