use crate::core::matcher::Match;
use serde::Serialize;
use std::collections::HashMap;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Grouped Row
-------------------------------------------------------------------------------------------------*/

/// One result row: an AWS IP prefix (with its region and network border group) that contains
/// an address, and the comma-joined services the prefix is published for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GroupedRow {
    #[serde(rename = "IP")]
    pub address: IpAddr,

    #[serde(rename = "Prefix")]
    pub prefix: String,

    #[serde(rename = "Region")]
    pub region: String,

    #[serde(rename = "Services")]
    pub services: String,

    #[serde(rename = "Network Border Group")]
    pub network_border_group: String,
}

/*-------------------------------------------------------------------------------------------------
  Group Matches
-------------------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct GroupKey<'r> {
    prefix: &'r str,
    region: &'r str,
    network_border_group: &'r str,
}

/// Collapse the matches for one address into rows keyed by (prefix, region, network border
/// group).
///
/// Rows are returned in the order their key was first seen. Services are joined with `,` in
/// the order they were matched; a service repeated under the same key is repeated in the row.
pub fn group_matches(matches: &[Match<'_>]) -> Vec<GroupedRow> {
    let mut order: Vec<GroupKey<'_>> = Vec::new();
    let mut groups: HashMap<GroupKey<'_>, (IpAddr, Vec<&str>)> = HashMap::new();

    for m in matches {
        let key = GroupKey {
            prefix: &m.aws_ip_prefix.prefix,
            region: &m.aws_ip_prefix.region,
            network_border_group: &m.aws_ip_prefix.network_border_group,
        };

        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                (m.address, Vec::new())
            })
            .1
            .push(&m.aws_ip_prefix.service);
    }

    order
        .into_iter()
        .filter_map(|key| {
            groups.remove(&key).map(|(address, services)| GroupedRow {
                address,
                prefix: key.prefix.to_string(),
                region: key.region.to_string(),
                services: services.join(","),
                network_border_group: key.network_border_group.to_string(),
            })
        })
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aws_ip_prefix::tests::test_aws_ip_prefix;
    use crate::core::aws_ip_prefix::AwsIpPrefix;

    fn test_matches<'r>(address: &str, aws_ip_prefixes: &'r [AwsIpPrefix]) -> Vec<Match<'r>> {
        let address: IpAddr = address.parse().unwrap();
        aws_ip_prefixes
            .iter()
            .map(|aws_ip_prefix| Match {
                address,
                aws_ip_prefix,
            })
            .collect()
    }

    fn row(prefix: &str, region: &str, services: &str, network_border_group: &str) -> GroupedRow {
        GroupedRow {
            address: "13.34.0.1".parse().unwrap(),
            prefix: prefix.to_string(),
            region: region.to_string(),
            services: services.to_string(),
            network_border_group: network_border_group.to_string(),
        }
    }

    #[test]
    fn test_group_matches_preserves_first_seen_order() {
        let aws_ip_prefixes = [
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "EC2", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/20", "us-west-2", "AMAZON", "us-west-2"),
        ];
        let matches = test_matches("13.34.0.1", &aws_ip_prefixes);

        assert_eq!(
            group_matches(&matches),
            [
                row("13.34.0.0/16", "us-east-1", "AMAZON,EC2", "us-east-1"),
                row("13.34.0.0/20", "us-west-2", "AMAZON", "us-west-2"),
            ]
        );
    }

    #[test]
    fn test_group_matches_interleaved_keys() {
        let aws_ip_prefixes = [
            test_aws_ip_prefix("13.34.0.0/20", "us-east-1", "S3", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/20", "us-east-1", "AMAZON", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "EC2", "us-east-1"),
        ];
        let matches = test_matches("13.34.0.1", &aws_ip_prefixes);

        assert_eq!(
            group_matches(&matches),
            [
                row("13.34.0.0/20", "us-east-1", "S3,AMAZON", "us-east-1"),
                row("13.34.0.0/16", "us-east-1", "AMAZON,EC2", "us-east-1"),
            ]
        );
    }

    #[test]
    fn test_group_matches_keeps_duplicate_services() {
        let aws_ip_prefixes = [
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
        ];
        let matches = test_matches("13.34.0.1", &aws_ip_prefixes);

        assert_eq!(
            group_matches(&matches),
            [row("13.34.0.0/16", "us-east-1", "AMAZON,AMAZON", "us-east-1")]
        );
    }

    #[test]
    fn test_group_matches_splits_on_region_and_border_group() {
        let aws_ip_prefixes = [
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-2", "EC2", "us-east-1"),
            test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "S3", "us-east-1-atl-1"),
        ];
        let matches = test_matches("13.34.0.1", &aws_ip_prefixes);

        assert_eq!(
            group_matches(&matches),
            [
                row("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
                row("13.34.0.0/16", "us-east-2", "EC2", "us-east-1"),
                row("13.34.0.0/16", "us-east-1", "S3", "us-east-1-atl-1"),
            ]
        );
    }

    #[test]
    fn test_group_no_matches() {
        assert!(group_matches(&[]).is_empty());
    }
}
