use crate::core::aws_ip_prefix::AwsIpPrefix;
use crate::core::aws_ip_ranges::AwsIpRanges;
use crate::core::prefix_type::PrefixType;
use log::warn;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Match
-------------------------------------------------------------------------------------------------*/

/// An address and an AWS IP Prefix that contains it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match<'r> {
    pub address: IpAddr,
    pub aws_ip_prefix: &'r AwsIpPrefix,
}

/*-------------------------------------------------------------------------------------------------
  Find Matches
-------------------------------------------------------------------------------------------------*/

/// Find every AWS IP Prefix that contains `address`, in published order.
///
/// IPv4 addresses are only checked against the IPv4 prefixes and IPv6 addresses only against
/// the IPv6 prefixes. Prefixes that do not parse are skipped.
pub fn find_matches(address: IpAddr, aws_ip_ranges: &AwsIpRanges) -> Vec<Match<'_>> {
    let prefix_type = PrefixType::of(&address);

    aws_ip_ranges
        .prefixes_of(prefix_type)
        .iter()
        .filter(|aws_ip_prefix| match aws_ip_prefix.network(prefix_type) {
            Some(network) => network.contains(address),
            None => {
                warn!(
                    "Skipping invalid {prefix_type} prefix in AWS IP Ranges: {:?}",
                    aws_ip_prefix.prefix
                );
                false
            }
        })
        .map(|aws_ip_prefix| Match {
            address,
            aws_ip_prefix,
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
    use crate::core::aws_ip_ranges::tests::test_aws_ip_ranges;
    use test_log::test;

    fn matched_prefixes(address: &str, aws_ip_ranges: &AwsIpRanges) -> Vec<(String, String)> {
        find_matches(address.parse().unwrap(), aws_ip_ranges)
            .into_iter()
            .map(|m| (m.aws_ip_prefix.prefix.clone(), m.aws_ip_prefix.service.clone()))
            .collect()
    }

    #[test]
    fn test_host_prefix_match() {
        let aws_ip_ranges = test_aws_ip_ranges();
        let matches = find_matches("3.4.12.4".parse().unwrap(), &aws_ip_ranges);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].address, "3.4.12.4".parse::<IpAddr>().unwrap());
        assert_eq!(
            matches[0].aws_ip_prefix,
            &test_aws_ip_prefix("3.4.12.4/32", "eu-west-1", "AMAZON", "eu-west-1")
        );
    }

    #[test]
    fn test_all_overlapping_prefixes_match() {
        let aws_ip_ranges = test_aws_ip_ranges();
        assert_eq!(
            matched_prefixes("13.34.16.1", &aws_ip_ranges),
            [
                ("13.34.0.0/16".to_string(), "AMAZON".to_string()),
                ("13.34.0.0/16".to_string(), "EC2".to_string()),
                ("13.34.16.0/20".to_string(), "S3".to_string()),
            ]
        );
        assert_eq!(
            matched_prefixes("13.34.32.1", &aws_ip_ranges),
            [
                ("13.34.0.0/16".to_string(), "AMAZON".to_string()),
                ("13.34.0.0/16".to_string(), "EC2".to_string()),
            ]
        );
    }

    #[test]
    fn test_prefix_boundaries() {
        let aws_ip_ranges = test_aws_ip_ranges();
        assert_eq!(matched_prefixes("52.94.0.0", &aws_ip_ranges).len(), 2);
        assert_eq!(matched_prefixes("52.94.3.255", &aws_ip_ranges).len(), 2);
        assert!(matched_prefixes("52.94.4.0", &aws_ip_ranges).is_empty());
        assert!(matched_prefixes("52.93.255.255", &aws_ip_ranges).is_empty());
        assert!(matched_prefixes("3.4.12.5", &aws_ip_ranges).is_empty());
    }

    #[test]
    fn test_ipv6_match() {
        let aws_ip_ranges = test_aws_ip_ranges();
        assert_eq!(
            matched_prefixes("2600:1f14:1fff::1", &aws_ip_ranges),
            [
                ("2600:1f14::/35".to_string(), "AMAZON".to_string()),
                ("2600:1f14::/35".to_string(), "EC2".to_string()),
            ]
        );
        assert!(matched_prefixes("2600:1f14:2000::1", &aws_ip_ranges).is_empty());
    }

    #[test]
    fn test_no_cross_version_matching() {
        let aws_ip_ranges = AwsIpRanges {
            prefixes: vec![test_aws_ip_prefix("0.0.0.0/0", "GLOBAL", "AMAZON", "GLOBAL")],
            ipv6_prefixes: vec![test_aws_ip_prefix("::/0", "GLOBAL", "AMAZON", "GLOBAL")],
            ..AwsIpRanges::default()
        };

        let ipv4_matches = find_matches("3.4.12.4".parse().unwrap(), &aws_ip_ranges);
        assert_eq!(ipv4_matches.len(), 1);
        assert_eq!(ipv4_matches[0].aws_ip_prefix.prefix, "0.0.0.0/0");

        let ipv6_matches = find_matches("2600:1f14::1".parse().unwrap(), &aws_ip_ranges);
        assert_eq!(ipv6_matches.len(), 1);
        assert_eq!(ipv6_matches[0].aws_ip_prefix.prefix, "::/0");
    }

    #[test]
    fn test_ipv6_text_in_ipv4_list_is_skipped() {
        let aws_ip_ranges = AwsIpRanges {
            prefixes: vec![
                test_aws_ip_prefix("::/0", "GLOBAL", "AMAZON", "GLOBAL"),
                test_aws_ip_prefix("3.0.0.0/8", "us-east-1", "AMAZON", "us-east-1"),
            ],
            ..AwsIpRanges::default()
        };
        assert_eq!(
            matched_prefixes("3.4.12.4", &aws_ip_ranges),
            [("3.0.0.0/8".to_string(), "AMAZON".to_string())]
        );
    }

    #[test]
    fn test_invalid_prefix_does_not_stop_scan() {
        let aws_ip_ranges = AwsIpRanges {
            prefixes: vec![
                test_aws_ip_prefix("13.34.0.0/16", "us-east-1", "AMAZON", "us-east-1"),
                test_aws_ip_prefix("13.34.0.0/99", "us-east-1", "EC2", "us-east-1"),
                test_aws_ip_prefix("13.34.0.0", "us-east-1", "S3", "us-east-1"),
                test_aws_ip_prefix("13.34.0.0/20", "us-east-1", "ROUTE53", "us-east-1"),
            ],
            ..AwsIpRanges::default()
        };
        assert_eq!(
            matched_prefixes("13.34.0.1", &aws_ip_ranges),
            [
                ("13.34.0.0/16".to_string(), "AMAZON".to_string()),
                ("13.34.0.0/20".to_string(), "ROUTE53".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_ranges() {
        let aws_ip_ranges = AwsIpRanges::default();
        assert!(find_matches("3.4.12.4".parse().unwrap(), &aws_ip_ranges).is_empty());
        assert!(find_matches("::1".parse().unwrap(), &aws_ip_ranges).is_empty());
    }
}
