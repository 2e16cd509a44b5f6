use awsipmatch::ipnetwork::IpNetwork;
use awsipmatch::{PrefixType, Result};

fn main() -> Result<()> {
    // Get the AWS IP Ranges
    let aws_ip_ranges = awsipmatch::get_ranges()?;
    println!(
        "sync token {} created {}",
        aws_ip_ranges.sync_token(),
        aws_ip_ranges.create_date()
    );

    // Resolve a hostname and find the AWS IP Prefixes containing its addresses
    let addresses = awsipmatch::resolve("ip-ranges.amazonaws.com")?;
    let search_results = aws_ip_ranges.search("ip-ranges.amazonaws.com", &addresses);
    for row in search_results.rows() {
        println!("{:?}", row);
    }

    // Match a single address without grouping
    let address = "3.4.12.4".parse().unwrap();
    for m in awsipmatch::find_matches(address, &aws_ip_ranges) {
        println!("{} {:?}", m.address, m.aws_ip_prefix);
    }

    // Count the IPv4 prefixes that parse as networks
    let networks: Vec<IpNetwork> = aws_ip_ranges
        .prefixes_of(PrefixType::IPv4)
        .iter()
        .filter_map(|aws_ip_prefix| aws_ip_prefix.network(PrefixType::IPv4))
        .collect();
    println!("{} IPv4 networks", networks.len());

    Ok(())
}
