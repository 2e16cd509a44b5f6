//! Check whether an IP address, or the addresses a hostname resolves to, fall inside the
//! published [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html).
//!
//! ```no_run
//! // Get the AWS IP Ranges
//! let aws_ip_ranges = awsipmatch::get_ranges()?;
//!
//! // Resolve an IP address or hostname
//! let addresses = awsipmatch::resolve("3.4.12.4")?;
//!
//! // Find the AWS IP Prefixes that contain the addresses
//! let search_results = aws_ip_ranges.search("3.4.12.4", &addresses);
//! for row in search_results.rows() {
//!     println!(
//!         "{} {} {} {} {}",
//!         row.address, row.prefix, row.region, row.services, row.network_border_group
//!     );
//! }
//! # Ok::<(), awsipmatch::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::aws_ip_prefix::AwsIpPrefix;
pub use crate::core::aws_ip_ranges::AwsIpRanges;
pub use crate::core::client::{get_ranges, Client, ClientBuilder};
pub use crate::core::errors::{Error, Result};
pub use crate::core::grouping::{group_matches, GroupedRow};
pub use crate::core::matcher::{find_matches, Match};
pub use crate::core::prefix_type::PrefixType;
pub use crate::core::resolver::{resolve, resolve_with, HostLookup, SystemLookup};
pub use crate::core::search_results::{AddressResults, SearchResults};

/*-------------------------------------------------------------------------------------------------
  Re-exports
-------------------------------------------------------------------------------------------------*/

pub use ipnetwork;
