/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod aws_ip_prefix;
pub mod aws_ip_ranges;
pub mod client;
pub mod datetime;
pub mod errors;
pub mod grouping;
pub mod json;
pub mod matcher;
pub mod prefix_type;
pub mod resolver;
pub mod search_results;
