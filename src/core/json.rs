use crate::core::errors::Result;
use serde::Deserialize;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonIpRanges> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

// Prefixes are kept as text; they are parsed (or skipped) when matching.

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpRanges {
    #[serde(rename = "syncToken")]
    pub sync_token: String,

    #[serde(rename = "createDate")]
    pub create_date: String,

    pub prefixes: Vec<JsonIpPrefix>,

    pub ipv6_prefixes: Vec<JsonIpv6Prefix>,
}

/*--------------------------------------------------------------------------------------
  JSON IP (IPv4) Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpPrefix {
    pub ip_prefix: String,
    pub region: String,
    pub network_border_group: String,
    pub service: String,
}

/*--------------------------------------------------------------------------------------
  JSON IPv6 Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonIpv6Prefix {
    pub ipv6_prefix: String,
    pub region: String,
    pub network_border_group: String,
    pub service: String,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
