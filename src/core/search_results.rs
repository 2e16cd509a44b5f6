use crate::core::grouping::GroupedRow;
use std::net::IpAddr;

/*-------------------------------------------------------------------------------------------------
  Search Results
-------------------------------------------------------------------------------------------------*/

/// Search results for a target: the result rows for each address the target resolved to, in
/// resolution order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchResults {
    /// The IP address or hostname that was searched.
    pub target: String,

    /// Per-address results, including addresses that matched no AWS IP prefix.
    pub addresses: Vec<AddressResults>,
}

/// The grouped result rows for one resolved address; empty when the address matched no AWS
/// IP prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressResults {
    pub address: IpAddr,
    pub rows: Vec<GroupedRow>,
}

impl SearchResults {
    /// `true` when at least one address matched at least one AWS IP prefix.
    pub fn any_match(&self) -> bool {
        self.addresses
            .iter()
            .any(|address_results| !address_results.rows.is_empty())
    }

    /// All result rows, across addresses.
    pub fn rows(&self) -> impl Iterator<Item = &GroupedRow> {
        self.addresses
            .iter()
            .flat_map(|address_results| address_results.rows.iter())
    }

    /// Addresses that did not match any AWS IP prefix.
    pub fn addresses_not_found(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses
            .iter()
            .filter(|address_results| address_results.rows.is_empty())
            .map(|address_results| &address_results.address)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
