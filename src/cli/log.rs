use crate::cli::Args;
use awsipmatch::SearchResults;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Initialize Logging
--------------------------------------------------------------------------------------*/

pub fn init(args: &Args) {
    let mut logger = stderrlog::new();
    logger.module(env!("CARGO_CRATE_NAME"));

    match args.verbose.log_level() {
        // stderrlog verbosity 0 is errors only
        Some(level) => logger.verbosity(level as usize - 1),
        None => logger.quiet(true),
    };

    if let Err(error) = logger.init() {
        eprintln!("Unable to initialize logging: {error}");
    }
}

/*--------------------------------------------------------------------------------------
  Search Results
--------------------------------------------------------------------------------------*/

pub fn search_results(search_results: &SearchResults) {
    let count_addresses = search_results.addresses.len();
    info!(
        "Searched for {count_addresses} address(es) of {:?} in the AWS IP Ranges",
        search_results.target
    );

    let count_rows = search_results.rows().count();
    let count_addresses_found = count_addresses - search_results.addresses_not_found().count();
    if count_addresses_found > 0 {
        info!("Found {count_addresses_found} address(es) in {count_rows} AWS IP Prefix(es)");
    };

    for address in search_results.addresses_not_found() {
        warn!("Address not found in AWS IP ranges: {address}");
    }
}
