use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors that terminate an `awsipmatch` run.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line is missing the target argument. Built by the `awsipmatch` binary,
    /// which carries the rendered usage line.
    #[error("{0}")]
    Usage(String),

    /// The HTTP request for the AWS IP Ranges failed in transport.
    #[error("Error fetching AWS IP ranges from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The AWS IP Ranges URL responded with a non-success status.
    #[error("Error fetching AWS IP ranges from {url}: HTTP {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The AWS IP Ranges document is not valid JSON or does not match the expected schema.
    #[error("Error parsing AWS IP ranges: {0}")]
    Parse(#[from] serde_json::Error),

    /// DNS resolution of a hostname failed.
    #[error("Error resolving {host}: {source}")]
    Resolution {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// DNS resolution succeeded but returned no addresses.
    #[error("No IP addresses found for {host}")]
    NoAddresses { host: String },

    /// Every address resolved cleanly, but none of them matched an AWS IP prefix.
    #[error("No AWS IP ranges found for {target}")]
    NoMatch { target: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error saving CSV file: {0}")]
    Csv(#[from] csv::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
