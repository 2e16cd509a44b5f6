use crate::core::aws_ip_ranges::AwsIpRanges;
use crate::core::errors::{Error, Result};
use log::{info, warn};
use std::env;

/*-------------------------------------------------------------------------------------------------
  Constants
-------------------------------------------------------------------------------------------------*/

const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ retrieves and parses the AWS IP Ranges using the default
/// client configuration, and returns an [AwsIpRanges] object that you can
/// [search](AwsIpRanges::search()) for addresses.
///
/// ```no_run
/// let aws_ip_ranges = awsipmatch::get_ranges()?;
///
/// let addresses = awsipmatch::resolve("3.4.12.4")?;
/// let search_results = aws_ip_ranges.search("3.4.12.4", &addresses);
/// for row in search_results.rows() {
///     println!("{} {} {}", row.prefix, row.region, row.services);
/// }
/// # Ok::<(), awsipmatch::Error>(())
/// ```
pub fn get_ranges() -> Result<AwsIpRanges> {
    Client::new().get_ranges()
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
///
/// ```
/// let client = awsipmatch::ClientBuilder::new()
///     .url("https://mirror.example.com/ip-ranges.json")
///     .build();
///
/// assert_eq!(client.url(), "https://mirror.example.com/ip-ranges.json");
/// ```
///
/// The [ClientBuilder::new] method sources the URL from the `AWSIPRANGES_URL` environment
/// variable when set. Use [ClientBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = awsipmatch::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// ```
    fn default() -> Self {
        Self {
            url: AWS_IP_RANGES_URL.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading the URL from the `AWSIPRANGES_URL` environment
    /// variable when set.
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("AWSIPRANGES_URL", default.url),
        }
    }

    /// Set the URL used to retrieve the AWS IP Ranges; defaults to
    /// `https://ip-ranges.amazonaws.com/ip-ranges.json` - see
    /// [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html)
    /// in the Amazon Virtual Private Cloud (VPC) User Guide for details.
    pub fn url<'s>(&'s mut self, url: &str) -> &'s mut Self {
        self.url = url.to_string();
        self
    }

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving the AWS IP Ranges. Each call to [Client::get_ranges] makes a single
/// HTTP GET request; there is no local cache and no retry.
///
/// ```no_run
/// let client = awsipmatch::Client::new();
/// let aws_ip_ranges = client.get_ranges()?;
/// # Ok::<(), awsipmatch::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    /// Create a new [Client] with default configuration values.
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /// Get the URL used to retrieve the AWS IP Ranges.
    ///
    /// ```
    /// let client = awsipmatch::Client::default();
    /// assert_eq!(client.url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// ```
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieve and parse the AWS IP Ranges.
    pub fn get_ranges(&self) -> Result<AwsIpRanges> {
        let json = self.get_json_from_url()?;
        let aws_ip_ranges = AwsIpRanges::from_json(&json)?;

        info!(
            "AWS IP Ranges: sync token {}, created {}, {} IPv4 prefix(es), {} IPv6 prefix(es)",
            aws_ip_ranges.sync_token(),
            aws_ip_ranges
                .create_date_utc()
                .map(|create_date| create_date.to_rfc3339())
                .unwrap_or_else(|| aws_ip_ranges.create_date().to_string()),
            aws_ip_ranges.prefixes().len(),
            aws_ip_ranges.ipv6_prefixes().len(),
        );

        Ok(aws_ip_ranges)
    }

    /// Get the AWS IP Ranges JSON from the URL.
    fn get_json_from_url(&self) -> Result<String> {
        info!("Get AWS IP Ranges from URL: GET {}", self.url);

        let response =
            reqwest::blocking::get(&self.url).map_err(|source| self.fetch_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus {
                url: self.url.clone(),
                status,
            });
        }

        let json = response.text().map_err(|source| self.fetch_error(source))?;
        info!("Get AWS IP Ranges from URL: {status}, {} bytes", json.len());

        Ok(json)
    }

    fn fetch_error(&self, source: reqwest::Error) -> Error {
        Error::Fetch {
            url: self.url.clone(),
            source,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
