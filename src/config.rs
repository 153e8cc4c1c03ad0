//! Connection and query settings for the NOAA Climate Data Online (CDO) `data` endpoint.
//!
//! Every setting has a default, so the common case is
//! `CdoConfig::builder().token(token).build()`. Tests swap the endpoint and zero
//! the pauses through the same builder.

use bon::Builder;
use log::warn;
use std::env;
use std::time::Duration;

/// Default CDO v2 data endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.ncei.noaa.gov/cdo-web/api/v2/data";
/// Daily summaries dataset.
pub const DEFAULT_DATASET_ID: &str = "GHCND";
/// Miami International Airport.
pub const DEFAULT_STATION_ID: &str = "GHCND:USW00093193";
/// Fastest 2-minute wind speed.
pub const DEFAULT_DATATYPE_ID: &str = "WSF2";
pub const DEFAULT_UNITS: &str = "metric";
/// Largest page size the CDO API accepts.
pub const DEFAULT_LIMIT: u32 = 1000;

pub const DEFAULT_START_YEAR: i32 = 2015;
pub const DEFAULT_END_YEAR: i32 = 2023;

/// Environment variable holding the CDO access token.
pub const TOKEN_ENV_VAR: &str = "NOAA_CDO_TOKEN";
/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "NOAA_CDO_BASE_URL";

/// Settings for a [`crate::GustFetcher`].
///
/// # Examples
///
/// ```
/// use noaa_gusts::CdoConfig;
/// use std::time::Duration;
///
/// let config = CdoConfig::builder()
///     .token("my-token")
///     .retry_pause(Duration::ZERO)
///     .build();
/// assert_eq!(config.station_id, "GHCND:USW00093193");
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct CdoConfig {
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,
    /// Sent in the `token` request header.
    #[builder(default, into)]
    pub token: String,
    #[builder(default = DEFAULT_DATASET_ID.to_string(), into)]
    pub dataset_id: String,
    #[builder(default = DEFAULT_STATION_ID.to_string(), into)]
    pub station_id: String,
    #[builder(default = DEFAULT_DATATYPE_ID.to_string(), into)]
    pub datatype_id: String,
    #[builder(default = DEFAULT_UNITS.to_string(), into)]
    pub units: String,
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: u32,
    /// Upper bound for a single attempt, connect through body.
    #[builder(default = Duration::from_secs(10))]
    pub timeout: Duration,
    #[builder(default = 3)]
    pub max_attempts: u32,
    /// Pause after a transport failure or an unreadable body.
    #[builder(default = Duration::from_secs(1))]
    pub retry_pause: Duration,
    /// Pause after each year, regardless of its outcome.
    #[builder(default = Duration::from_millis(200))]
    pub year_pause: Duration,
}

impl Default for CdoConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CdoConfig {
    /// Builds the default configuration, taking the token from `NOAA_CDO_TOKEN`
    /// and the endpoint from `NOAA_CDO_BASE_URL` when set.
    pub fn from_env() -> Self {
        let token = env::var(TOKEN_ENV_VAR).unwrap_or_else(|_| {
            warn!(
                "{} is not set; requests will be sent without a token",
                TOKEN_ENV_VAR
            );
            String::new()
        });
        let base_url = env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::builder().token(token).base_url(base_url).build()
    }

    /// Query parameters shared by every request, before a date window is applied.
    pub(crate) fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("datasetid", self.dataset_id.clone()),
            ("stationid", self.station_id.clone()),
            ("datatypeid", self.datatype_id.clone()),
            ("units", self.units.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_miami_gust_query() {
        let config = CdoConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.dataset_id, "GHCND");
        assert_eq!(config.station_id, "GHCND:USW00093193");
        assert_eq!(config.datatype_id, "WSF2");
        assert_eq!(config.units, "metric");
        assert_eq!(config.limit, 1000);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_pause, Duration::from_secs(1));
        assert_eq!(config.year_pause, Duration::from_millis(200));
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_base_params_order_and_values() {
        let config = CdoConfig::builder()
            .station_id("GHCND:USW00012839")
            .limit(25)
            .build();

        let params = config.base_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["datasetid", "stationid", "datatypeid", "units", "limit"]);
        assert_eq!(params[1].1, "GHCND:USW00012839");
        assert_eq!(params[4].1, "25");
    }
}
