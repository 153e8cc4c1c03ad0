//! Year-by-year retrieval of gust observations from the CDO `data` endpoint.

use crate::config::{CdoConfig, DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use crate::fetcher::error::FetchError;
use crate::fetcher::request::FetchRequest;
use crate::types::gust_record::GustRecord;
use crate::types::outcome::{FetchReport, YearOutcome, YearReport};
use crate::types::query_window::QueryWindow;
use crate::types::year::Year;
use bon::bon;
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct CdoResponse {
    // Absent when the window has no observations
    #[serde(default)]
    results: Option<Vec<Map<String, Value>>>,
}

/// Fetches one station's observations of one datatype over a range of years.
///
/// Years are requested one after another, each with up to
/// [`CdoConfig::max_attempts`] attempts. Failures never escape: a year whose
/// attempts are all used up contributes no records and is reported as
/// [`YearOutcome::Exhausted`] in the returned [`FetchReport`].
pub struct GustFetcher {
    config: CdoConfig,
    client: Client,
    base_params: Vec<(&'static str, String)>,
}

#[bon]
impl GustFetcher {
    pub fn new(config: CdoConfig) -> Self {
        let base_params = config.base_params();
        Self {
            config,
            client: Client::new(),
            base_params,
        }
    }

    /// Fetches every year in `start_year..=end_year`, ascending.
    ///
    /// # Arguments
    ///
    /// * `.start_year(i32)`: Optional. First year, inclusive. Defaults to `2015`.
    /// * `.end_year(i32)`: Optional. Last year, inclusive. Defaults to `2023`.
    ///
    /// An empty range (`start_year > end_year`) sends no requests.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use noaa_gusts::{CdoConfig, GustFetcher};
    /// # #[tokio::main]
    /// # async fn main() {
    /// let fetcher = GustFetcher::new(CdoConfig::from_env());
    /// let report = fetcher
    ///     .fetch_wind_gusts()
    ///     .start_year(2020)
    ///     .end_year(2021)
    ///     .call()
    ///     .await;
    /// println!("{} observations, failed years: {:?}", report.total_records(), report.failed_years());
    /// # }
    /// ```
    #[builder]
    pub async fn fetch_wind_gusts(
        &self,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> FetchReport {
        let start_year = start_year.unwrap_or(DEFAULT_START_YEAR);
        let end_year = end_year.unwrap_or(DEFAULT_END_YEAR);

        let mut report = FetchReport::default();
        for year in (start_year..=end_year).map(Year::from) {
            info!(
                "Fetching {} for station {} in {}",
                self.config.datatype_id, self.config.station_id, year
            );
            let outcome = match QueryWindow::for_year(year) {
                Some(window) => self.fetch_year(&window, &mut report.records).await,
                None => {
                    warn!("Year {} cannot be expressed as a date range, skipping", year);
                    YearOutcome::OutOfRange
                }
            };
            report.years.push(YearReport { year, outcome });

            tokio::time::sleep(self.config.year_pause).await;
        }

        info!(
            "Fetched {} observations over {} year(s), {} year(s) without a successful response",
            report.total_records(),
            report.years.len(),
            report.failed_years().len()
        );
        report
    }
}

impl GustFetcher {
    async fn fetch_year(&self, window: &QueryWindow, records: &mut Vec<GustRecord>) -> YearOutcome {
        let year = window.year();
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts {
            let request = FetchRequest::for_window(&self.base_params, window);
            match self.attempt(&request).await {
                Ok(batch) if batch.is_empty() => {
                    warn!("No {} data found for {}", self.config.datatype_id, year);
                    return YearOutcome::Empty { attempts: attempt };
                }
                Ok(batch) => {
                    let count = batch.len();
                    records.extend(batch);
                    info!("{} entries added for {}", count, year);
                    return YearOutcome::Fetched {
                        records: count,
                        attempts: attempt,
                    };
                }
                Err(e) => {
                    if e.pauses_before_retry() {
                        warn!(
                            "Attempt {}/{} for {} failed: {:?}",
                            attempt, self.config.max_attempts, year, e
                        );
                        tokio::time::sleep(self.config.retry_pause).await;
                    } else {
                        error!(
                            "Attempt {}/{} for {} failed: {}",
                            attempt, self.config.max_attempts, year, e
                        );
                    }
                    last_error = Some(e);
                }
            }
        }

        warn!(
            "Giving up on {} after {} attempt(s)",
            year, self.config.max_attempts
        );
        YearOutcome::Exhausted {
            attempts: self.config.max_attempts,
            last_error,
        }
    }

    async fn attempt(&self, request: &FetchRequest) -> Result<Vec<GustRecord>, FetchError> {
        let url = &self.config.base_url;
        debug!("GET {} {:?}", url, request.params());

        let response = self
            .client
            .get(url)
            .header("token", &self.config.token)
            .query(request.params())
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                url: url.clone(),
                status,
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest {
                url: url.clone(),
                source: e,
            })?;
        let parsed: CdoResponse =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::MalformedBody {
                url: url.clone(),
                source: e,
            })?;

        Ok(parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GustRecord::from)
            .collect())
    }
}
