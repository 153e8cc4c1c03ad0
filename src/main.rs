use log::info;
use noaa_gusts::{CdoConfig, GustFetcher, GustWriter, GustsError, DEFAULT_FILE_NAME};

#[tokio::main]
async fn main() -> Result<(), GustsError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let fetcher = GustFetcher::new(CdoConfig::from_env());
    let report = fetcher.fetch_wind_gusts().call().await;

    let failed = report.failed_years();
    if !failed.is_empty() {
        info!("Years without data after all attempts: {:?}", failed);
    }

    GustWriter::default()
        .save_to_csv(&report.into_records(), DEFAULT_FILE_NAME)
        .await?;
    Ok(())
}
