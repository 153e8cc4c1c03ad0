mod config;
mod error;
mod fetcher;
mod types;
mod utils;
mod writer;

#[cfg(test)]
mod test_server;

pub use config::*;
pub use error::GustsError;

pub use fetcher::error::FetchError;
pub use fetcher::gust_fetcher::GustFetcher;
pub use fetcher::request::FetchRequest;

pub use types::gust_record::{GustRecord, GustValue};
pub use types::outcome::{FetchReport, YearOutcome, YearReport};
pub use types::query_window::QueryWindow;
pub use types::year::Year;

pub use writer::csv_writer::{GustWriter, DEFAULT_FILE_NAME};
pub use writer::error::WriteError;
pub use writer::table::records_to_dataframe;
