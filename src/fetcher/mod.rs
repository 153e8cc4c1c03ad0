pub mod error;
pub mod gust_fetcher;
pub mod request;
