pub mod gust_record;
pub mod outcome;
pub mod query_window;
pub mod year;
