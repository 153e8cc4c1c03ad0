pub mod csv_writer;
pub mod error;
pub mod table;
