use crate::writer::error::WriteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GustsError {
    #[error(transparent)]
    Write(#[from] WriteError),
}
