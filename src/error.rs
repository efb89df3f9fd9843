use crate::types::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Csv2SqlError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Could not read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),
}

impl Csv2SqlError {
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            Csv2SqlError::Usage(_) => ErrorKind::Usage,
            Csv2SqlError::ReadInput { .. } => ErrorKind::Io,
            Csv2SqlError::WriteOutput { .. } => ErrorKind::Io,
            Csv2SqlError::EmptyInput(_) => ErrorKind::EmptyInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Csv2SqlError>;
