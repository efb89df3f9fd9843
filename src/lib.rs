pub mod config;
pub mod converter;
pub mod detection;
pub mod error;
pub mod output;
pub mod scanner;
pub mod sql;
pub mod table;
pub mod types;

pub use config::{Config, ConversionOptions};
pub use converter::{convert, Conversion, ConversionReport, Converter};
pub use error::{Csv2SqlError, Result};
pub use output::{run_request, ShellRequest, ShellResponse};
pub use types::{Column, ColumnType, ErrorKind, Schema};
