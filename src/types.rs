use serde_repr::Serialize_repr;
use std::fmt;

/// SQL column type inferred for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Float,
    Date,
    Timestamp,
    /// Bounded text, length always within `MIN_VARCHAR..=MAX_VARCHAR`
    Varchar(usize),
}

impl ColumnType {
    /// Build a VARCHAR clamped to the supported length range
    pub fn varchar(len: usize) -> Self {
        ColumnType::Varchar(len.clamp(constants::MIN_VARCHAR, constants::MAX_VARCHAR))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int => write!(f, "INT"),
            ColumnType::Float => write!(f, "FLOAT"),
            ColumnType::Date => write!(f, "DATE"),
            ColumnType::Timestamp => write!(f, "TIMESTAMP"),
            ColumnType::Varchar(n) => write!(f, "VARCHAR({})", n),
        }
    }
}

/// One schema entry: normalized column name and its inferred type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

/// Ordered columns, one per header
pub type Schema = Vec<Column>;

/// Error codes reported to shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum ErrorKind {
    Usage = 1,      // Missing or invalid arguments
    Io = 2,         // Input unreadable or output unwritable
    EmptyInput = 3, // Nothing to convert
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Usage => "Missing input file",
            ErrorKind::Io => "Could not read the input file or write the SQL file",
            ErrorKind::EmptyInput => "CSV file is empty or unreadable",
        }
    }
}

/// Constants
pub mod constants {
    /// Candidate separators in tie-breaking priority order
    pub const SEPARATORS: [char; 3] = [';', ',', '\t'];

    pub const QUOTE: char = '"';

    pub const BOM: char = '\u{FEFF}';

    /// Identifier used when a header normalizes to nothing
    pub const DEFAULT_COLUMN_NAME: &str = "col";

    pub const MIN_VARCHAR: usize = 10;
    pub const MAX_VARCHAR: usize = 255;

    /// Values up to this length get a sized VARCHAR instead of the maximum
    pub const SIZED_VARCHAR_LIMIT: usize = 50;
    pub const VARCHAR_PADDING: usize = 5;

    pub const SHORT_CODE_MAX_LEN: usize = 10;
    pub const SHORT_CODE_RATIO: f64 = 0.6;

    pub const SURROGATE_ID_NAME: &str = "id";
    pub const SURROGATE_ID_COLUMN: &str = "id INT AUTO_INCREMENT PRIMARY KEY";

    pub const DEFAULT_OUTPUT_PATH: &str = "output/output.sql";

    pub const GENERATED_BANNER: &str = "-- Generated by csv2sql";

    /// Inputs up to this size get a quick UTF-8 validity check before chardetng
    pub const CHARSET_GUESS_SIZE: usize = 5120;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::Int.to_string(), "INT");
        assert_eq!(ColumnType::Timestamp.to_string(), "TIMESTAMP");
        assert_eq!(ColumnType::Varchar(42).to_string(), "VARCHAR(42)");
    }

    #[test]
    fn test_varchar_clamped() {
        assert_eq!(ColumnType::varchar(3), ColumnType::Varchar(10));
        assert_eq!(ColumnType::varchar(300), ColumnType::Varchar(255));
        assert_eq!(ColumnType::varchar(37), ColumnType::Varchar(37));
    }
}
