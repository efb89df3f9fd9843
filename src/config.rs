use crate::error::{Csv2SqlError, Result};
use crate::types::constants::DEFAULT_OUTPUT_PATH;
use std::path::{Path, PathBuf};

/// Options consumed by the conversion core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub table_name: String,
    /// Rows per INSERT statement, 0 disables batching
    pub batch_size: usize,
    /// Prepend a surrogate `id` column to the CREATE TABLE statement
    pub with_id: bool,
}

impl ConversionOptions {
    pub fn new(table_name: impl Into<String>) -> Self {
        ConversionOptions {
            table_name: table_name.into(),
            batch_size: 0,
            with_id: false,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_surrogate_id(mut self, with_id: bool) -> Self {
        self.with_id = with_id;
        self
    }

    pub fn is_batched(&self) -> bool {
        self.batch_size > 0
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub options: ConversionOptions,
}

impl Config {
    /// Build a configuration, filling defaults for the table name and output path
    pub fn new(
        input_path: impl Into<PathBuf>,
        table_name: Option<String>,
        output_path: Option<PathBuf>,
    ) -> Result<Self> {
        let input_path = input_path.into();
        if input_path.as_os_str().is_empty() {
            return Err(Csv2SqlError::Usage("input path is required".to_string()));
        }

        let table_name = match table_name.filter(|t| !t.trim().is_empty()) {
            Some(name) => name,
            None => default_table_name(&input_path)?,
        };

        Ok(Config {
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            input_path,
            options: ConversionOptions::new(table_name),
        })
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.options.batch_size = batch_size;
        self
    }

    pub fn with_surrogate_id(mut self, with_id: bool) -> Self {
        self.options.with_id = with_id;
        self
    }
}

/// Input file name without its last extension
pub fn default_table_name(input_path: &Path) -> Result<String> {
    let name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Csv2SqlError::Usage(format!(
                "cannot derive a table name from {}",
                input_path.display()
            ))
        })?;

    // "data.csv" -> "data", ".csv" -> "", "archive.tar.gz" -> "archive.tar"
    let stem = match name.rfind('.') {
        Some(pos) => name[..pos].to_string(),
        None => name,
    };

    if stem.is_empty() {
        return Err(Csv2SqlError::Usage(format!(
            "cannot derive a table name from {}, pass one explicitly",
            input_path.display()
        )));
    }
    Ok(stem)
}

/// Parse a `--batch` value. Anything but a positive integer disables batching,
/// the whole value must be numeric so `10rows` disables it too.
pub fn parse_batch_size(value: &str) -> usize {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_name() {
        assert_eq!(default_table_name(Path::new("data/people.csv")).unwrap(), "people");
        assert_eq!(default_table_name(Path::new("export")).unwrap(), "export");
        assert_eq!(
            default_table_name(Path::new("archive.tar.gz")).unwrap(),
            "archive.tar"
        );
    }

    #[test]
    fn test_default_table_name_hidden_file() {
        assert!(default_table_name(Path::new(".csv")).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("in/cities.csv", None, None).unwrap();
        assert_eq!(config.options.table_name, "cities");
        assert_eq!(config.output_path, PathBuf::from("output/output.sql"));
        assert_eq!(config.options.batch_size, 0);
        assert!(!config.options.with_id);
    }

    #[test]
    fn test_config_explicit_values() {
        let config = Config::new(
            "in/cities.csv",
            Some("towns".to_string()),
            Some(PathBuf::from("towns.sql")),
        )
        .unwrap()
        .with_batch_size(500)
        .with_surrogate_id(true);

        assert_eq!(config.options.table_name, "towns");
        assert_eq!(config.output_path, PathBuf::from("towns.sql"));
        assert!(config.options.is_batched());
        assert!(config.options.with_id);
    }

    #[test]
    fn test_config_requires_input() {
        let err = Config::new("", None, None).unwrap_err();
        assert!(matches!(err, Csv2SqlError::Usage(_)));
    }

    #[test]
    fn test_parse_batch_size() {
        assert_eq!(parse_batch_size("500"), 500);
        assert_eq!(parse_batch_size("0"), 0);
        assert_eq!(parse_batch_size("-3"), 0);
        assert_eq!(parse_batch_size("lots"), 0);
        assert_eq!(parse_batch_size("10rows"), 0);
        assert_eq!(parse_batch_size(" 25 "), 25);
        assert_eq!(parse_batch_size(""), 0);
    }
}
