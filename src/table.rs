use crate::error::{Csv2SqlError, Result};
use crate::scanner::Row;

/// Parsed table: a header row plus data rows normalized to the header width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Row,
    pub rows: Vec<Row>,
}

impl RawTable {
    /// Split scanned rows into header and data, then normalize the data rows
    pub fn from_rows(mut rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Csv2SqlError::EmptyInput("no rows found after parsing".to_string()));
        }

        let headers = rows.remove(0);
        normalize_rows(&mut rows, headers.len());
        Ok(RawTable { headers, rows })
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Pad short rows with empty fields and truncate long ones
pub fn normalize_rows(rows: &mut [Row], header_count: usize) {
    for row in rows.iter_mut() {
        row.resize(header_count, String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_short_row_padded() {
        let mut rows = vec![row(&["1", "2"])];
        normalize_rows(&mut rows, 3);
        assert_eq!(rows, vec![row(&["1", "2", ""])]);
    }

    #[test]
    fn test_long_row_truncated() {
        let mut rows = vec![row(&["1", "2", "3", "4", "5"])];
        normalize_rows(&mut rows, 3);
        assert_eq!(rows, vec![row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_from_rows() {
        let table = RawTable::from_rows(vec![
            row(&["id", "name", "age"]),
            row(&["1", "Alice"]),
            row(&["2", "Bob", "40", "extra"]),
        ])
        .unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], row(&["1", "Alice", ""]));
        assert_eq!(table.rows[1], row(&["2", "Bob", "40"]));
    }

    #[test]
    fn test_header_only() {
        let table = RawTable::from_rows(vec![row(&["a", "b"])]).unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_no_rows_is_empty_input() {
        let err = RawTable::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, Csv2SqlError::EmptyInput(_)));
    }
}
