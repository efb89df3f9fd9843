use crate::detection::datatype::{is_decimal, is_integer, is_iso_date, is_iso_timestamp};
use crate::types::ColumnType;

/// Double every single quote
pub fn escape_string(value: &str) -> String {
    value.replace('\'', "''")
}

fn quoted(value: &str) -> String {
    format!("'{}'", escape_string(value))
}

/// Render one raw cell as a SQL literal for its column type.
/// Values that do not fit the column's pattern fall back to a quoted string.
pub fn format_value(raw: &str, column_type: ColumnType) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return "NULL".to_string();
    }

    match column_type {
        ColumnType::Int if is_integer(value) => value.to_string(),
        ColumnType::Float if is_decimal(value) => value.to_string(),
        ColumnType::Date if is_iso_date(value) => quoted(value),
        ColumnType::Timestamp if is_iso_timestamp(value) => quoted(value),
        _ => quoted(value),
    }
}

/// `(v1, v2, ...)` for one row
pub fn format_row(row: &[String], types: &[ColumnType]) -> String {
    let values: Vec<String> = row
        .iter()
        .zip(types.iter())
        .map(|(cell, &column_type)| format_value(cell, column_type))
        .collect();
    format!("({})", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_null() {
        for column_type in [
            ColumnType::Int,
            ColumnType::Float,
            ColumnType::Date,
            ColumnType::Timestamp,
            ColumnType::Varchar(10),
        ] {
            assert_eq!(format_value("", column_type), "NULL");
            assert_eq!(format_value("   ", column_type), "NULL");
        }
    }

    #[test]
    fn test_numbers_unquoted() {
        assert_eq!(format_value(" 42 ", ColumnType::Int), "42");
        assert_eq!(format_value("-3.5", ColumnType::Float), "-3.5");
        assert_eq!(format_value("7", ColumnType::Float), "7");
    }

    #[test]
    fn test_dates_quoted() {
        assert_eq!(format_value("2024-01-01", ColumnType::Date), "'2024-01-01'");
        assert_eq!(
            format_value("2024-01-01 10:00", ColumnType::Timestamp),
            "'2024-01-01 10:00'"
        );
    }

    #[test]
    fn test_string_escaped() {
        assert_eq!(format_value("O'Brien", ColumnType::Varchar(10)), "'O''Brien'");
        assert_eq!(format_value("it''s", ColumnType::Varchar(10)), "'it''''s'");
    }

    #[test]
    fn test_stray_value_falls_back_to_string() {
        assert_eq!(format_value("n/a", ColumnType::Int), "'n/a'");
        assert_eq!(format_value("1.5", ColumnType::Int), "'1.5'");
        assert_eq!(format_value("later", ColumnType::Date), "'later'");
    }

    #[test]
    fn test_format_row() {
        let row = vec!["2".to_string(), "Bob".to_string(), "".to_string()];
        let types = [ColumnType::Int, ColumnType::Varchar(10), ColumnType::Int];
        assert_eq!(format_row(&row, &types), "(2, 'Bob', NULL)");
    }
}
