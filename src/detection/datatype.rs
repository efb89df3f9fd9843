use crate::types::constants::{
    MAX_VARCHAR, SHORT_CODE_MAX_LEN, SHORT_CODE_RATIO, SIZED_VARCHAR_LIMIT, VARCHAR_PADDING,
};
use crate::types::ColumnType;
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]+)?)?$").unwrap()
});

static SHORT_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-/_]{1,10}$").unwrap());

pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

pub fn is_decimal(value: &str) -> bool {
    DECIMAL_REGEX.is_match(value)
}

pub fn is_iso_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

pub fn is_iso_datetime(value: &str) -> bool {
    DATETIME_REGEX.is_match(value)
}

/// Date-only or date-time
pub fn is_iso_timestamp(value: &str) -> bool {
    is_iso_date(value) || is_iso_datetime(value)
}

/// Narrow categorical codes like `C2`, `VI-A` or `HXSM04QG`
pub fn is_short_code(value: &str) -> bool {
    SHORT_CODE_REGEX.is_match(value)
}

/// Infer the SQL type of a column from its raw values.
/// Blank values are ignored; every remaining value must satisfy a tier for it to win.
pub fn detect_column_type<S: AsRef<str>>(values: &[S]) -> ColumnType {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        return ColumnType::Varchar(MAX_VARCHAR);
    }

    let tiers: [(fn(&str) -> bool, ColumnType); 4] = [
        (is_integer, ColumnType::Int),
        (is_decimal, ColumnType::Float),
        (is_iso_date, ColumnType::Date),
        (is_iso_timestamp, ColumnType::Timestamp),
    ];
    for (accepts, column_type) in tiers {
        if values.iter().all(|v| accepts(*v)) {
            return column_type;
        }
    }

    text_type(&values)
}

/// Size a VARCHAR from value lengths, measured in characters (Unicode scalar values)
fn text_type(values: &[&str]) -> ColumnType {
    let max_len = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
    let short_codes = values.iter().filter(|v| is_short_code(v)).count();
    let ratio = short_codes as f64 / values.len() as f64;

    if max_len <= SHORT_CODE_MAX_LEN && ratio >= SHORT_CODE_RATIO {
        ColumnType::Varchar(SHORT_CODE_MAX_LEN)
    } else if max_len <= SIZED_VARCHAR_LIMIT {
        ColumnType::varchar(max_len + VARCHAR_PADDING)
    } else {
        ColumnType::Varchar(MAX_VARCHAR)
    }
}

/// Infer one type per column of already normalized rows
pub fn detect_column_types(rows: &[Vec<String>], column_count: usize) -> Vec<ColumnType> {
    (0..column_count)
        .map(|col_idx| {
            let values: Vec<&str> = rows
                .iter()
                .filter_map(|row| row.get(col_idx).map(|s| s.as_str()))
                .collect();
            detect_column_type(&values)
        })
        .collect()
}
