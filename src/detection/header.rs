use crate::types::constants::{BOM, DEFAULT_COLUMN_NAME};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ .]+").unwrap());

static NON_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]").unwrap());

/// Map raw header text to a safe column identifier
pub fn normalize_header(raw: &str) -> String {
    let name = raw.trim();
    let name = name.strip_prefix(BOM).unwrap_or(name).trim();
    let name = SEPARATOR_RUN.replace_all(name, "_");
    let name = NON_IDENTIFIER.replace_all(&name, "");

    if name.is_empty() {
        DEFAULT_COLUMN_NAME.to_string()
    } else {
        name.into_owned()
    }
}

pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    raw.iter().map(|h| normalize_header(h)).collect()
}

/// Names that occur more than once, in first-seen order
pub fn duplicate_names(names: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for name in names {
        let count = seen.entry(name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(name.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_header() {
        assert_eq!(normalize_header("email"), "email");
        assert_eq!(normalize_header("  age  "), "age");
    }

    #[test]
    fn test_spaces_and_dots_collapse() {
        assert_eq!(normalize_header("first name"), "first_name");
        assert_eq!(normalize_header("No. of  items"), "No_of_items");
        assert_eq!(normalize_header("a . b"), "a_b");
    }

    #[test]
    fn test_strips_special_chars() {
        assert_eq!(normalize_header("price(€)"), "price");
        assert_eq!(normalize_header("e-mail"), "e-mail");
        assert_eq!(normalize_header("café"), "caf");
    }

    #[test]
    fn test_bom_removed() {
        assert_eq!(normalize_header("\u{FEFF}id"), "id");
        assert_eq!(normalize_header("\u{FEFF} id"), "id");
    }

    #[test]
    fn test_empty_becomes_col() {
        assert_eq!(normalize_header(""), "col");
        assert_eq!(normalize_header("   "), "col");
        assert_eq!(normalize_header("???"), "col");
    }

    #[test]
    fn test_duplicates_passed_through() {
        let raw = vec!["a b".to_string(), "a.b".to_string(), "c".to_string()];
        let names = normalize_headers(&raw);
        assert_eq!(names, vec!["a_b", "a_b", "c"]);
        assert_eq!(duplicate_names(&names), vec!["a_b"]);
    }

    #[test]
    fn test_no_duplicates() {
        let names = vec!["x".to_string(), "y".to_string()];
        assert!(duplicate_names(&names).is_empty());
    }
}
