use crate::types::constants::SEPARATORS;
use memchr::memchr;

/// Detect the field separator from the first line of the input.
/// The candidate with the highest count wins, ties go to `;` then `,` then tab.
pub fn detect_separator(text: &str) -> char {
    let line = first_line(text);

    let mut best = SEPARATORS[0];
    let mut best_count = count_separator(best, line);
    for &candidate in SEPARATORS.iter().skip(1) {
        let count = count_separator(candidate, line);
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Text before the first line terminator (`\n` or `\r\n`)
pub fn first_line(text: &str) -> &str {
    let line = match memchr(b'\n', text.as_bytes()) {
        Some(pos) => &text[..pos],
        None => text,
    };
    line.strip_suffix('\r').unwrap_or(line)
}

/// Count raw occurrences of a separator, quotes are not considered
pub fn count_separator(separator: char, line: &str) -> usize {
    line.chars().filter(|&c| c == separator).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_semicolon() {
        assert_eq!(detect_separator("a;b;c,d\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_comma_separator() {
        assert_eq!(detect_separator("a,b,c\n1;2;3;4;5"), ',');
    }

    #[test]
    fn test_detect_tab_separator() {
        assert_eq!(detect_separator("a\tb\tc,d\n"), '\t');
    }

    #[test]
    fn test_tie_prefers_semicolon() {
        assert_eq!(detect_separator("a;b,c"), ';');
        assert_eq!(detect_separator("header"), ';');
        assert_eq!(detect_separator(""), ';');
    }

    #[test]
    fn test_tie_comma_over_tab() {
        assert_eq!(detect_separator("a,b\tc"), ',');
    }

    #[test]
    fn test_only_first_line_counts() {
        assert_eq!(detect_separator("a,b\r\nx;y;z;w"), ',');
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("one\r\ntwo"), "one");
        assert_eq!(first_line("one\ntwo"), "one");
        assert_eq!(first_line("single"), "single");
    }
}
