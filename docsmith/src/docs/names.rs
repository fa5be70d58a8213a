//! Titles derived from file names

use regex::Regex;
use std::sync::LazyLock;

/// Ordering prefix such as `01_` or `02.03_`
static ORDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*_").expect("static regex is valid"));

/// Turn a file stem into a title
///
/// Examples:
///   "02_getting-started" -> "Getting Started"
///   "01.02_api_reference" -> "Api Reference"
pub fn humanize(stem: &str) -> String {
    let without_prefix = ORDER_PREFIX.replace(stem, "");

    without_prefix
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("02_getting-started"), "Getting Started");
        assert_eq!(humanize("01.02_api_reference"), "Api Reference");
        assert_eq!(humanize("changelog"), "Changelog");
        assert_eq!(humanize("README"), "README");
    }

    #[test]
    fn test_humanize_keeps_numbers_without_separator() {
        assert_eq!(humanize("2024-notes"), "2024 Notes");
    }
}
