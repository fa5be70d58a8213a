//! Inline formatting primitives

/// Surround text with a delimiter, e.g. `**` for bold
pub(crate) fn wrap(text: &str, delimiter: &str) -> String {
    format!("{delimiter}{text}{delimiter}")
}

/// Length of the longest run of `ch` in `text`
pub(crate) fn longest_run(text: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Inline code span that survives backticks inside the text
pub(crate) fn code_span(text: &str) -> String {
    let run = longest_run(text, '`');
    if run == 0 {
        return wrap(text, "`");
    }
    let fence = "`".repeat(run + 1);
    format!("{fence} {text} {fence}")
}

/// Escape characters that would break a table cell
pub(crate) fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run("no ticks", '`'), 0);
        assert_eq!(longest_run("a ``` b ` c", '`'), 3);
    }

    #[test]
    fn test_code_span() {
        assert_eq!(code_span("plain"), "`plain`");
        assert_eq!(code_span("uses ``double``"), "``` uses ``double`` ```");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
    }
}
