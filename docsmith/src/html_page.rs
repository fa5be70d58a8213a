//! Standalone HTML page wrapper

/// Stylesheet embedded when no custom one is configured
pub const DEFAULT_STYLESHEET: &str = include_str!("default_style.css");

/// Wrap an HTML fragment into a complete page
///
/// # Parameters
/// * `title` - Plain-text page title
/// * `body` - Rendered HTML fragment
/// * `stylesheet` - CSS to embed; `None` uses [`DEFAULT_STYLESHEET`]
pub fn wrap_page(title: &str, body: &str, stylesheet: Option<&str>) -> String {
    let mut output = String::with_capacity(body.len() + 4096);

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(stylesheet.unwrap_or(DEFAULT_STYLESHEET));
    output.push_str("</style>\n");
    output.push_str("</head>\n");
    output.push_str("<body>\n<main>\n");
    output.push_str(body);
    if !body.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("</main>\n</body>\n</html>\n");

    output
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_wrap_page_escapes_title() {
        let page = wrap_page("A <b> title", "<p>body</p>", Some("p { color: red; }"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>A &lt;b&gt; title</title>"));
        assert!(page.contains("p { color: red; }"));
        assert!(page.contains("<main>\n<p>body</p>\n</main>"));
    }

    #[test]
    fn test_wrap_page_default_stylesheet() {
        let page = wrap_page("Docs", "", None);
        assert!(page.contains("font-family"));
    }
}
