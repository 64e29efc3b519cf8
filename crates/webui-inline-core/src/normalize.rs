//! Light minification of the web UI document.
//!
//! This is deliberately not an HTML minifier: it only normalizes line endings,
//! drops `<!-- ... -->` comments and removes blank lines and trailing
//! whitespace. Newlines are kept so inline JS and CSS stay valid without
//! statement terminators.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an HTML comment, non-greedy, across lines.
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML comment pattern is valid"));

/// Normalize a raw HTML document into the payload that gets embedded.
///
/// The result never contains an HTML comment, a blank line, or a line with
/// trailing whitespace, and always ends in exactly one `\n`.
pub fn light_minify(html: &str) -> String {
    let html = html.replace("\r\n", "\n").replace('\r', "\n");
    let html = HTML_COMMENT.replace_all(&html, "");

    let lines: Vec<&str> = html
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    let mut payload = lines.join("\n").trim().to_string();
    payload.push('\n');
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_and_blank_line_removed() {
        assert_eq!(light_minify("<!-- c -->\n<p>Hi</p>\n   \n"), "<p>Hi</p>\n");
    }

    #[test]
    fn test_line_endings_normalized() {
        let out = light_minify("<html>\r\n<body>\r</body>\r\n</html>");
        assert_eq!(out, "<html>\n<body>\n</body>\n</html>\n");
        assert!(!out.contains('\r'));
    }

    #[test]
    fn test_multiline_comment_removed() {
        let html = "<div>\n<!-- first\nsecond\nthird -->\n<span>x</span>\n</div>\n";
        assert_eq!(light_minify(html), "<div>\n<span>x</span>\n</div>\n");
    }

    #[test]
    fn test_comment_is_non_greedy() {
        let html = "<a><!-- one --></a>keep<!-- two --><b></b>";
        assert_eq!(light_minify(html), "<a></a>keep<b></b>\n");
    }

    #[test]
    fn test_unterminated_comment_is_kept() {
        let out = light_minify("<p>a</p>\n<!-- never closed\n<p>b</p>");
        assert!(out.contains("<!-- never closed"));
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        let out = light_minify("  <ul>  \n\t<li>a</li>\t\n</ul>   ");
        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
        assert_eq!(out, "<ul>\n\t<li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_no_blank_lines_and_single_trailing_newline() {
        let out = light_minify("\n\n<p>a</p>\n\n \t \n<p>b</p>\n\n\n");
        assert!(out.lines().all(|line| !line.trim().is_empty()));
        assert!(out.ends_with("</p>\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_indentation_inside_document_kept() {
        let out = light_minify("<script>\n    let x = 1;\n</script>\n");
        assert_eq!(out, "<script>\n    let x = 1;\n</script>\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(light_minify(""), "\n");
        assert_eq!(light_minify("<!-- only a comment -->\n  \n"), "\n");
    }
}
