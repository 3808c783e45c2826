//! Markup stripping for raw source text.

/// Marker strings removed from every text field before tokenization.
///
/// Removal is plain substring replacement, not markup parsing: a marker
/// appearing inside otherwise meaningful text is stripped all the same.
/// `</code` (no closing `>`) is intentional.
const MARKUP: [&str; 14] = [
    "<code>",
    "</code",
    "<p>",
    "</p>",
    "<pre>",
    "</pre>",
    "<blockquote>",
    "</blockquote>",
    "\n",
    "<em>",
    "</em>",
    "<strong>",
    "</strong>",
    "\t",
];

/// Strip markup markers, newlines and tabs from a raw text block.
///
/// Pure function: absent markers are no-ops, nothing else is touched.
pub fn clean_text(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for marker in MARKUP {
        cleaned = cleaned.replace(marker, "");
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn strips_tags() {
        // the unbalanced `</code` marker leaves the closing `>` behind
        let raw = "<p>use <code>foo()</code> instead</p>";
        assert_eq!(clean_text(raw), "use foo()> instead");
    }

    #[test]
    fn strips_control_chars() {
        assert_eq!(clean_text("a\nb\tc"), "abc");
    }

    #[test]
    fn strips_markers_inside_words() {
        // substring semantics: the marker disappears even mid-word
        assert_eq!(clean_text("ab<p>cd"), "abcd");
    }

    #[test]
    fn untouched_when_clean() {
        assert_eq!(clean_text("already clean text"), "already clean text");
    }
}
