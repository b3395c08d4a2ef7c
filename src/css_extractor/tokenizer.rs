//! `url(...)` reference scanning
//!
//! The scanner is deliberately pattern based: an optional quote, the
//! shortest run of characters, an optional quote, then `)`. Nested
//! parentheses and quoted data URIs containing quotes can mis-parse.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    // Hardcoded and syntactically valid; a parse failure is a compile-time bug.
    static ref CSS_URL_PATTERN: Regex = Regex::new(r#"url\(['"]?(.+?)['"]?\)"#)
        .expect("BUG: hardcoded CSS url() pattern is invalid");
}

/// One `url(...)` occurrence in a block of CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssUrlToken<'a> {
    /// Byte range of the whole `url(...)` occurrence
    pub span: Range<usize>,
    /// Reference inside the parentheses, quotes excluded
    pub reference: &'a str,
}

/// Finds `url(...)` references in CSS text
#[derive(Debug, Clone, Copy, Default)]
pub struct CssUrlTokenizer;

impl CssUrlTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// All `url(...)` occurrences in encounter order
    #[must_use]
    pub fn tokens<'a>(&self, css: &'a str) -> Vec<CssUrlToken<'a>> {
        CSS_URL_PATTERN
            .captures_iter(css)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let reference = caps.get(1)?;
                Some(CssUrlToken {
                    span: whole.range(),
                    reference: reference.as_str(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(css: &str) -> Vec<&str> {
        CssUrlTokenizer::new()
            .tokens(css)
            .into_iter()
            .map(|t| t.reference)
            .collect()
    }

    #[test]
    fn test_quote_styles() {
        let css = r#"a{background:url(a.png)} b{background:url('b.png')} c{background:url("c.png")}"#;
        assert_eq!(references(css), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_query_is_part_of_reference() {
        assert_eq!(
            references("body{background:url('img/b.png?x=1')}"),
            vec!["img/b.png?x=1"]
        );
    }

    #[test]
    fn test_span_covers_whole_occurrence() {
        let css = "x{src:url('f.woff2')}";
        let tokens = CssUrlTokenizer::new().tokens(css);
        assert_eq!(&css[tokens[0].span.clone()], "url('f.woff2')");
    }

    #[test]
    fn test_nested_parentheses_mis_parse() {
        // Known limitation of the pattern scanner.
        assert_eq!(references("a{b:url(x(1).png)}"), vec!["x(1"]);
    }
}
