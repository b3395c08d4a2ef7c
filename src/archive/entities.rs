//! Minimal HTML entity decoding applied to the captured document
//!
//! Exactly eight entities are recognized. Anything else, including other
//! named and numeric entities, is left untouched on purpose.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    // Hardcoded and syntactically valid; a parse failure is a compile-time bug.
    static ref ENTITY_PATTERN: Regex = Regex::new(r"&[#A-Za-z0-9_]+;")
        .expect("BUG: hardcoded entity pattern is invalid");
}

fn decode_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "&amp;" => Some("&"),
        "&lt;" => Some("<"),
        "&gt;" => Some(">"),
        "&quot;" => Some("\""),
        "&#39;" => Some("'"),
        "&#x2F;" => Some("/"),
        "&#x60;" => Some("`"),
        "&#x3D;" => Some("="),
        _ => None,
    }
}

/// Decode the eight supported entities in `text`
#[must_use]
pub fn decode_basic_entities(text: &str) -> Cow<'_, str> {
    ENTITY_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        let entity = &caps[0];
        decode_entity(entity).unwrap_or(entity).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supported_entities() {
        assert_eq!(
            decode_basic_entities("&amp;&lt;&gt;&quot;&#39;&#x2F;&#x60;&#x3D;"),
            "&<>\"'/`="
        );
    }

    #[test]
    fn test_other_entities_are_left_alone() {
        assert_eq!(
            decode_basic_entities("&nbsp;&copy;&#169;&#x27;&AMP;"),
            "&nbsp;&copy;&#169;&#x27;&AMP;"
        );
    }

    #[test]
    fn test_single_pass_decoding() {
        assert_eq!(decode_basic_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(decode_basic_entities("no entities"), Cow::Borrowed(_)));
    }
}
