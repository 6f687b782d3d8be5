//! Tag shorthand parsing.
//!
//! Tags can be written in "Zencoding" convention, combining element name,
//! id, and classes in one token:
//!
//! ```text
//! div           -> <div>
//! div#foo       -> <div id="foo">
//! div.bar.baz   -> <div class="bar baz">
//! div#foo.bar   -> <div id="foo" class="bar">
//! ```
//!
//! The grammar is `tag(#id)?(.class(.class)*)?`: the id segment, when
//! present, must precede the class segment; whitespace and repeated `#`
//! are rejected anywhere. Consecutive dots are legal in the class segment
//! and each dot becomes one space in the rendered `class` value.

use crate::error::{Result, SprigError};

/// The resolved pieces of a tag shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts {
    /// Plain element name.
    pub name: String,

    /// Extracted `#id` fragment, if present.
    pub id: Option<String>,

    /// Extracted class fragments with dots already replaced by spaces,
    /// ready to use as the `class` attribute value.
    pub class: Option<String>,
}

/// Parse a tag shorthand string into its parts.
///
/// Fails with [`SprigError::InvalidTag`] on anything outside the grammar:
/// whitespace, an empty segment, a second `#`, or an id segment after the
/// class segment.
pub fn parse_tag(tag: &str) -> Result<TagParts> {
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        return Err(invalid(tag));
    }

    let hash = tag.find('#');
    let dot = tag.find('.');

    // The id segment must come before the class segment.
    if let (Some(h), Some(d)) = (hash, dot) {
        if d < h {
            return Err(invalid(tag));
        }
    }

    let name_end = match (hash, dot) {
        (Some(h), Some(d)) => h.min(d),
        (Some(h), None) => h,
        (None, Some(d)) => d,
        (None, None) => tag.len(),
    };
    if name_end == 0 {
        return Err(invalid(tag));
    }
    let name = tag[..name_end].to_string();

    let id = match hash {
        Some(h) => {
            let id_end = dot.unwrap_or(tag.len());
            let id = &tag[h + 1..id_end];
            if id.is_empty() || id.contains('#') {
                return Err(invalid(tag));
            }
            Some(id.to_string())
        }
        None => None,
    };

    let class = match dot {
        Some(d) => {
            let classes = &tag[d + 1..];
            if classes.is_empty() || classes.contains('#') {
                return Err(invalid(tag));
            }
            Some(classes.replace('.', " "))
        }
        None => None,
    };

    Ok(TagParts { name, id, class })
}

fn invalid(tag: &str) -> SprigError {
    SprigError::InvalidTag {
        found: tag.to_string(),
        help: Some("expected tag(#id)?(.class.class...)? with no whitespace".to_string()),
    }
}
