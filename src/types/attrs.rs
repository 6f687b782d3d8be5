//! Attribute and style mappings.
//!
//! Both maps preserve insertion order, because rendered output follows the
//! order attributes were written in the source tree. Re-inserting an
//! existing key overwrites its value in place without moving it, which is
//! exactly the merge behaviour the normalizer needs when an explicit
//! attributes mapping overrides shorthand-derived `id`/`class` entries.

use crate::serialize::fmt_num;

/// An attribute value.
///
/// `Undefined` and `Bool(false)` both suppress the attribute entirely;
/// `Bool(true)` renders as a bare attribute name. `Style` survives only in
/// raw trees: the normalizer flattens it to its CSS string form.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Style(Style),
    Undefined,
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        Self::Num(n as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Style> for AttrValue {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

/// An insertion-ordered attribute map (name -> value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value for a name, if present.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Insert a value, overwriting in place if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style insert.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Merge another map into this one; entries from `other` win.
    pub fn extend(&mut self, other: &Attrs) {
        for (name, value) in other.iter() {
            self.insert(name.clone(), value.clone());
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, AttrValue)> {
        self.entries.iter()
    }
}

impl<S: Into<String>, V: Into<AttrValue>> FromIterator<(S, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// An insertion-ordered style map (CSS property -> value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    rules: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the map has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Insert a rule, overwriting in place if the property already exists.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.rules.iter_mut().find(|(p, _)| *p == property) {
            Some(rule) => rule.1 = value,
            None => self.rules.push((property, value)),
        }
    }

    /// Builder-style insert.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Iterate rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.rules.iter()
    }

    /// Flatten to a CSS declaration string.
    ///
    /// Rules join as `prop:value` separated by `;`, with a trailing `;`
    /// when any rule exists. An empty map flattens to an empty string.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (property, value) in &self.rules {
            css.push_str(property);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        css
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.insert(property, value);
        }
        style
    }
}

impl AttrValue {
    /// String form used when rendering `name="value"`.
    ///
    /// `Bool` and `Undefined` never reach this point during rendering;
    /// their string forms exist for diagnostics.
    pub fn to_value_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Num(n) => fmt_num(*n),
            Self::Bool(b) => b.to_string(),
            Self::Style(style) => style.to_css(),
            Self::Undefined => String::new(),
        }
    }
}
