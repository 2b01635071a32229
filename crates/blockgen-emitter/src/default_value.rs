//! Default return values for bridged methods with no block assigned.

use rustc_hash::FxHashMap;

/// Literal returned for any type the table does not know.
pub const NULL_OBJECT: &str = "nil";

/// Built-in type spellings and their defaults.
pub const OBJC_DEFAULTS: &[(&str, &str)] = &[
    ("BOOL", "NO"),
    ("NSInteger", "0"),
    ("NSUInteger", "0"),
    ("CGFloat", "0"),
    ("NSString *", "@\"\""),
    ("NSString*", "@\"\""),
    ("CGSize", "CGSizeZero"),
    ("CGRect", "CGRectZero"),
    ("CGPoint", "CGPointZero"),
    ("UIEdgeInsets", "UIEdgeInsetsZero"),
    ("UITableViewCellEditingStyle", "UITableViewCellEditingStyleNone"),
    ("id", NULL_OBJECT),
];

/// Default for `ty` from the built-in table.
pub fn default_for(ty: &str) -> &'static str {
    let ty = ty.trim();
    OBJC_DEFAULTS
        .iter()
        .find(|(known, _)| *known == ty)
        .map_or(NULL_OBJECT, |&(_, value)| value)
}

/// Closed lookup table from return type to default expression.
///
/// Entries are fixed once the table is built; lookups never fail and fall
/// back to [`NULL_OBJECT`] (or a configured fallback).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultValueTable {
    entries: FxHashMap<String, String>,
    fallback: String,
}

impl DefaultValueTable {
    /// Empty table resolving everything to `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: FxHashMap::default(),
            fallback: fallback.into(),
        }
    }

    pub fn objc() -> Self {
        Self::new(NULL_OBJECT).with_entries(
            OBJC_DEFAULTS
                .iter()
                .map(|(ty, value)| ((*ty).to_string(), (*value).to_string())),
        )
    }

    pub fn with_entry(mut self, ty: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(ty.into().trim().to_string(), value.into());
        self
    }

    pub fn with_entries<I>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        entries
            .into_iter()
            .fold(self, |table, (ty, value)| table.with_entry(ty, value))
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Default expression for `ty`, ignoring surrounding whitespace.
    pub fn resolve(&self, ty: &str) -> &str {
        self.entries
            .get(ty.trim())
            .map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DefaultValueTable {
    fn default() -> Self {
        Self::objc()
    }
}

#[cfg(test)]
#[path = "tests/default_value_tests.rs"]
mod tests;
