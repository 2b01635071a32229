//! Grammar tables for compiler-printed method declarations.
//!
//! `clang -ast-print` prints each protocol method on one line:
//!
//! ```text
//! - (UITableViewCell *)tableView:(UITableView *)tableView cellForRowAtIndexPath:(NSIndexPath *)indexPath
//! ```
//!
//! The grammar has no formal token set. Tokens are whatever falls between
//! the delimiters, and their meaning is recovered from a handful of fixed
//! tables. Those tables live here as plain data so a caller (or a test) can
//! substitute its own.

use serde::{Deserialize, Serialize};

/// Immutable lexical tables for the declaration grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grammar {
    /// Characters that split a declaration into tokens.
    pub delimiters: String,
    /// Leading token marking an instance method. Dropped by the scanner.
    pub instance_marker: String,
    /// Nullability keywords. Matched exactly and skipped by the parser.
    pub qualifiers: Vec<String>,
    /// Method type qualifiers (`inout`, `bycopy`, ...). Only meaningful in
    /// front of a return or parameter type, and skipped there.
    pub method_qualifiers: Vec<String>,
    /// C type qualifiers. Kept as part of the type they qualify.
    pub type_qualifiers: Vec<String>,
    /// Prefixes of library types that may continue a return type.
    pub type_prefixes: Vec<String>,
    /// Prefixes of parameter names that are kept out of the call arguments.
    pub argument_exclusion_prefixes: Vec<String>,
    /// Token that starts a trailing compiler attribute clause.
    pub attribute_marker: String,
    /// Pointer marker token.
    pub pointer_marker: String,
    /// Character ending a selector-name fragment.
    pub selector_terminator: char,
    /// Trailing characters stripped from selector-name fragments.
    pub fragment_artifacts: String,
    /// Stands in for an unnamed selector part such as the bare `:` in
    /// `- (void)set:(id)a :(id)b`.
    pub anonymous_fragment: String,
}

impl Grammar {
    /// Tables for clang's Objective-C printer.
    pub fn objc() -> Self {
        Self {
            delimiters: " ()".to_string(),
            instance_marker: "-".to_string(),
            qualifiers: [
                "nonnull",
                "nullable",
                "null_unspecified",
                "_Nonnull",
                "_Nullable",
                "_Null_unspecified",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            method_qualifiers: ["in", "out", "inout", "bycopy", "byref", "oneway"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            type_qualifiers: vec!["const".to_string(), "volatile".to_string()],
            type_prefixes: vec!["NS".to_string(), "UI".to_string(), "id".to_string()],
            argument_exclusion_prefixes: vec!["NS".to_string(), "UI".to_string()],
            attribute_marker: "__attribute__".to_string(),
            pointer_marker: "*".to_string(),
            selector_terminator: ':',
            fragment_artifacts: ":;".to_string(),
            anonymous_fragment: "Arg".to_string(),
        }
    }

    #[inline]
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(ch)
    }

    #[inline]
    pub fn is_instance_marker(&self, token: &str) -> bool {
        token == self.instance_marker
    }

    /// Exact keyword match; `nonnullable` is not a qualifier.
    pub fn is_qualifier(&self, token: &str) -> bool {
        self.qualifiers.iter().any(|q| q == token)
    }

    pub fn is_method_qualifier(&self, token: &str) -> bool {
        self.method_qualifiers.iter().any(|q| q == token)
    }

    pub fn is_type_qualifier(&self, token: &str) -> bool {
        self.type_qualifiers.iter().any(|q| q == token)
    }

    /// `*`, or a run of markers such as `**`.
    pub fn is_pointer(&self, token: &str) -> bool {
        !self.pointer_marker.is_empty()
            && !token.is_empty()
            && token.trim_start_matches(self.pointer_marker.as_str()).is_empty()
    }

    #[inline]
    pub fn is_attribute_marker(&self, token: &str) -> bool {
        token == self.attribute_marker
    }

    #[inline]
    pub fn is_selector_fragment(&self, token: &str) -> bool {
        token.contains(self.selector_terminator)
    }

    /// Whether `token` names a library type that can extend a return type.
    pub fn has_type_prefix(&self, token: &str) -> bool {
        self.type_prefixes.iter().any(|p| token.starts_with(p.as_str()))
    }

    /// Whether a parameter name is left out of the forwarded call arguments.
    pub fn is_excluded_argument(&self, name: &str) -> bool {
        self.argument_exclusion_prefixes
            .iter()
            .any(|p| name.starts_with(p.as_str()))
    }

    #[inline]
    pub fn is_fragment_artifact(&self, ch: char) -> bool {
        self.fragment_artifacts.contains(ch)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::objc()
    }
}

#[cfg(test)]
#[path = "tests/grammar_tests.rs"]
mod tests;
