//! Declaration scanner for the blockgen tools.
//!
//! This crate provides the lexical analysis phase:
//! - `Scanner` - splits one raw declaration into tokens
//! - `TokenKind` - classification used by the declaration parser
//! - `Token` - a classified slice of the raw declaration

use blockgen_common::Grammar;
use smallvec::SmallVec;

/// Most printed declarations split into fewer tokens than this.
pub const INLINE_TOKENS: usize = 16;

pub type TokenBuf<'a> = SmallVec<[Token<'a>; INLINE_TOKENS]>;

/// Token classes the declaration parser dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Nullability keyword (`nonnull`, `_Nullable`, ...).
    Qualifier,
    /// Method type qualifier (`in`, `out`, `inout`, `bycopy`, `byref`, `oneway`).
    MethodQualifier,
    /// C type qualifier (`const`, `volatile`).
    TypeQualifier,
    /// Pointer marker `*` (or `**`).
    Star,
    /// Selector-name fragment such as `tableView:`.
    ColonFragment,
    /// Start of a trailing `__attribute__` clause.
    AttributeMarker,
    /// Type or identifier.
    Plain,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Qualifier => "qualifier",
            TokenKind::MethodQualifier => "method-qualifier",
            TokenKind::TypeQualifier => "type-qualifier",
            TokenKind::Star => "star",
            TokenKind::ColonFragment => "colon-fragment",
            TokenKind::AttributeMarker => "attribute",
            TokenKind::Plain => "plain",
        }
    }
}

/// A classified token borrowed from the raw declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Splits declarations according to a [`Grammar`].
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'g> {
    grammar: &'g Grammar,
}

impl<'g> Scanner<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Split `raw` on the delimiter set, dropping empty tokens and the
    /// instance-method marker. Never fails; order is preserved.
    pub fn tokenize<'a>(&self, raw: &'a str) -> SmallVec<[&'a str; INLINE_TOKENS]> {
        raw.split(|ch: char| self.grammar.is_delimiter(ch))
            .filter(|token| !token.is_empty() && !self.grammar.is_instance_marker(token))
            .collect()
    }

    /// Classify a single token. Qualifiers and markers are exact matches and
    /// win over the colon test.
    pub fn classify(&self, token: &str) -> TokenKind {
        let grammar = self.grammar;
        if grammar.is_qualifier(token) {
            TokenKind::Qualifier
        } else if grammar.is_method_qualifier(token) {
            TokenKind::MethodQualifier
        } else if grammar.is_type_qualifier(token) {
            TokenKind::TypeQualifier
        } else if grammar.is_pointer(token) {
            TokenKind::Star
        } else if grammar.is_attribute_marker(token) {
            TokenKind::AttributeMarker
        } else if grammar.is_selector_fragment(token) {
            TokenKind::ColonFragment
        } else {
            TokenKind::Plain
        }
    }

    /// Tokenize and classify in one pass.
    pub fn scan<'a>(&self, raw: &'a str) -> TokenBuf<'a> {
        self.tokenize(raw)
            .into_iter()
            .map(|text| Token {
                text,
                kind: self.classify(text),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
