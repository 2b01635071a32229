//! Finite-state parser for printed method declarations.
//!
//! The scan is a single left-to-right pass over the classified tokens. The
//! state tracks which field the next token feeds:
//!
//! ```text
//! ReturnType ─► ReturnTypeContinuation ─┬─► NameOrType ─► ExpectParamType ◄─► ExpectParamName
//!                                       └──────────────► ExpectParamType
//! any state ── __attribute__ ──► Terminated
//! ```
//!
//! `- (UITableViewCell *)tableView:(UITableView *)tableView cellForRowAtIndexPath:(NSIndexPath *)indexPath`
//! becomes return type `UITableViewCell *`, name `TableViewCellForRowAtIndexPath`,
//! prototype `UITableView *tableView, NSIndexPath *indexPath` and arguments
//! `tableView, indexPath`.

use blockgen_common::Grammar;
use blockgen_scanner::{Scanner, Token, TokenKind};
use rayon::prelude::*;
use tracing::{Level, debug_span, trace, warn};

use crate::descriptor::{BlockDescriptor, Parameter};

/// Parser states. Each names the field the next meaningful token feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting for the first type token.
    ReturnType,
    /// After the first type token: a pointer, a second type word, or the name.
    ReturnTypeContinuation,
    /// Return type closed by a pointer; more pointers or the name follow.
    NameOrType,
    /// Inside the selector, expecting a parameter type or a selector fragment.
    ExpectParamType,
    /// A parameter type was read, expecting its name.
    ExpectParamName,
    /// An attribute clause was reached; remaining tokens are ignored.
    Terminated,
}

#[derive(Default)]
struct DescriptorBuilder {
    return_type: String,
    name: String,
    parameters: Vec<Parameter>,
    arguments: Vec<String>,
    /// Leading type qualifiers waiting for the type word they qualify.
    pending: String,
}

impl DescriptorBuilder {
    /// `const` + `char` -> `const char`.
    fn qualified(&mut self, word: &str) -> String {
        let mut ty = std::mem::take(&mut self.pending);
        ty.push_str(word);
        ty
    }

    fn hold_qualifier(&mut self, qualifier: &str) {
        self.pending.push_str(qualifier);
        self.pending.push(' ');
    }

    fn finish(self, truncated: bool) -> BlockDescriptor {
        BlockDescriptor {
            return_type: self.return_type,
            name: self.name,
            parameters: self.parameters,
            arguments: self.arguments,
            truncated,
        }
    }
}

/// Parses classified tokens into [`BlockDescriptor`]s.
#[derive(Clone, Copy, Debug)]
pub struct DeclarationParser<'g> {
    grammar: &'g Grammar,
    scanner: Scanner<'g>,
}

impl<'g> DeclarationParser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            scanner: Scanner::new(grammar),
        }
    }

    /// Scan and parse one raw declaration.
    pub fn parse_declaration(&self, raw: &str) -> BlockDescriptor {
        let tokens = self.scanner.scan(raw);
        self.parse(&tokens)
    }

    /// Parse one declaration's tokens. Never fails: unexpected shapes leave
    /// fields empty instead.
    pub fn parse(&self, tokens: &[Token<'_>]) -> BlockDescriptor {
        let mut state = ParseState::ReturnType;
        let mut builder = DescriptorBuilder::default();

        for (pos, token) in tokens.iter().enumerate() {
            let next = tokens.get(pos + 1);
            let next_state = self.step(state, token, next, &mut builder);
            if tracing::enabled!(Level::TRACE) {
                trace!(
                    pos,
                    kind = token.kind.name(),
                    token = token.text,
                    from = ?state,
                    to = ?next_state,
                    "declaration token"
                );
            }
            state = next_state;
            if state == ParseState::Terminated {
                break;
            }
        }

        builder.finish(state == ParseState::Terminated)
    }

    fn step(
        &self,
        state: ParseState,
        token: &Token<'_>,
        next: Option<&Token<'_>>,
        out: &mut DescriptorBuilder,
    ) -> ParseState {
        use ParseState::*;

        if token.kind == TokenKind::AttributeMarker {
            return Terminated;
        }
        // Qualifiers never fill a role, in any state.
        if token.kind == TokenKind::Qualifier {
            return state;
        }

        match state {
            ReturnType => match token.kind {
                TokenKind::MethodQualifier => ReturnType,
                TokenKind::TypeQualifier => {
                    out.hold_qualifier(token.text);
                    ReturnType
                }
                TokenKind::Star => {
                    append_pointer(&mut out.return_type, token.text);
                    ReturnType
                }
                _ => {
                    out.return_type = out.qualified(token.text);
                    ReturnTypeContinuation
                }
            },
            ReturnTypeContinuation => match token.kind {
                TokenKind::Star => {
                    append_pointer(&mut out.return_type, token.text);
                    NameOrType
                }
                TokenKind::TypeQualifier => {
                    append_word(&mut out.return_type, token.text);
                    ReturnTypeContinuation
                }
                TokenKind::Plain if self.continues_return_type(token, next) => {
                    append_word(&mut out.return_type, token.text);
                    NameOrType
                }
                _ => {
                    out.name = self.selector_fragment(token.text);
                    ExpectParamType
                }
            },
            NameOrType => match token.kind {
                TokenKind::Star => {
                    append_pointer(&mut out.return_type, token.text);
                    NameOrType
                }
                TokenKind::TypeQualifier => {
                    append_word(&mut out.return_type, token.text);
                    NameOrType
                }
                _ => {
                    out.name = self.selector_fragment(token.text);
                    ExpectParamType
                }
            },
            ExpectParamType => match token.kind {
                TokenKind::ColonFragment => {
                    out.name.push_str(&self.selector_fragment(token.text));
                    ExpectParamType
                }
                TokenKind::MethodQualifier => ExpectParamType,
                TokenKind::TypeQualifier => {
                    out.hold_qualifier(token.text);
                    ExpectParamType
                }
                TokenKind::Star => {
                    if let Some(param) = out.parameters.last_mut() {
                        append_pointer(&mut param.ty, token.text);
                    }
                    ExpectParamType
                }
                _ => {
                    let ty = out.qualified(token.text);
                    out.parameters.push(Parameter::new(ty));
                    ExpectParamName
                }
            },
            ExpectParamName => match token.kind {
                TokenKind::ColonFragment => {
                    out.name.push_str(&self.selector_fragment(token.text));
                    ExpectParamType
                }
                TokenKind::Star => {
                    if let Some(param) = out.parameters.last_mut() {
                        append_pointer(&mut param.ty, token.text);
                    }
                    ExpectParamName
                }
                TokenKind::TypeQualifier => {
                    if let Some(param) = out.parameters.last_mut() {
                        append_word(&mut param.ty, token.text);
                    }
                    ExpectParamName
                }
                _ => {
                    if !self.grammar.is_excluded_argument(token.text) {
                        out.arguments.push(token.text.to_string());
                    }
                    if let Some(param) = out.parameters.last_mut() {
                        param.name = Some(token.text.to_string());
                    }
                    ExpectParamType
                }
            },
            Terminated => Terminated,
        }
    }

    /// A library-type word right after the first type token extends the
    /// return type (`__kindof UIView *`), unless it is the last word before
    /// the end or an attribute clause, where it can only be the selector.
    fn continues_return_type(&self, token: &Token<'_>, next: Option<&Token<'_>>) -> bool {
        self.grammar.has_type_prefix(token.text)
            && next.is_some_and(|t| t.kind != TokenKind::AttributeMarker)
    }

    /// `tableView:` -> `TableView`. A bare `:` has no text of its own and
    /// becomes the grammar's anonymous fragment, so a selector always yields
    /// a non-empty name.
    pub fn selector_fragment(&self, token: &str) -> String {
        let trimmed = match token.chars().next_back() {
            Some(ch) if self.grammar.is_fragment_artifact(ch) => &token[..token.len() - ch.len_utf8()],
            _ => token,
        };
        let mut chars = trimmed.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None if token.is_empty() => String::new(),
            None => self.grammar.anonymous_fragment.clone(),
        }
    }
}

/// `NSString` -> `NSString *`, `NSError *` -> `NSError **`.
fn append_pointer(ty: &mut String, marker: &str) {
    if !ty.is_empty() && !ty.ends_with('*') {
        ty.push(' ');
    }
    ty.push_str(marker);
}

/// `char *` + `const` -> `char * const`.
fn append_word(ty: &mut String, word: &str) {
    if !ty.is_empty() {
        ty.push(' ');
    }
    ty.push_str(word);
}

/// Parse a batch of raw declarations.
///
/// Declarations are independent, so they are parsed in parallel; the result
/// keeps input order, which the emitter relies on to pair descriptor `n`
/// with declaration `n`.
pub fn parse_declarations<S>(raws: &[S], grammar: &Grammar) -> Vec<BlockDescriptor>
where
    S: AsRef<str> + Sync,
{
    let _span = debug_span!("parse_declarations", count = raws.len()).entered();
    let parser = DeclarationParser::new(grammar);

    raws.par_iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            let descriptor = parser.parse_declaration(raw);
            if descriptor.is_malformed() {
                warn!(index, raw, "malformed declaration, emitting partial descriptor");
            }
            descriptor
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
