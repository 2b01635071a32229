//! Segment emission and rendering.
//!
//! Emission walks the descriptor list once per section, in a fixed order:
//!
//! 1. callback typedefs
//! 2. callback holders (properties or accessor declarations)
//! 3. private protocol extension
//! 4. storage keys
//! 5. class factory
//! 6. bridging implementations
//!
//! Every per-method segment carries its `USE_<Name>Block` guard; the rest are
//! unconditional.

use blockgen_parser::BlockDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, debug_span, trace};

use crate::default_value::DefaultValueTable;
use crate::guard::guard_name;
use crate::templates;

/// How the generated class stores each block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeStrategy {
    /// Associated objects keyed by one `static char` per method, with
    /// explicit setter/getter pairs.
    #[default]
    #[serde(rename = "associated")]
    AssociatedStorage,
    /// One `@property (copy, nonatomic)` per method.
    #[serde(rename = "property")]
    TypedProperty,
}

impl BridgeStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeStrategy::AssociatedStorage => "associated",
            BridgeStrategy::TypedProperty => "property",
        }
    }

    pub fn uses_storage_keys(&self) -> bool {
        matches!(self, BridgeStrategy::AssociatedStorage)
    }
}

impl fmt::Display for BridgeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifiers supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Protocol the generated class adopts.
    pub protocol: String,
    /// Name of the generated class.
    pub class_name: String,
    pub strategy: BridgeStrategy,
}

impl EmitOptions {
    /// Options for `protocol` with the conventional `<Protocol>Blocks` class.
    pub fn for_protocol(protocol: impl Into<String>) -> Self {
        let protocol = protocol.into();
        Self {
            class_name: format!("{protocol}Blocks"),
            protocol,
            strategy: BridgeStrategy::default(),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_strategy(mut self, strategy: BridgeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Output section a segment belongs to, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    HeaderBanner,
    CallbackTypes,
    InterfaceBegin,
    CallbackHolders,
    InterfaceEnd,
    PrivateExtension,
    ImplementationBegin,
    StorageKeys,
    ClassFactory,
    BridgesBegin,
    Bridges,
    ImplementationEnd,
}

/// One unit of generated text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub section: Section,
    /// Feature symbol wrapping the body, if any.
    pub guard: Option<String>,
    pub body: String,
}

impl Segment {
    fn plain(section: Section, body: String) -> Self {
        Self {
            section,
            guard: None,
            body,
        }
    }

    fn guarded(section: Section, descriptor: &BlockDescriptor, body: String) -> Self {
        Self {
            section,
            guard: Some(guard_name(descriptor)),
            body,
        }
    }

    pub fn render_into(&self, out: &mut String) {
        match &self.guard {
            Some(guard) => {
                out.push_str("#ifdef ");
                out.push_str(guard);
                out.push('\n');
                out.push_str(&self.body);
                out.push_str("#endif\n");
            }
            None => out.push_str(&self.body),
        }
        if self.section == Section::Bridges {
            out.push('\n');
        }
    }
}

/// Descriptor and declaration lists that cannot be paired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmitError {
    IndexMismatch {
        descriptors: usize,
        declarations: usize,
    },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::IndexMismatch {
                descriptors,
                declarations,
            } => write!(
                f,
                "cannot pair {descriptors} block descriptors with {declarations} raw declarations"
            ),
        }
    }
}

impl std::error::Error for EmitError {}

/// Renders block bridges for one protocol.
#[derive(Clone, Copy, Debug)]
pub struct BlockEmitter<'a> {
    options: &'a EmitOptions,
    defaults: &'a DefaultValueTable,
}

impl<'a> BlockEmitter<'a> {
    pub fn new(options: &'a EmitOptions, defaults: &'a DefaultValueTable) -> Self {
        Self { options, defaults }
    }

    /// Emit all segments. `declarations[n]` is echoed as the signature of
    /// `descriptors[n]`'s bridge, so the lengths must match.
    pub fn emit<S: AsRef<str>>(
        &self,
        descriptors: &[BlockDescriptor],
        declarations: &[S],
    ) -> Result<Vec<Segment>, EmitError> {
        if descriptors.len() != declarations.len() {
            return Err(EmitError::IndexMismatch {
                descriptors: descriptors.len(),
                declarations: declarations.len(),
            });
        }

        let EmitOptions {
            protocol,
            class_name,
            strategy,
        } = self.options;
        let _span = debug_span!("emit", protocol = %protocol, class = %class_name).entered();
        debug!(count = descriptors.len(), strategy = strategy.name(), "emitting block bridges");

        let mut segments = Vec::with_capacity(descriptors.len() * 4 + 10);

        segments.push(Segment::plain(
            Section::HeaderBanner,
            templates::header_banner(class_name, protocol),
        ));
        for d in descriptors {
            segments.push(Segment::guarded(
                Section::CallbackTypes,
                d,
                templates::callback_typedef(d),
            ));
        }

        segments.push(Segment::plain(
            Section::InterfaceBegin,
            templates::interface_begin(class_name, protocol),
        ));
        for d in descriptors {
            let body = match strategy {
                BridgeStrategy::TypedProperty => templates::property_declaration(d),
                BridgeStrategy::AssociatedStorage => templates::accessor_declarations(d),
            };
            segments.push(Segment::guarded(Section::CallbackHolders, d, body));
        }
        segments.push(Segment::plain(Section::InterfaceEnd, templates::interface_end()));

        segments.push(Segment::plain(
            Section::PrivateExtension,
            templates::private_extension(class_name, protocol),
        ));

        segments.push(Segment::plain(
            Section::ImplementationBegin,
            templates::implementation_begin(class_name),
        ));
        if strategy.uses_storage_keys() {
            for d in descriptors {
                segments.push(Segment::guarded(
                    Section::StorageKeys,
                    d,
                    templates::storage_key(d),
                ));
            }
        }

        segments.push(Segment::plain(
            Section::ClassFactory,
            templates::class_factory(class_name),
        ));

        segments.push(Segment::plain(
            Section::BridgesBegin,
            templates::bridges_begin(protocol),
        ));
        for (d, raw) in descriptors.iter().zip(declarations) {
            let default_value = if d.returns_void() {
                ""
            } else {
                self.defaults.resolve(&d.return_type)
            };
            trace!(
                name = %d.name,
                return_type = %d.return_type,
                args = %d.argument_list(),
                default_value,
                "bridge"
            );
            let body = match strategy {
                BridgeStrategy::TypedProperty => {
                    templates::property_bridge(d, raw.as_ref(), default_value)
                }
                BridgeStrategy::AssociatedStorage => {
                    templates::associated_bridge(d, raw.as_ref(), default_value)
                }
            };
            segments.push(Segment::guarded(Section::Bridges, d, body));
        }

        segments.push(Segment::plain(
            Section::ImplementationEnd,
            templates::implementation_end(),
        ));

        Ok(segments)
    }
}

/// Emit with explicit options and defaults table.
pub fn emit<S: AsRef<str>>(
    descriptors: &[BlockDescriptor],
    declarations: &[S],
    options: &EmitOptions,
    defaults: &DefaultValueTable,
) -> Result<Vec<Segment>, EmitError> {
    BlockEmitter::new(options, defaults).emit(descriptors, declarations)
}

/// Concatenate segments into the final artifact.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.body.len() + 32).sum());
    for segment in segments {
        segment.render_into(&mut out);
    }
    out
}

#[cfg(test)]
#[path = "tests/emitter_tests.rs"]
mod tests;
