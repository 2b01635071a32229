//! Raw declarations to generated Objective-C in one call.

use blockgen_common::Grammar;
use blockgen_emitter::{BlockEmitter, DefaultValueTable, EmitError, EmitOptions, Segment, render};
use blockgen_parser::{BlockDescriptor, parse_declarations};
use tracing::info_span;

/// Everything the core needs besides the declarations themselves.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub grammar: Grammar,
    pub defaults: DefaultValueTable,
    pub emit: EmitOptions,
}

impl GenerateOptions {
    /// Built-in tables for `protocol`, class name `<Protocol>Blocks`.
    pub fn for_protocol(protocol: impl Into<String>) -> Self {
        Self {
            grammar: Grammar::objc(),
            defaults: DefaultValueTable::objc(),
            emit: EmitOptions::for_protocol(protocol),
        }
    }
}

/// Result of a successful run.
#[derive(Clone, Debug)]
pub struct Generated {
    pub descriptors: Vec<BlockDescriptor>,
    pub segments: Vec<Segment>,
}

impl Generated {
    pub fn text(&self) -> String {
        render(&self.segments)
    }
}

/// Parse every declaration and emit the bridges. Either the whole batch
/// succeeds or nothing is produced.
pub fn generate<S>(declarations: &[S], options: &GenerateOptions) -> Result<Generated, EmitError>
where
    S: AsRef<str> + Sync,
{
    let _span = info_span!("generate", protocol = %options.emit.protocol).entered();

    let descriptors = parse_declarations(declarations, &options.grammar);
    let segments =
        BlockEmitter::new(&options.emit, &options.defaults).emit(&descriptors, declarations)?;

    Ok(Generated {
        descriptors,
        segments,
    })
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
