//! blockgen: Objective-C protocol methods as assignable blocks.
//!
//! The pipeline is:
//!
//! 1. [`clang`] prints the protocol's method declarations (`clang -ast-print`)
//! 2. [`scanner`] and [`parser`] turn each declaration into a
//!    [`BlockDescriptor`](parser::BlockDescriptor)
//! 3. [`emitter`] renders the block typedefs, the holder class, and one
//!    guarded bridge per method
//!
//! [`pipeline::generate`] runs steps 2 and 3; the `blockgen` binary wires in
//! step 1, configuration and output.

pub use blockgen_common as common;
pub use blockgen_emitter as emitter;
pub use blockgen_parser as parser;
pub use blockgen_scanner as scanner;

pub mod clang;
pub mod cli;
pub mod pipeline;
pub mod tracing_config;
