//! Declaration parser for the blockgen tools.
//!
//! Turns one compiler-printed method declaration into one [`BlockDescriptor`]:
//! the return type, a PascalCase name built from the selector fragments, the
//! parameter list, and the names forwarded to the callback.
//!
//! The printed grammar is irregular, so the parser never rejects input. A
//! declaration it cannot make sense of produces a partially filled
//! descriptor (see [`BlockDescriptor::is_malformed`]).

pub mod descriptor;
pub mod parser;

pub use descriptor::{BlockDescriptor, Parameter};
pub use parser::{DeclarationParser, ParseState, parse_declarations};
