//! Common types for the blockgen declaration tools.
//!
//! This crate provides the tables shared by the scanner and the parser:
//! - `Grammar` - delimiters, markers, qualifier keywords and type prefixes
//!   describing the printed Objective-C method declaration grammar

// Grammar tables injected into the scanner and parser
pub mod grammar;
pub use grammar::Grammar;
