//! Objective-C emitter for block bridges.
//!
//! Given parsed [`BlockDescriptor`](blockgen_parser::BlockDescriptor)s and the
//! raw declarations they came from, renders a header and an implementation
//! for a class that adopts the protocol and forwards every method to an
//! assignable block:
//!
//! ```objc
//! #ifdef USE_TableViewDidSelectRowAtIndexPathBlock
//! - (void)tableView:(UITableView *)tableView didSelectRowAtIndexPath:(NSIndexPath *)indexPath
//! {
//!   TableViewDidSelectRowAtIndexPathBlock block = [self tableViewDidSelectRowAtIndexPathBlock];
//!   if (block) {
//!     block(tableView, indexPath);
//!   }
//! }
//! #endif
//! ```
//!
//! Every per-method unit is wrapped in a `USE_<Name>Block` guard so callers
//! compile in only the methods they need.

pub mod default_value;
pub mod emitter;
pub mod guard;
mod templates;

pub use default_value::{DefaultValueTable, NULL_OBJECT, default_for};
pub use emitter::{
    BlockEmitter, BridgeStrategy, EmitError, EmitOptions, Section, Segment, emit, render,
};
pub use guard::guard_name;
