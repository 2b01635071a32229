//! Names derived from a descriptor: guard symbol, block type, accessors and
//! storage key.
//!
//! All of them are pure functions of `name`. Two descriptors with the same
//! name get the same guard; protocols are expected to have unique selectors.

use blockgen_parser::BlockDescriptor;

/// `USE_<Name>Block`, the symbol gating one method's generated code.
pub fn guard_name(descriptor: &BlockDescriptor) -> String {
    format!("USE_{}Block", descriptor.name)
}

/// `<Name>Block`
pub fn callback_type_name(descriptor: &BlockDescriptor) -> String {
    format!("{}Block", descriptor.name)
}

/// `<name>Block`, the property or getter name.
pub fn accessor_name(descriptor: &BlockDescriptor) -> String {
    format!("{}Block", lower_first(&descriptor.name))
}

pub fn setter_name(descriptor: &BlockDescriptor) -> String {
    format!("set{}Block", descriptor.name)
}

/// `<Name>BlockKey`, the associated-object key.
pub fn storage_key_name(descriptor: &BlockDescriptor) -> String {
    format!("{}BlockKey", descriptor.name)
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/guard_tests.rs"]
mod tests;
