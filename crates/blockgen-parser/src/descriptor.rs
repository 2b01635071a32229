//! Block descriptors produced by the declaration parser.

use serde::Serialize;
use std::fmt;

/// Return type spelling that selects the void bridging template.
pub const VOID_TYPE: &str = "void";

/// One parameter of a declared method.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter type, pointer markers included (`NSIndexPath *`).
    pub ty: String,
    /// Parameter name. `None` when the declaration ended before the name.
    pub name: Option<String>,
}

impl Parameter {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
        }
    }
}

impl fmt::Display for Parameter {
    /// `UITableView *tableView`, `NSInteger section`, or the bare type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) if self.ty.ends_with('*') => write!(f, "{}{}", self.ty, name),
            Some(name) => write!(f, "{} {}", self.ty, name),
            None => f.write_str(&self.ty),
        }
    }
}

/// Structured form of one protocol method declaration.
///
/// Descriptors are created once by the parser and never mutated afterwards.
/// Descriptor `n` of a batch always corresponds to raw declaration `n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDescriptor {
    pub return_type: String,
    /// PascalCase base name for the callback type and accessors.
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Parameter names forwarded to the callback, in declaration order.
    pub arguments: Vec<String>,
    /// The scan stopped at a trailing attribute clause.
    pub truncated: bool,
}

impl BlockDescriptor {
    pub fn returns_void(&self) -> bool {
        self.return_type == VOID_TYPE
    }

    /// Comma-separated parameter list for the callback typedef.
    pub fn prototype(&self) -> String {
        join(self.parameters.iter().map(|p| p.to_string()))
    }

    /// Comma-separated call arguments for invoking the callback.
    pub fn argument_list(&self) -> String {
        self.arguments.join(", ")
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.ty.as_str())
    }

    /// Missing a name or a return type. Still emitted, but worth a warning.
    pub fn is_malformed(&self) -> bool {
        self.name.is_empty() || self.return_type.is_empty()
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&part);
    }
    out
}
