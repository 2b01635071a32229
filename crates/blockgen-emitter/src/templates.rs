//! Objective-C text templates.
//!
//! Each function renders one segment body. Guards are applied by the caller.

use blockgen_parser::BlockDescriptor;

use crate::guard::{accessor_name, callback_type_name, setter_name, storage_key_name};

// =============================================================================
// Header
// =============================================================================

pub(crate) fn header_banner(class_name: &str, protocol: &str) -> String {
    format!("//\n// {class_name}.h\n//\n\n// {protocol} Blocks typedefs\n\n")
}

pub(crate) fn callback_typedef(descriptor: &BlockDescriptor) -> String {
    let prototype = descriptor.prototype();
    let params = if prototype.is_empty() {
        "void"
    } else {
        prototype.as_str()
    };
    format!(
        "typedef {} (^{})({});\n",
        descriptor.return_type,
        callback_type_name(descriptor),
        params
    )
}

pub(crate) fn interface_begin(class_name: &str, protocol: &str) -> String {
    format!(
        "\n@interface {class_name} : NSObject\n\n\
         #pragma mark - class factory\n\n\
         + (instancetype)classFactory:(id)obj;\n\n\
         #pragma mark - {protocol} Blocks properties\n\n"
    )
}

pub(crate) fn property_declaration(descriptor: &BlockDescriptor) -> String {
    format!(
        "@property (copy, nonatomic) {} {};\n",
        callback_type_name(descriptor),
        accessor_name(descriptor)
    )
}

pub(crate) fn accessor_declarations(descriptor: &BlockDescriptor) -> String {
    let block_type = callback_type_name(descriptor);
    format!(
        "- (void){}:({block_type})block;\n- ({block_type}){};\n",
        setter_name(descriptor),
        accessor_name(descriptor)
    )
}

pub(crate) fn interface_end() -> String {
    "\n@end\n".to_string()
}

// =============================================================================
// Implementation
// =============================================================================

pub(crate) fn private_extension(class_name: &str, protocol: &str) -> String {
    format!(
        "\n//\n// {class_name}.m\n//\n\n\
         #import \"{class_name}.h\"\n\
         #import <objc/runtime.h>\n\n\
         @interface {class_name} () <{protocol}>\n\
         @end\n"
    )
}

pub(crate) fn implementation_begin(class_name: &str) -> String {
    format!("\n@implementation {class_name}\n\nstatic char {class_name}Key;\n")
}

pub(crate) fn storage_key(descriptor: &BlockDescriptor) -> String {
    format!("static char {};\n", storage_key_name(descriptor))
}

pub(crate) fn class_factory(class_name: &str) -> String {
    format!(
        "\n#pragma mark - class factory\n\n\
         + (instancetype)classFactory:(id)obj\n\
         {{\n\
         \x20 return ^({class_name} *blocks) {{\n\
         \x20   objc_setAssociatedObject(obj, &{class_name}Key, blocks, OBJC_ASSOCIATION_RETAIN_NONATOMIC);\n\
         \x20   return blocks;\n\
         \x20 }} ([{class_name} new]);\n\
         }}\n"
    )
}

pub(crate) fn bridges_begin(protocol: &str) -> String {
    format!("\n#pragma mark - {protocol}\n\n")
}

/// Typed-property bridge: the block lives in a synthesized property.
pub(crate) fn property_bridge(
    descriptor: &BlockDescriptor,
    signature: &str,
    default_value: &str,
) -> String {
    let accessor = accessor_name(descriptor);
    let args = descriptor.argument_list();
    if descriptor.returns_void() {
        format!(
            "{signature}\n{{\n  if (self.{accessor}) {{\n    self.{accessor}({args});\n  }}\n}}\n"
        )
    } else {
        format!(
            "{signature}\n{{\n  return self.{accessor} ? self.{accessor}({args}) : {default_value};\n}}\n"
        )
    }
}

/// Associated-storage bridge: explicit accessors over an associated object,
/// followed by the protocol method itself.
pub(crate) fn associated_bridge(
    descriptor: &BlockDescriptor,
    signature: &str,
    default_value: &str,
) -> String {
    let block_type = callback_type_name(descriptor);
    let accessor = accessor_name(descriptor);
    let setter = setter_name(descriptor);
    let key = storage_key_name(descriptor);
    let args = descriptor.argument_list();

    let mut out = format!(
        "- (void){setter}:({block_type})block\n\
         {{\n\
         \x20 objc_setAssociatedObject(self, &{key}, block, OBJC_ASSOCIATION_COPY_NONATOMIC);\n\
         }}\n\n\
         - ({block_type}){accessor}\n\
         {{\n\
         \x20 return objc_getAssociatedObject(self, &{key});\n\
         }}\n\n\
         {signature}\n\
         {{\n\
         \x20 {block_type} block = [self {accessor}];\n"
    );
    if descriptor.returns_void() {
        out.push_str(&format!("  if (block) {{\n    block({args});\n  }}\n"));
    } else {
        out.push_str(&format!("  return block ? block({args}) : {default_value};\n"));
    }
    out.push_str("}\n");
    out
}

pub(crate) fn implementation_end() -> String {
    "@end\n".to_string()
}
