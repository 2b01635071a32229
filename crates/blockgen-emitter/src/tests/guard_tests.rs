use super::*;

fn named(name: &str) -> BlockDescriptor {
    BlockDescriptor {
        return_type: "void".to_string(),
        name: name.to_string(),
        ..BlockDescriptor::default()
    }
}

#[test]
fn derived_names() {
    let d = named("TableViewDidSelectRowAtIndexPath");

    assert_eq!(guard_name(&d), "USE_TableViewDidSelectRowAtIndexPathBlock");
    assert_eq!(callback_type_name(&d), "TableViewDidSelectRowAtIndexPathBlock");
    assert_eq!(accessor_name(&d), "tableViewDidSelectRowAtIndexPathBlock");
    assert_eq!(setter_name(&d), "setTableViewDidSelectRowAtIndexPathBlock");
    assert_eq!(storage_key_name(&d), "TableViewDidSelectRowAtIndexPathBlockKey");
}

#[test]
fn equal_names_collide() {
    let a = BlockDescriptor {
        return_type: "BOOL".to_string(),
        ..named("DidChange")
    };
    let b = named("DidChange");

    assert_ne!(a, b);
    assert_eq!(guard_name(&a), guard_name(&b));
}

#[test]
fn lower_first_handles_edges() {
    assert_eq!(lower_first(""), "");
    assert_eq!(lower_first("A"), "a");
    assert_eq!(lower_first("URLSession"), "uRLSession");
}
