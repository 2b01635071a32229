//! Declaration text in, Objective-C text out.

use blockgen_common::Grammar;
use blockgen_emitter::{
    BridgeStrategy, DefaultValueTable, EmitOptions, Section, emit, guard_name, render,
};
use blockgen_parser::parse_declarations;

fn generate(declarations: &[&str], strategy: BridgeStrategy) -> String {
    let descriptors = parse_declarations(declarations, &Grammar::objc());
    let options = EmitOptions::for_protocol("UITableViewDelegate").with_strategy(strategy);
    let segments =
        emit(&descriptors, declarations, &options, &DefaultValueTable::objc()).expect("emit");
    render(&segments)
}

#[test]
fn zero_argument_boolean_method() {
    let raw = "- (BOOL)canBecomeFocused";
    let text = generate(&[raw], BridgeStrategy::AssociatedStorage);

    assert!(
        text.contains("#ifdef USE_CanBecomeFocusedBlock\ntypedef BOOL (^CanBecomeFocusedBlock)(void);\n#endif\n"),
        "typedef missing: {text}"
    );
    assert!(text.contains("- (BOOL)canBecomeFocused\n{\n"));
    assert!(text.contains("  return block ? block() : NO;\n"));
}

#[test]
fn single_pointer_parameter_void_method() {
    let raw = "- (void)didSelectRowAtIndexPath:(NSIndexPath *)indexPath";
    let text = generate(&[raw], BridgeStrategy::AssociatedStorage);

    assert!(text.contains(
        "typedef void (^DidSelectRowAtIndexPathBlock)(NSIndexPath *indexPath);"
    ));
    assert!(text.contains("#ifdef USE_DidSelectRowAtIndexPathBlock\n"));
    assert!(text.contains("  if (block) {\n    block(indexPath);\n  }\n"));
    assert!(!text.contains("return block ?"), "void bridge must not return: {text}");
}

#[test]
fn shared_selector_names_collide() {
    let declarations = [
        "- (void)didChange:(NSString *)value",
        "- (void)didChange:(NSNumber *)value",
    ];
    let descriptors = parse_declarations(&declarations, &Grammar::objc());

    assert_eq!(descriptors[0].name, descriptors[1].name);
    assert_eq!(guard_name(&descriptors[0]), guard_name(&descriptors[1]));

    let text = generate(&declarations, BridgeStrategy::TypedProperty);
    assert_eq!(text.matches("#ifdef USE_DidChangeBlock\n").count(), 6);
}

#[test]
fn non_void_methods_fall_back_to_table_defaults() {
    let declarations = [
        "- (CGFloat)tableView:(UITableView *)tableView heightForRowAtIndexPath:(NSIndexPath *)indexPath",
        "- (nullable UIView *)tableView:(UITableView *)tableView viewForHeaderInSection:(NSInteger)section",
        "- (UITableViewCellEditingStyle)tableView:(UITableView *)tableView editingStyleForRowAtIndexPath:(NSIndexPath *)indexPath",
    ];
    let text = generate(&declarations, BridgeStrategy::TypedProperty);

    assert!(text.contains(
        "self.tableViewHeightForRowAtIndexPathBlock(tableView, indexPath) : 0;"
    ));
    assert!(text.contains(
        "self.tableViewViewForHeaderInSectionBlock(tableView, section) : nil;"
    ));
    assert!(text.contains(": UITableViewCellEditingStyleNone;"));
}

#[test]
fn truncated_declaration_still_echoes_full_signature() {
    let raw = "- (BOOL)tableView:(UITableView *)tableView shouldHighlightRowAtIndexPath:(NSIndexPath *)indexPath __attribute__((availability(ios,introduced=6.0)))";
    let text = generate(&[raw], BridgeStrategy::AssociatedStorage);

    assert!(text.contains(&format!("{raw}\n{{\n")));
    assert!(text.contains("block(tableView, indexPath) : NO;"));
}

#[test]
fn malformed_declaration_degrades_into_guarded_output() {
    let declarations = ["- (void)", "- (void)reloadData"];
    let descriptors = parse_declarations(&declarations, &Grammar::objc());
    let options = EmitOptions::for_protocol("Reloading");
    let segments =
        emit(&descriptors, &declarations, &options, &DefaultValueTable::objc()).expect("emit");

    let bridges: Vec<_> = segments
        .iter()
        .filter(|s| s.section == Section::Bridges)
        .collect();
    assert_eq!(bridges.len(), 2);
    assert_eq!(bridges[0].guard.as_deref(), Some("USE_Block"));
    assert_eq!(bridges[1].guard.as_deref(), Some("USE_ReloadDataBlock"));
}

#[test]
fn inout_parameter_is_forwarded_by_name() {
    let raw = "- (void)scrollViewWillEndDragging:(UIScrollView *)scrollView withVelocity:(CGPoint)velocity targetContentOffset:(inout CGPoint *)targetContentOffset";
    let text = generate(&[raw], BridgeStrategy::TypedProperty);

    assert!(
        text.contains(
            "typedef void (^ScrollViewWillEndDraggingWithVelocityTargetContentOffsetBlock)(UIScrollView *scrollView, CGPoint velocity, CGPoint *targetContentOffset);\n"
        ),
        "typedef missing: {text}"
    );
    assert!(text.contains("(scrollView, velocity, targetContentOffset);\n"));
    assert!(!text.contains("inout CGPoint *targetContentOffset)"));
}

#[test]
fn unnamed_selector_part_gets_a_usable_guard() {
    let declarations = ["- (void):(id)x"];
    let descriptors = parse_declarations(&declarations, &Grammar::objc());

    assert_eq!(guard_name(&descriptors[0]), "USE_ArgBlock");
}
