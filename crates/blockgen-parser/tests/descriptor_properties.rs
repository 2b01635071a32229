//! Behavioural properties of the scanner and parser over a realistic
//! protocol declaration set.

use blockgen_common::Grammar;
use blockgen_parser::{BlockDescriptor, DeclarationParser, parse_declarations};
use blockgen_scanner::Scanner;

const TABLE_VIEW_DELEGATE: &[&str] = &[
    "- (void)tableView:(UITableView *)tableView willDisplayCell:(UITableViewCell *)cell forRowAtIndexPath:(NSIndexPath *)indexPath",
    "- (CGFloat)tableView:(UITableView *)tableView heightForRowAtIndexPath:(NSIndexPath *)indexPath",
    "- (nullable UIView *)tableView:(UITableView *)tableView viewForHeaderInSection:(NSInteger)section",
    "- (void)tableView:(UITableView *)tableView didSelectRowAtIndexPath:(NSIndexPath *)indexPath",
    "- (UITableViewCellEditingStyle)tableView:(UITableView *)tableView editingStyleForRowAtIndexPath:(NSIndexPath *)indexPath",
    "- (BOOL)tableView:(UITableView *)tableView shouldHighlightRowAtIndexPath:(NSIndexPath *)indexPath __attribute__((availability(ios,introduced=6.0)))",
    "- (void)scrollViewDidScroll:(UIScrollView *)scrollView",
    "- (BOOL)scrollViewShouldScrollToTop:(UIScrollView *)scrollView",
];

fn parse_all() -> Vec<BlockDescriptor> {
    parse_declarations(TABLE_VIEW_DELEGATE, &Grammar::objc())
}

#[test]
fn tokens_are_never_empty_or_instance_markers() {
    let grammar = Grammar::objc();
    let scanner = Scanner::new(&grammar);

    for raw in TABLE_VIEW_DELEGATE.iter().chain(["", "-", "- - ()", "  -(void)x  "].iter()) {
        for token in scanner.tokenize(raw) {
            assert!(!token.is_empty(), "empty token in {raw:?}");
            assert_ne!(token, "-", "instance marker kept in {raw:?}");
        }
    }
}

#[test]
fn colon_fragment_implies_non_empty_name() {
    for (raw, d) in TABLE_VIEW_DELEGATE.iter().zip(parse_all()) {
        assert!(raw.contains(':'));
        assert!(!d.name.is_empty(), "no name for {raw}");
        assert!(!d.is_malformed(), "malformed: {d:?}");
    }
}

#[test]
fn colon_fragment_implies_non_empty_name_for_unusual_selectors() {
    let unusual = [
        "- (void):(id)x",
        "- (void)move:(id)a :(id)b",
        "- (void)scrollViewWillEndDragging:(UIScrollView *)scrollView withVelocity:(CGPoint)velocity targetContentOffset:(inout CGPoint *)targetContentOffset",
    ];

    for d in parse_declarations(&unusual, &Grammar::objc()) {
        assert!(!d.name.is_empty(), "no name: {d:?}");
        assert_eq!(d.arguments.len(), d.parameters.len(), "{d:?}");
        assert!(d.parameters.iter().all(|p| p.name.is_some()), "{d:?}");
    }
}

#[test]
fn pointer_accumulates_into_return_type() {
    let grammar = Grammar::objc();
    let d = DeclarationParser::new(&grammar).parse_declaration("- (NSString *)doSomething()");

    assert!(d.return_type.ends_with('*'));
    assert_eq!(d.return_type, "NSString *");
    assert_eq!(d.name, "DoSomething");
}

#[test]
fn attribute_marker_truncates_mid_scan() {
    let descriptors = parse_all();
    let highlight = &descriptors[5];

    assert!(highlight.truncated);
    assert_eq!(highlight.name, "TableViewShouldHighlightRowAtIndexPath");
    assert_eq!(highlight.argument_list(), "tableView, indexPath");
    assert!(descriptors.iter().filter(|d| d.truncated).count() == 1);
}

#[test]
fn selector_fragment_casing() {
    let descriptors = parse_all();

    assert_eq!(descriptors[3].name, "TableViewDidSelectRowAtIndexPath");
    assert!(descriptors[3].name.starts_with("TableView"));
    assert_eq!(descriptors[6].name, "ScrollViewDidScroll");
}

#[test]
fn parameters_and_arguments_follow_declaration_order() {
    let descriptors = parse_all();
    let d = &descriptors[0];

    assert_eq!(
        d.parameter_types().collect::<Vec<_>>(),
        vec!["UITableView *", "UITableViewCell *", "NSIndexPath *"]
    );
    assert_eq!(d.arguments, vec!["tableView", "cell", "indexPath"]);
}

#[test]
fn void_selection_is_exact() {
    let descriptors = parse_all();
    let void_count = descriptors.iter().filter(|d| d.returns_void()).count();
    assert_eq!(void_count, 3);

    let upper = BlockDescriptor {
        return_type: "VOID".to_string(),
        ..BlockDescriptor::default()
    };
    assert!(!upper.returns_void());
}

#[test]
fn same_selector_with_different_types_collides_on_name() {
    let grammar = Grammar::objc();
    let descriptors = parse_declarations(
        &[
            "- (void)didChange:(NSString *)value",
            "- (void)didChange:(NSNumber *)value",
        ],
        &grammar,
    );

    assert_eq!(descriptors[0].name, descriptors[1].name);
    assert_ne!(descriptors[0].prototype(), descriptors[1].prototype());
}

#[test]
fn descriptors_serialize_for_inspection() {
    let descriptors = parse_all();
    let d = &descriptors[1];
    let json = serde_json::to_value(d).expect("serialize descriptor");

    assert_eq!(json["returnType"], "CGFloat");
    assert_eq!(json["name"], "TableViewHeightForRowAtIndexPath");
    assert_eq!(json["parameters"][1]["ty"], "NSIndexPath *");
    assert_eq!(json["arguments"][0], "tableView");
}
