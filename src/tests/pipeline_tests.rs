use super::*;
use blockgen_emitter::{BridgeStrategy, Section};

const DATA_SOURCE: &[&str] = &[
    "- (NSInteger)tableView:(UITableView *)tableView numberOfRowsInSection:(NSInteger)section",
    "- (UITableViewCell *)tableView:(UITableView *)tableView cellForRowAtIndexPath:(NSIndexPath *)indexPath",
    "- (void)tableView:(UITableView *)tableView commitEditingStyle:(UITableViewCellEditingStyle)editingStyle forRowAtIndexPath:(NSIndexPath *)indexPath",
];

#[test]
fn generates_one_bridge_per_declaration_in_order() {
    let options = GenerateOptions::for_protocol("UITableViewDataSource");
    let generated = generate(DATA_SOURCE, &options).expect("generate");

    assert_eq!(generated.descriptors.len(), DATA_SOURCE.len());
    let bridges: Vec<_> = generated
        .segments
        .iter()
        .filter(|s| s.section == Section::Bridges)
        .collect();
    assert_eq!(bridges.len(), DATA_SOURCE.len());
    for ((bridge, descriptor), raw) in bridges.iter().zip(&generated.descriptors).zip(DATA_SOURCE) {
        assert_eq!(bridge.guard.as_deref(), Some(format!("USE_{}Block", descriptor.name).as_str()));
        assert!(bridge.body.contains(raw));
    }
}

#[test]
fn rendered_text_has_header_and_implementation() {
    let options = GenerateOptions::for_protocol("UITableViewDataSource");
    let text = generate(DATA_SOURCE, &options).expect("generate").text();

    assert!(text.starts_with("//\n// UITableViewDataSourceBlocks.h\n//\n"));
    assert!(text.contains("// UITableViewDataSourceBlocks.m"));
    assert!(text.contains("@interface UITableViewDataSourceBlocks () <UITableViewDataSource>"));
    assert!(text.contains("block(tableView, section) : 0;"));
    assert!(text.contains("block(tableView, indexPath) : nil;"));
    assert!(text.contains("    block(tableView, editingStyle, indexPath);\n"));
    assert!(text.trim_end().ends_with("@end"));
}

#[test]
fn injected_tables_change_output() {
    let mut options = GenerateOptions::for_protocol("UITableViewDataSource");
    options.defaults = options.defaults.clone().with_entry("NSInteger", "-1");
    options.emit = options.emit.clone().with_strategy(BridgeStrategy::TypedProperty);

    let text = generate(DATA_SOURCE, &options).expect("generate").text();
    assert!(text.contains("self.tableViewNumberOfRowsInSectionBlock(tableView, section) : -1;"));
}

#[test]
fn empty_batch_still_renders_the_class() {
    let options = GenerateOptions::for_protocol("Empty");
    let generated = generate::<&str>(&[], &options).expect("generate");

    assert!(generated.descriptors.is_empty());
    assert!(generated.text().contains("@implementation EmptyBlocks"));
}
