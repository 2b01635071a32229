use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::cli::args::CliArgs;
use crate::common::Grammar;
use crate::emitter::{BridgeStrategy, DefaultValueTable, EmitOptions};
use crate::pipeline::GenerateOptions;

/// Contents of a `--config` JSON file. Every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockgenConfig {
    /// Replacement grammar tables; missing keys keep their built-in values.
    #[serde(default)]
    pub grammar: Option<Grammar>,
    /// Extra return-type defaults, merged over the built-in table.
    #[serde(default)]
    pub defaults: Option<FxHashMap<String, String>>,
    #[serde(default)]
    pub fallback_default: Option<String>,
    #[serde(default)]
    pub strategy: Option<BridgeStrategy>,
}

pub fn parse_config(source: &str) -> Result<BlockgenConfig> {
    let config = serde_json::from_str(source).context("failed to parse blockgen config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<BlockgenConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Merge built-in tables, the config file and command-line flags, in that
/// order of precedence (flags win).
pub fn resolve_options(args: &CliArgs, config: BlockgenConfig) -> GenerateOptions {
    let grammar = config.grammar.unwrap_or_default();

    let mut defaults = DefaultValueTable::objc();
    if let Some(extra) = config.defaults {
        defaults = defaults.with_entries(extra);
    }
    if let Some(fallback) = config.fallback_default {
        defaults = defaults.with_fallback(fallback);
    }

    let strategy = args
        .strategy
        .map(|s| s.to_bridge_strategy())
        .or(config.strategy)
        .unwrap_or_default();

    let mut emit = EmitOptions::for_protocol(args.protocol.clone()).with_strategy(strategy);
    if let Some(class_name) = &args.classname {
        emit = emit.with_class_name(class_name.clone());
    }

    GenerateOptions {
        grammar,
        defaults,
        emit,
    }
}
