use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::emitter::BridgeStrategy;

/// CLI arguments for the blockgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "blockgen",
    version,
    about = "Generate Objective-C block bridges for protocol methods"
)]
pub struct CliArgs {
    /// SDK root passed to clang as -isysroot.
    pub sysroot: PathBuf,

    /// Objective-C protocol name.
    pub protocol: String,

    /// Name of the generated class [default: <PROTOCOL>Blocks].
    pub classname: Option<String>,

    /// Objective-C header declaring the protocol (read from stdin when absent).
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Read already printed declarations, one per line, instead of running clang.
    /// Use `-` for stdin.
    #[arg(short = 'd', long, conflicts_with = "input")]
    pub declarations: Option<PathBuf>,

    /// Write generated code to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// How the generated class stores blocks.
    #[arg(short = 's', long, value_enum, ignore_case = true)]
    pub strategy: Option<Strategy>,

    /// JSON file with grammar tables, extra default values and a strategy.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// clang executable.
    #[arg(long, default_value = "clang")]
    pub clang: PathBuf,

    /// Print the parsed block descriptors as JSON instead of generating code.
    #[arg(long = "dump-descriptors")]
    pub dump_descriptors: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Associated objects with explicit accessors.
    Associated,
    /// Synthesized copy properties.
    Property,
}

impl Strategy {
    pub fn to_bridge_strategy(self) -> BridgeStrategy {
        match self {
            Strategy::Associated => BridgeStrategy::AssociatedStorage,
            Strategy::Property => BridgeStrategy::TypedProperty,
        }
    }
}
