//! Diagnostic logging for `blockgen`.
//!
//! Generated code goes to stdout or `-o`, so every log line is written to
//! stderr. Logging stays off unless `BLOCKGEN_LOG` or `RUST_LOG` names a
//! filter; `BLOCKGEN_LOG_FORMAT` then picks the layout:
//!
//! | value    | layout                                          |
//! |----------|-------------------------------------------------|
//! | `text`   | one line per event (the default)                |
//! | `tree`   | parse and emit spans nested with `tracing-tree` |
//! | `json`   | one JSON object per event                       |
//!
//! Useful filters:
//!
//! ```bash
//! # Why did a declaration come out malformed?
//! BLOCKGEN_LOG=blockgen_parser=trace BLOCKGEN_LOG_FORMAT=tree blockgen $SDK UITableViewDelegate -i UITableView.h
//!
//! # Which clang command ran, and how many declarations came back
//! BLOCKGEN_LOG=blockgen=debug blockgen $SDK UIScrollViewDelegate -i UIScrollView.h
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const FILTER_VAR: &str = "BLOCKGEN_LOG";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "BLOCKGEN_LOG_FORMAT";

/// Event layout on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised means [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives and layout chosen from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `RUST_LOG`-syntax directives such as `blockgen_parser=trace`.
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings through `lookup`; `None` when no filter variable is
    /// set. `BLOCKGEN_LOG` wins over `RUST_LOG`.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(FILTER_VAR).or_else(|| lookup(FALLBACK_FILTER_VAR))?;
        let format = lookup(FORMAT_VAR).map_or(LogFormat::Text, |v| LogFormat::parse(&v));
        Some(Self { directives, format })
    }

    fn from_env() -> Option<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }
}

/// Install the global subscriber, or do nothing when logging was not asked for.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&settings.directives);

    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    }
}
