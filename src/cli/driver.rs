use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::process::Stdio;
use tracing::info;

use crate::clang::{ClangInvocation, extract_declarations};
use crate::cli::args::CliArgs;
use crate::cli::config::{BlockgenConfig, load_config, resolve_options};
use crate::pipeline::generate;

/// Run one generation and return the text to write. Nothing is written
/// here, so a failure at any stage leaves no partial output behind.
pub fn run(args: &CliArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BlockgenConfig::default(),
    };
    let options = resolve_options(args, config);

    let declarations = load_declarations(args)?;
    info!(count = declarations.len(), protocol = %args.protocol, "declarations loaded");

    let generated = generate(&declarations, &options).context("failed to emit block bridges")?;

    if args.dump_descriptors {
        let mut json = serde_json::to_string_pretty(&generated.descriptors)
            .context("failed to serialize block descriptors")?;
        json.push('\n');
        return Ok(json);
    }
    Ok(generated.text())
}

/// Raw declarations from `--declarations`, or from clang otherwise.
pub fn load_declarations(args: &CliArgs) -> Result<Vec<String>> {
    if let Some(path) = &args.declarations {
        let source = read_source(path)?;
        let declarations = extract_declarations(&source);
        if declarations.is_empty() {
            bail!("no method declarations in {}", path.display());
        }
        return Ok(declarations);
    }

    let input = match &args.input {
        Some(path) => Stdio::from(
            File::open(path).with_context(|| format!("failed to open header: {}", path.display()))?,
        ),
        None => Stdio::inherit(),
    };

    let declarations = ClangInvocation::new(&args.sysroot, args.protocol.clone())
        .with_program(&args.clang)
        .run(input)
        .context("failed to print protocol declarations with clang")?;
    Ok(declarations)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read declarations from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read declarations: {}", path.display()))
}

/// Write to `path`, or stdout when `None`.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write output to stdout")
        }
    }
}
