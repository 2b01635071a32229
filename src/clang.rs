//! Upstream declaration source: `clang -cc1 -ast-print`.
//!
//! clang prints the filtered protocol roughly as
//!
//! ```text
//! Printing UITableViewDataSource:
//! @protocol UITableViewDataSource <NSObject>
//! - (NSInteger)tableView:(UITableView *)tableView numberOfRowsInSection:(NSInteger)section;
//! @end
//! ```
//!
//! and [`extract_declarations`] keeps only the method lines.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info_span};

/// Failure to obtain declarations from the compiler.
#[derive(Debug)]
pub enum UpstreamError {
    /// The compiler could not be started.
    Spawn { program: PathBuf, source: io::Error },
    /// The compiler exited unsuccessfully.
    Exit { code: Option<i32> },
    /// The compiler succeeded but printed no method declarations.
    Empty { protocol: String },
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Spawn { program, source } => {
                write!(f, "failed to run {}: {}", program.display(), source)
            }
            UpstreamError::Exit { code: Some(code) } => {
                write!(f, "clang exited with status {code}")
            }
            UpstreamError::Exit { code: None } => write!(f, "clang was terminated by a signal"),
            UpstreamError::Empty { protocol } => {
                write!(f, "no method declarations printed for protocol {protocol}")
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One `clang -ast-print` run for a protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClangInvocation {
    pub program: PathBuf,
    pub sysroot: PathBuf,
    pub protocol: String,
}

impl ClangInvocation {
    pub fn new(sysroot: impl Into<PathBuf>, protocol: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("clang"),
            sysroot: sysroot.into(),
            protocol: protocol.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-cc1", "-ast-print", "-ast-dump-filter"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(OsString::from(&self.protocol));
        args.extend(
            ["-fblocks", "-w", "-x", "objective-c", "-isysroot"]
                .iter()
                .map(OsString::from),
        );
        args.push(self.sysroot.clone().into_os_string());
        args
    }

    /// Run clang with `input` as stdin (the header source) and return the
    /// printed declarations. Blocking, one shot, no retry.
    pub fn run(&self, input: Stdio) -> Result<Vec<String>, UpstreamError> {
        let _span = info_span!("clang", protocol = %self.protocol).entered();
        debug!(program = %self.program.display(), args = ?self.args(), "invoking clang");

        let output = Command::new(&self.program)
            .args(self.args())
            .stdin(input)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| UpstreamError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(UpstreamError::Exit {
                code: output.status.code(),
            });
        }

        let declarations = extract_declarations(&String::from_utf8_lossy(&output.stdout));
        debug!(count = declarations.len(), "declarations extracted");
        if declarations.is_empty() {
            return Err(UpstreamError::Empty {
                protocol: self.protocol.clone(),
            });
        }
        Ok(declarations)
    }
}

/// Method declaration lines of printed (or hand-written) protocol text,
/// without their trailing `;`.
///
/// Skips blank lines, `//` comments, clang's `Printing <name>:` banners and
/// `@`-directives (`@protocol`, `@optional`, `@property`, `@end`, ...).
pub fn extract_declarations(printed: &str) -> Vec<String> {
    printed
        .lines()
        .map(str::trim_end)
        .filter(|line| {
            let head = line.trim_start();
            !head.is_empty()
                && !head.starts_with("//")
                && !head.starts_with('@')
                && !line.contains("Printing")
        })
        .map(|line| line.strip_suffix(';').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
#[path = "tests/clang_tests.rs"]
mod tests;
