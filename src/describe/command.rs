use std::path::Path;
use std::process::Command;

use crate::describe::{DescribeOutput, DescribeRunner};
use crate::error::Result;

/// Options passed to every describe invocation: 7-character abbreviated
/// hashes, first-parent traversal, long output even on an exact tag match,
/// a dirty suffix for uncommitted changes, and a bare-hash fallback when no
/// annotated tag is reachable.
const DESCRIBE_ARGS: [&str; 6] = [
    "describe",
    "--abbrev=7",
    "--first-parent",
    "--long",
    "--dirty",
    "--always",
];

/// Real describe implementation that shells out to the `git` binary.
pub struct GitCommandRunner;

impl GitCommandRunner {
    /// Create a new runner
    pub fn new() -> Self {
        GitCommandRunner
    }
}

impl Default for GitCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl DescribeRunner for GitCommandRunner {
    fn run_describe(&self, workdir: Option<&Path>) -> Result<DescribeOutput> {
        let mut command = Command::new("git");
        command.args(DESCRIBE_ARGS);

        if let Some(dir) = workdir {
            command.current_dir(dir);
        }

        let output = command.output()?;

        Ok(DescribeOutput {
            // A signal-terminated child has no exit code
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
