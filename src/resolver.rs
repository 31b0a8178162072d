//! Outer orchestration - runs the describe query and parses its output.

use std::path::Path;

use crate::describe::{DescribeRunner, GitCommandRunner};
use crate::error::{GitSemverError, Result};
use crate::version::{parse_describe, VersionTriple};

/// Derives the version triple for a checkout using the `git` binary.
///
/// # Arguments
/// * `workdir` - Repository directory; `None` means the current process
///   directory
///
/// # Returns
/// * `Ok(VersionTriple)` - The three derived version strings
/// * `Err` - If describe exited non-zero (no repository, or a repository
///   with no commits yet)
pub fn resolve_version(workdir: Option<&Path>) -> Result<VersionTriple> {
    resolve_version_with(&GitCommandRunner::new(), workdir)
}

/// Same as [resolve_version] but with an explicit describe implementation.
///
/// A repository with commits but no tags still succeeds - the parser
/// degrades to `0.0.0`. Only a non-zero describe exit is fatal.
pub fn resolve_version_with<R: DescribeRunner>(
    runner: &R,
    workdir: Option<&Path>,
) -> Result<VersionTriple> {
    let output = runner.run_describe(workdir)?;

    if !output.success() {
        return Err(GitSemverError::describe(output.exit_code, output.stderr));
    }

    Ok(parse_describe(output.stdout.trim_end()))
}
