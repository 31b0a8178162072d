use std::path::Path;

use crate::describe::{DescribeOutput, DescribeRunner};
use crate::error::Result;

/// Mock describe runner for testing without a git checkout
pub struct MockRunner {
    output: DescribeOutput,
}

impl MockRunner {
    /// Create a mock returning an arbitrary canned result
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        MockRunner {
            output: DescribeOutput {
                exit_code,
                stdout: stdout.into(),
                stderr: stderr.into(),
            },
        }
    }

    /// Mock a successful query that printed `line` followed by a newline
    pub fn succeeding(line: &str) -> Self {
        Self::new(0, format!("{}\n", line), "")
    }

    /// Mock a failed query with the given exit code and error text
    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::new(exit_code, "", stderr)
    }
}

impl DescribeRunner for MockRunner {
    fn run_describe(&self, _workdir: Option<&Path>) -> Result<DescribeOutput> {
        Ok(self.output.clone())
    }
}
