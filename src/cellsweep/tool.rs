use crate::error::{Result, SweepError};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const CELLBENDER: &str = "cellbender";

/// Resolves the cellbender executable.
/// Checks $CELLBENDER, then falls back to a PATH lookup.
pub fn find_cellbender() -> Result<String> {
    if let Ok(exe) = env::var("CELLBENDER") {
        if !exe.is_empty() {
            return Ok(exe);
        }
    }

    if Command::new("which")
        .arg(CELLBENDER)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
    {
        return Ok(CELLBENDER.to_string());
    }

    Err(SweepError::Tool(
        "cellbender not found. Install it or set $CELLBENDER.".to_string(),
    ))
}

/// Parameters for one `cellbender remove-background` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBackground {
    pub raw_h5: PathBuf,
    pub output_h5: PathBuf,
    pub expected_cells: usize,
    pub total_droplets_included: u32,
}

impl RemoveBackground {
    pub fn new(
        raw_h5: PathBuf,
        output_h5: PathBuf,
        expected_cells: usize,
        total_droplets_included: u32,
    ) -> Self {
        Self {
            raw_h5,
            output_h5,
            expected_cells,
            total_droplets_included,
        }
    }

    /// Arguments passed to the executable, in the order the tool documents them.
    pub fn args(&self) -> Vec<String> {
        vec![
            "remove-background".to_string(),
            "--cuda".to_string(),
            "--input".to_string(),
            self.raw_h5.display().to_string(),
            "--output".to_string(),
            self.output_h5.display().to_string(),
            "--expected-cells".to_string(),
            self.expected_cells.to_string(),
            "--total-droplets-included".to_string(),
            self.total_droplets_included.to_string(),
        ]
    }

    /// The full command line as a single printable string.
    pub fn command_line(&self, exe: &str) -> String {
        let mut line = exe.to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    /// Runs the tool and waits for it to finish, capturing its output.
    /// A non-zero child exit is not an error here; callers inspect the outcome.
    pub fn run(&self, exe: &str) -> Result<RunOutcome> {
        let output = Command::new(exe).args(self.args()).output()?;
        Ok(RunOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or None if the child was killed by a signal.
    pub code: Option<i32>,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
