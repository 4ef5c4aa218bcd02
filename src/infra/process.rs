//! External build stage invocation
//!
//! Both stages go through [`run_stage`], which always checks the exit status.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::core::platform::StageCommand;
use crate::error::StageError;

/// The two build stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// Builds the `b2` driver
    Bootstrap,
    /// Compiles and installs the libraries
    Install,
}

impl BuildStage {
    /// Stage name used in messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Install => "build",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a stage's standard output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutput {
    /// Share our stdout
    Inherit,
    /// Write to our stderr so stdout only carries the report
    Stderr,
}

impl StageOutput {
    fn stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Stderr => Stdio::from(std::io::stderr()),
        }
    }
}

/// Run `command` inside `cwd`
///
/// Stdin and stderr are inherited; stdout follows `output`. Fails if the
/// program cannot be started or exits unsuccessfully.
pub async fn run_stage(
    stage: BuildStage,
    command: &StageCommand,
    cwd: &Path,
    output: StageOutput,
) -> Result<(), StageError> {
    let program = resolve_program(&command.program, cwd);
    tracing::info!("Running {stage} in {}: {command}", cwd.display());

    let status = Command::new(&program)
        .args(&command.args)
        .current_dir(cwd)
        .stdout(output.stdio())
        .status()
        .await
        .map_err(|e| StageError::Launch {
            stage: stage.to_string(),
            command: command.to_string(),
            error: e.to_string(),
        })?;

    if !status.success() {
        tracing::error!("{stage} exited with {status}");
        return Err(StageError::Failed {
            stage: stage.to_string(),
            command: command.to_string(),
            status: status.to_string(),
            code: status.code(),
        });
    }

    tracing::debug!("{stage} finished successfully");
    Ok(())
}

/// Resolve a program that lives inside the stage directory
///
/// `./bootstrap.sh`, `bootstrap.bat` and `b2.exe` live in the source tree
/// rather than on `PATH`, and relative program paths are not reliably
/// resolved against the child's working directory. Anything not found in
/// `cwd` (such as `sudo`) is left for a `PATH` lookup.
fn resolve_program(program: &str, cwd: &Path) -> PathBuf {
    let local = cwd.join(program);
    if local.is_file() {
        local
    } else {
        PathBuf::from(program)
    }
}
