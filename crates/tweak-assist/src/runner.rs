//! Running the external assistant.
//!
//! The prompt goes to the child's stdin; the file list goes on its command
//! line. No shell is involved, so nothing in the prompt is ever interpreted.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{AssistError, Result};

/// Arguments passed to the assistant when none are configured.
pub const DEFAULT_ARGS: &[&str] = &["--no-auto-commits", "--yes", "--map-tokens", "2048"];

/// How to invoke the assistant program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assistant {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the assistant runs in; the current one if `None`.
    pub working_dir: Option<PathBuf>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            program: "aider".to_string(),
            args: DEFAULT_ARGS.iter().map(|arg| arg.to_string()).collect(),
            working_dir: None,
        }
    }
}

impl Assistant {
    /// The full argument vector, program first, as it would be executed.
    pub fn command_line(&self, files: &[String]) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .chain(files.iter().cloned())
            .collect()
    }

    /// Runs the assistant with `prompt` on stdin and returns its stdout.
    ///
    /// # Errors
    ///
    /// [`AssistError::Spawn`] if the program cannot be started,
    /// [`AssistError::Failed`] if it exits unsuccessfully.
    pub fn run(&self, prompt: &str, files: &[String]) -> Result<String> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .args(files)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(command = ?self.command_line(files), "spawning assistant");
        let mut child = command.spawn().map_err(|source| AssistError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = stdin
                .write_all(prompt.as_bytes())
                .and_then(|()| stdin.write_all(b"\n"));
            match written {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AssistError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        info!(program = %self.program, bytes = output.stdout.len(), "assistant finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
