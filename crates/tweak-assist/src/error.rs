//! Errors from prompt rendering and running the assistant.

use thiserror::Error;

/// Errors that can occur while building a prompt or running the assistant.
#[derive(Error, Debug)]
pub enum AssistError {
    /// A prompt template failed to render.
    #[error("failed to render prompt: {0}")]
    Template(#[from] minijinja::Error),

    /// The assistant program could not be started.
    #[error("could not start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The assistant exited unsuccessfully.
    #[error("'{program}' exited with {}: {}", describe_exit(.code), .stderr.trim())]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Piping the prompt or collecting output failed.
    #[error("I/O error talking to the assistant")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Result type for assistant operations.
pub type Result<T> = std::result::Result<T, AssistError>;
