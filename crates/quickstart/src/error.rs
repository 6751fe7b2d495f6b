use crate::bootstrap::Step;
use std::fmt;
use std::io;

/// Errors that abort the bootstrap
#[derive(Debug)]
pub enum BootstrapError {
    /// The step's program could not be started
    Spawn { step: Step, source: io::Error },
    /// The step's program exited unsuccessfully
    StepFailed { step: Step, exit_code: Option<i32>, stderr: String },
    /// requirements.txt could not be created
    Requirements(io::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Spawn { step, source } => {
                write!(f, "failed to {}: {}", step, source)
            }
            BootstrapError::StepFailed { step, exit_code, stderr } => {
                match exit_code {
                    Some(code) => write!(f, "failed to {} (exit code {})", step, code)?,
                    None => write!(f, "failed to {} (terminated by signal)", step)?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ":\n{}", stderr)?;
                }
                Ok(())
            }
            BootstrapError::Requirements(e) => {
                write!(f, "failed to create requirements file: {}", e)
            }
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Spawn { source, .. } => Some(source),
            BootstrapError::Requirements(e) => Some(e),
            _ => None,
        }
    }
}
