use crate::platform::Platform;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for validating and encoding a single source image.
#[derive(Debug)]
pub enum IconError {
    /// Source image does not exist
    NotFound(PathBuf),
    /// Source image could not be opened or decoded
    Decode { path: PathBuf, reason: String },
    /// Source image is not 1024x1024
    WrongDimensions { path: PathBuf, width: u32, height: u32 },
    /// Output directory tree could not be created
    OutputDir { path: PathBuf, source: io::Error },
    /// Resizing or serializing failed for a platform
    Encode { platform: Platform, reason: String },
}

impl IconError {
    pub(crate) fn encode(platform: Platform, reason: impl fmt::Display) -> Self {
        IconError::Encode {
            platform,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::NotFound(path) => {
                write!(f, "image '{}' does not exist", path.display())
            }
            IconError::Decode { path, reason } => {
                write!(f, "error opening image '{}': {}", path.display(), reason)
            }
            IconError::WrongDimensions { path, width, height } => {
                write!(
                    f,
                    "image '{}' must be 1024x1024 pixels, current size: {}x{}",
                    path.display(),
                    width,
                    height
                )
            }
            IconError::OutputDir { path, source } => {
                write!(
                    f,
                    "failed to create output directory {}: {}",
                    path.display(),
                    source
                )
            }
            IconError::Encode { platform, reason } => {
                write!(f, "failed to create {} {}: {}", platform, platform.container_name(), reason)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::OutputDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for the target selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Selector contains a character other than w, m or l
    InvalidTarget(String),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::InvalidTarget(target) => write!(
                f,
                "invalid target '{}', must be some combination of 'w', 'm', and 'l'",
                target
            ),
        }
    }
}

impl std::error::Error for TargetError {}
