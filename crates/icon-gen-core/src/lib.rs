//! Core of the icon generator.
//!
//! Validates 1024x1024 source images and serializes them into the icon
//! containers each desktop platform expects:
//! - `.ico` for Windows
//! - `.icns` for macOS
//! - one `.png` per size for Linux

pub mod batch;
mod constants;
pub mod encode;
mod error;
pub mod output;
pub mod platform;
pub mod validate;

// Re-export public items
pub use batch::{BatchEvent, BatchReport, ImageOutcome, process_images};
pub use constants::{DEFAULT_TARGETS, LINUX_DIR, MACOS_DIR, OUTPUT_ROOT, SOURCE_DIMENSION, WINDOWS_DIR};
pub use encode::Artifact;
pub use error::{IconError, TargetError};
pub use output::OutputDirs;
pub use platform::{IconSize, Platform, TargetSet, parse_targets};
pub use validate::validate_image;
