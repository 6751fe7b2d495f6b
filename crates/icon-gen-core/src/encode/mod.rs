//! Platform encoders.
//!
//! Each encoder resizes the validated source to every entry of its
//! platform's size table and serializes the results into that platform's
//! output directory. Output names depend only on the input stem (and the
//! size, for Linux), so re-running overwrites previous results.

mod linux;
mod macos;
mod windows;

use crate::error::IconError;
use crate::platform::Platform;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Files written by one encoder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub platform: Platform,
    pub files: Vec<PathBuf>,
}

/// Encode `source` for `platform` into `dir`.
///
/// # Arguments
/// * `platform` - Platform whose size table and container format to use
/// * `source` - The validated source image
/// * `stem` - Input file name without extension, used to name outputs
/// * `dir` - The platform's output directory (must exist)
pub fn encode(
    platform: Platform,
    source: &DynamicImage,
    stem: &str,
    dir: &Path,
) -> Result<Artifact, IconError> {
    let sizes = platform.sizes();
    let result = match platform {
        Platform::Windows => windows::write_ico(source, sizes, stem, dir),
        Platform::MacOs => macos::write_icns(source, sizes, stem, dir),
        Platform::Linux => linux::write_pngs(source, sizes, stem, dir),
    };

    match result {
        Ok(files) => {
            info!("{}: wrote {} file(s) for {}", platform, files.len(), stem);
            Ok(Artifact { platform, files })
        }
        Err(e) => {
            warn!("{}", e);
            Err(e)
        }
    }
}

/// Output name stem for an input path: its file name without extension.
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string())
}

/// Resize the source to a square of `pixels` using Lanczos3.
fn resize(source: &DynamicImage, pixels: u32) -> RgbaImage {
    if source.width() == pixels && source.height() == pixels {
        return source.to_rgba8();
    }
    debug!("Resizing {}x{} -> {}x{}", source.width(), source.height(), pixels, pixels);
    source
        .resize_exact(pixels, pixels, FilterType::Lanczos3)
        .to_rgba8()
}
