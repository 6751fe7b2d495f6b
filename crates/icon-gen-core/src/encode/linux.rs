use super::resize;
use crate::error::IconError;
use crate::platform::{IconSize, Platform};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// File name of one Linux PNG, e.g. `logo_48x48.png`.
pub(super) fn png_name(stem: &str, pixels: u32) -> String {
    format!("{}_{}x{}.png", stem, pixels, pixels)
}

/// Write one `<stem>_<N>x<N>.png` per size.
pub(super) fn write_pngs(
    source: &DynamicImage,
    sizes: &[IconSize],
    stem: &str,
    dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    let mut files = Vec::with_capacity(sizes.len());

    for size in sizes {
        let path = dir.join(png_name(stem, size.pixels));
        resize(source, size.pixels)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| {
                IconError::encode(
                    Platform::Linux,
                    format!("failed to write {}: {}", path.display(), e),
                )
            })?;
        files.push(path);
    }

    Ok(files)
}
