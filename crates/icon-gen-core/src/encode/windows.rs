use super::resize;
use crate::error::IconError;
use crate::platform::{IconSize, Platform};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write every size into a single multi-resolution `<stem>.ico`.
pub(super) fn write_ico(
    source: &DynamicImage,
    sizes: &[IconSize],
    stem: &str,
    dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for size in sizes {
        let rgba = resize(source, size.pixels);
        let icon_image = IconImage::from_rgba_data(size.pixels, size.pixels, rgba.into_raw());
        let entry = IconDirEntry::encode(&icon_image).map_err(|e| {
            IconError::encode(
                Platform::Windows,
                format!("failed to encode icon at size {}: {}", size.pixels, e),
            )
        })?;
        icon_dir.add_entry(entry);
    }

    let path = dir.join(format!("{}.ico", stem));
    let file = File::create(&path).map_err(|e| {
        IconError::encode(
            Platform::Windows,
            format!("failed to create {}: {}", path.display(), e),
        )
    })?;
    let mut writer = BufWriter::new(file);
    icon_dir
        .write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| IconError::encode(Platform::Windows, format!("failed to write ICO: {}", e)))?;

    Ok(vec![path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::WINDOWS_SIZES;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn ico_contains_every_windows_size() {
        let dir = tempdir().unwrap();
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(256, 256, Rgba([10, 120, 200, 255])));

        let files = write_ico(&source, WINDOWS_SIZES, "logo", dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("logo.ico")]);

        let icon_dir = IconDir::read(File::open(&files[0]).unwrap()).unwrap();
        let mut widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        widths.sort();
        assert_eq!(widths, vec![16, 24, 32, 48, 64, 128, 256]);
    }
}
