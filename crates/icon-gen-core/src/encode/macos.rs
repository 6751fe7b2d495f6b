use super::resize;
use crate::error::IconError;
use crate::platform::{IconSize, Platform};
use icns::{IconFamily, IconType, Image, PixelFormat};
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The icns slot for a size, keyed by pixel size and density.
fn icon_type(size: &IconSize) -> Option<IconType> {
    match (size.pixels, size.density()) {
        (16, 1) => Some(IconType::RGBA32_16x16),
        (32, 2) => Some(IconType::RGBA32_16x16_2x),
        (32, 1) => Some(IconType::RGBA32_32x32),
        (64, 2) => Some(IconType::RGBA32_32x32_2x),
        (64, 1) => Some(IconType::RGBA32_64x64),
        (128, 1) => Some(IconType::RGBA32_128x128),
        (256, 2) => Some(IconType::RGBA32_128x128_2x),
        (256, 1) => Some(IconType::RGBA32_256x256),
        (512, 2) => Some(IconType::RGBA32_256x256_2x),
        (512, 1) => Some(IconType::RGBA32_512x512),
        (1024, 2) => Some(IconType::RGBA32_512x512_2x),
        _ => None,
    }
}

/// Write every (size, label) slot into a single `<stem>.icns`.
pub(super) fn write_icns(
    source: &DynamicImage,
    sizes: &[IconSize],
    stem: &str,
    dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    let mut icon_family = IconFamily::new();

    for size in sizes {
        let label = size.label.unwrap_or("unlabeled");
        let icon_type = icon_type(size).ok_or_else(|| {
            IconError::encode(
                Platform::MacOs,
                format!("no icns slot for {} ({}px)", label, size.pixels),
            )
        })?;

        let rgba = resize(source, size.pixels);
        let image = Image::from_data(PixelFormat::RGBA, size.pixels, size.pixels, rgba.into_raw())
            .map_err(|e| IconError::encode(Platform::MacOs, format!("failed to build {}: {}", label, e)))?;
        icon_family
            .add_icon_with_type(&image, icon_type)
            .map_err(|e| IconError::encode(Platform::MacOs, format!("failed to add {}: {}", label, e)))?;
    }

    let path = dir.join(format!("{}.icns", stem));
    let file = File::create(&path).map_err(|e| {
        IconError::encode(
            Platform::MacOs,
            format!("failed to create {}: {}", path.display(), e),
        )
    })?;
    let mut writer = BufWriter::new(file);
    icon_family
        .write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| IconError::encode(Platform::MacOs, format!("failed to write ICNS: {}", e)))?;

    Ok(vec![path])
}
