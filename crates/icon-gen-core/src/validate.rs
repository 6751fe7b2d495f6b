use crate::constants::SOURCE_DIMENSION;
use crate::error::IconError;
use image::{DynamicImage, ImageReader};
use std::path::Path;
use tracing::debug;

/// Validate that a source image exists, decodes, and is exactly 1024x1024.
///
/// Returns the decoded image on success so every encoder resizes from the
/// same validated source. Decoding failures are reported as
/// `IconError::Decode`, never as a panic.
pub fn validate_image(path: &Path) -> Result<DynamicImage, IconError> {
    if !path.exists() {
        return Err(IconError::NotFound(path.to_path_buf()));
    }

    let decode_error = |reason: String| IconError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    // Sniff the format from content so extensionless inputs still decode
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    let (width, height) = (image.width(), image.height());
    if width != SOURCE_DIMENSION || height != SOURCE_DIMENSION {
        return Err(IconError::WrongDimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    debug!("Validated {} ({}x{})", path.display(), width, height);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn accepts_1024_square() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        write_png(&path, 1024, 1024);

        let image = validate_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (1024, 1024));
    }

    #[test]
    fn fails_when_missing() {
        let dir = tempdir().unwrap();
        let result = validate_image(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(IconError::NotFound(_))));
    }

    #[test]
    fn fails_with_wrong_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.png");
        write_png(&path, 512, 512);

        let result = validate_image(&path);
        assert!(matches!(
            result,
            Err(IconError::WrongDimensions {
                width: 512,
                height: 512,
                ..
            })
        ));
    }

    #[test]
    fn fails_when_not_square() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        write_png(&path, 1024, 512);

        let err = validate_image(&path).unwrap_err();
        assert!(err.to_string().contains("current size: 1024x512"));
    }

    #[test]
    fn detects_format_without_extension() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("logo.png");
        write_png(&png, 1024, 1024);
        let bare = dir.path().join("logo");
        fs::rename(&png, &bare).unwrap();

        assert!(validate_image(&bare).is_ok());
    }

    #[test]
    fn corrupt_image_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let result = validate_image(&path);
        assert!(matches!(result, Err(IconError::Decode { .. })));
    }
}
