//! Batch orchestration over several source images.
//!
//! Per image: validate, create the output tree, then run each selected
//! encoder. A failure is recorded against its (image, platform) pair and
//! processing carries on with the remaining platforms and images.

use crate::encode::{self, Artifact};
use crate::error::IconError;
use crate::output::OutputDirs;
use crate::platform::TargetSet;
use crate::validate::validate_image;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Progress event emitted while processing a batch
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Processing of an image has started
    Started { image: &'a Path, index: usize, total: usize },
    /// The image failed validation and was skipped
    Invalid { image: &'a Path, error: &'a IconError },
    /// An encoder finished successfully
    Created { image: &'a Path, artifact: &'a Artifact },
    /// Output directories or an encoder failed
    Failed { image: &'a Path, error: &'a IconError },
}

/// Result of processing one source image.
#[derive(Debug)]
pub struct ImageOutcome {
    pub image: PathBuf,
    pub artifacts: Vec<Artifact>,
    pub errors: Vec<IconError>,
}

impl ImageOutcome {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of processing a whole batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub images: Vec<ImageOutcome>,
}

impl BatchReport {
    /// True when every image validated and every selected encoder succeeded.
    pub fn success(&self) -> bool {
        self.images.iter().all(ImageOutcome::success)
    }

    pub fn failure_count(&self) -> usize {
        self.images.iter().map(|i| i.errors.len()).sum()
    }
}

/// Process each image in order for the selected platforms.
///
/// # Arguments
/// * `images` - Source image paths, processed in order
/// * `targets` - Platforms to encode for
/// * `output_root` - Root of the output tree (created on first valid image)
/// * `on_event` - Callback invoked for each progress event
pub fn process_images<P, F>(
    images: &[P],
    targets: TargetSet,
    output_root: &Path,
    mut on_event: F,
) -> BatchReport
where
    P: AsRef<Path>,
    F: FnMut(BatchEvent<'_>),
{
    let total = images.len();
    let mut report = BatchReport::default();

    for (index, image) in images.iter().enumerate() {
        let image = image.as_ref();
        on_event(BatchEvent::Started { image, index, total });

        let outcome = process_image(image, targets, output_root, &mut on_event);
        if !outcome.success() {
            warn!(
                "{}: {} failure(s)",
                image.display(),
                outcome.errors.len()
            );
        }
        report.images.push(outcome);
    }

    report
}

fn process_image<F>(
    image: &Path,
    targets: TargetSet,
    output_root: &Path,
    on_event: &mut F,
) -> ImageOutcome
where
    F: FnMut(BatchEvent<'_>),
{
    let mut outcome = ImageOutcome {
        image: image.to_path_buf(),
        artifacts: Vec::new(),
        errors: Vec::new(),
    };

    let source = match validate_image(image) {
        Ok(source) => source,
        Err(error) => {
            on_event(BatchEvent::Invalid { image, error: &error });
            outcome.errors.push(error);
            return outcome;
        }
    };

    let dirs = match OutputDirs::create(output_root) {
        Ok(dirs) => dirs,
        Err(source) => {
            let error = IconError::OutputDir {
                path: output_root.to_path_buf(),
                source,
            };
            on_event(BatchEvent::Failed { image, error: &error });
            outcome.errors.push(error);
            return outcome;
        }
    };

    let stem = encode::output_stem(image);
    for platform in targets.iter() {
        match encode::encode(platform, &source, &stem, dirs.dir_for(platform)) {
            Ok(artifact) => {
                on_event(BatchEvent::Created { image, artifact: &artifact });
                outcome.artifacts.push(artifact);
            }
            Err(error) => {
                on_event(BatchEvent::Failed { image, error: &error });
                outcome.errors.push(error);
            }
        }
    }

    outcome
}
