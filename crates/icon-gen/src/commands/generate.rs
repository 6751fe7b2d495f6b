//! Generate icons for a batch of images and report progress on the console.

use icon_gen_core::{
    Artifact, BatchEvent, BatchReport, Platform, TargetError, encode, parse_targets, process_images,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Console line for a finished encoder.
fn created_message(image: &Path, artifact: &Artifact) -> String {
    match artifact.platform {
        Platform::Linux => format!("Created Linux PNGs for {}", encode::output_stem(image)),
        platform => {
            let file = artifact
                .files
                .first()
                .map(|f| f.display().to_string())
                .unwrap_or_default();
            format!("Created {} {}: {}", platform, platform.container_name(), file)
        }
    }
}

/// Generate icons for every image.
///
/// The target string is checked before anything touches the filesystem;
/// an invalid one returns an error and no image is processed.
pub fn run(images: &[PathBuf], target: &str, output_root: &Path) -> Result<BatchReport, TargetError> {
    let targets = parse_targets(target)?;
    debug!(
        "Targets {:?}, output root {}",
        targets.iter().collect::<Vec<_>>(),
        output_root.display()
    );

    let report = process_images(images, targets, output_root, |event| match event {
        BatchEvent::Started { image, .. } => {
            println!("\nProcessing: {}", image.display());
        }
        BatchEvent::Invalid { error, .. } | BatchEvent::Failed { error, .. } => {
            eprintln!("Error: {}", error);
        }
        BatchEvent::Created { image, artifact } => {
            println!("{}", created_message(image, artifact));
        }
    });

    info!(
        "Processed {} image(s) with {} failure(s)",
        report.images.len(),
        report.failure_count()
    );
    Ok(report)
}

/// Process exit code for a finished run: 0 only when every image succeeded.
pub fn exit_code(result: &Result<BatchReport, TargetError>) -> i32 {
    match result {
        Ok(report) if report.success() => 0,
        _ => 1,
    }
}
