//! Output directory tree management.

use crate::platform::Platform;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The output tree: a root with one subdirectory per platform.
///
/// ```text
/// icon-gen-out/
///   windows_ico/
///   macos_icns/
///   linux_png/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub root: PathBuf,
    pub windows: PathBuf,
    pub macos: PathBuf,
    pub linux: PathBuf,
}

impl OutputDirs {
    /// Paths of the tree under `root`, without touching the filesystem.
    pub fn new(root: &Path) -> Self {
        OutputDirs {
            root: root.to_path_buf(),
            windows: root.join(Platform::Windows.dir_name()),
            macos: root.join(Platform::MacOs.dir_name()),
            linux: root.join(Platform::Linux.dir_name()),
        }
    }

    /// Ensure the root and all platform subdirectories exist.
    ///
    /// Existing directories and their contents are left as they are.
    pub fn create(root: &Path) -> io::Result<Self> {
        let dirs = Self::new(root);
        for dir in [&dirs.windows, &dirs.macos, &dirs.linux] {
            fs::create_dir_all(dir)?;
        }
        Ok(dirs)
    }

    pub fn dir_for(&self, platform: Platform) -> &Path {
        match platform {
            Platform::Windows => &self.windows,
            Platform::MacOs => &self.macos,
            Platform::Linux => &self.linux,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_all_subdirs() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("icon-gen-out");

        let dirs = OutputDirs::create(&root).unwrap();

        assert!(root.join("windows_ico").is_dir());
        assert!(root.join("macos_icns").is_dir());
        assert!(root.join("linux_png").is_dir());
        assert_eq!(dirs.dir_for(Platform::Linux), root.join("linux_png"));
    }

    #[test]
    fn second_call_keeps_existing_files() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("out");

        OutputDirs::create(&root).unwrap();
        fs::write(root.join("notes.txt"), b"keep me").unwrap();
        fs::write(root.join("linux_png").join("other.png"), b"unrelated").unwrap();

        let dirs = OutputDirs::create(&root).unwrap();

        assert_eq!(fs::read(root.join("notes.txt")).unwrap(), b"keep me");
        assert!(dirs.linux.join("other.png").exists());
    }

    #[test]
    fn fails_when_root_is_a_file() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("out");
        fs::write(&root, b"not a directory").unwrap();

        assert!(OutputDirs::create(&root).is_err());
    }
}
