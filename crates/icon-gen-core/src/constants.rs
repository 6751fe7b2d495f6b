/// Default root of the output tree, relative to the working directory
pub const OUTPUT_ROOT: &str = "icon-gen-out";
/// Subdirectory for Windows .ico files
pub const WINDOWS_DIR: &str = "windows_ico";
/// Subdirectory for macOS .icns files
pub const MACOS_DIR: &str = "macos_icns";
/// Subdirectory for Linux .png files
pub const LINUX_DIR: &str = "linux_png";
/// Required width and height of every source image
pub const SOURCE_DIMENSION: u32 = 1024;
/// Target selector used when none is given
pub const DEFAULT_TARGETS: &str = "wml";
