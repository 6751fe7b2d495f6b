//! Platform definitions and their icon size tables.

use crate::constants::{LINUX_DIR, MACOS_DIR, WINDOWS_DIR};
use crate::error::TargetError;
use std::fmt;

/// One resolution that must appear in a platform's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// Width and height in pixels
    pub pixels: u32,
    /// Apple slot name (e.g., "16x16@2x"), macOS only
    pub label: Option<&'static str>,
}

impl IconSize {
    const fn plain(pixels: u32) -> Self {
        IconSize { pixels, label: None }
    }

    const fn labeled(pixels: u32, label: &'static str) -> Self {
        IconSize {
            pixels,
            label: Some(label),
        }
    }

    /// Pixel density of the slot: 2 for retina ("@2x") labels, 1 otherwise.
    pub fn density(&self) -> u32 {
        match self.label {
            Some(label) if label.ends_with("@2x") => 2,
            _ => 1,
        }
    }
}

pub const WINDOWS_SIZES: &[IconSize] = &[
    IconSize::plain(16),
    IconSize::plain(24),
    IconSize::plain(32),
    IconSize::plain(48),
    IconSize::plain(64),
    IconSize::plain(128),
    IconSize::plain(256),
];

/// macOS sizes, named after Apple's iconset slots.
pub const MACOS_SIZES: &[IconSize] = &[
    IconSize::labeled(16, "16x16"),
    IconSize::labeled(32, "16x16@2x"),
    IconSize::labeled(32, "32x32"),
    IconSize::labeled(64, "32x32@2x"),
    IconSize::labeled(128, "128x128"),
    IconSize::labeled(256, "128x128@2x"),
    IconSize::labeled(256, "256x256"),
    IconSize::labeled(512, "256x256@2x"),
    IconSize::labeled(512, "512x512"),
    IconSize::labeled(1024, "512x512@2x"),
];

pub const LINUX_SIZES: &[IconSize] = &[
    IconSize::plain(16),
    IconSize::plain(24),
    IconSize::plain(32),
    IconSize::plain(48),
    IconSize::plain(64),
    IconSize::plain(96),
    IconSize::plain(128),
    IconSize::plain(256),
    IconSize::plain(512),
    IconSize::plain(1024),
];

/// A desktop platform that icons are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

/// All platforms, in processing order.
pub const ALL_PLATFORMS: &[Platform] = &[Platform::Windows, Platform::MacOs, Platform::Linux];

impl Platform {
    /// Character that selects this platform in a target string.
    pub fn selector(self) -> char {
        match self {
            Platform::Windows => 'w',
            Platform::MacOs => 'm',
            Platform::Linux => 'l',
        }
    }

    pub fn from_selector(c: char) -> Option<Platform> {
        ALL_PLATFORMS.iter().copied().find(|p| p.selector() == c)
    }

    /// Ordered size table for this platform.
    pub fn sizes(self) -> &'static [IconSize] {
        match self {
            Platform::Windows => WINDOWS_SIZES,
            Platform::MacOs => MACOS_SIZES,
            Platform::Linux => LINUX_SIZES,
        }
    }

    /// Name of this platform's subdirectory in the output tree.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Windows => WINDOWS_DIR,
            Platform::MacOs => MACOS_DIR,
            Platform::Linux => LINUX_DIR,
        }
    }

    /// Short name of the artifact kind, used in progress messages.
    pub fn container_name(self) -> &'static str {
        match self {
            Platform::Windows => "ICO",
            Platform::MacOs => "ICNS",
            Platform::Linux => "PNGs",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        };
        write!(f, "{}", name)
    }
}

/// Platforms selected by a target string, always in Windows, macOS, Linux order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetSet {
    windows: bool,
    macos: bool,
    linux: bool,
}

impl TargetSet {
    pub fn all() -> Self {
        TargetSet {
            windows: true,
            macos: true,
            linux: true,
        }
    }

    pub fn insert(&mut self, platform: Platform) {
        match platform {
            Platform::Windows => self.windows = true,
            Platform::MacOs => self.macos = true,
            Platform::Linux => self.linux = true,
        }
    }

    pub fn contains(&self, platform: Platform) -> bool {
        match platform {
            Platform::Windows => self.windows,
            Platform::MacOs => self.macos,
            Platform::Linux => self.linux,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.windows || self.macos || self.linux)
    }

    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        ALL_PLATFORMS.iter().copied().filter(|p| self.contains(*p))
    }
}

/// Parse a target string such as "wml" or "W" into a set of platforms.
///
/// Matching is case-insensitive and repeated characters are allowed. An
/// empty string selects nothing.
pub fn parse_targets(target: &str) -> Result<TargetSet, TargetError> {
    let target = target.to_lowercase();
    let mut set = TargetSet::default();

    for c in target.chars() {
        let platform =
            Platform::from_selector(c).ok_or_else(|| TargetError::InvalidTarget(target.clone()))?;
        set.insert(platform);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_targets_works() {
        assert_eq!(parse_targets("wml"), Ok(TargetSet::all()));
        assert_eq!(parse_targets("LMW"), Ok(TargetSet::all()));

        let only_mac = parse_targets("m").unwrap();
        assert_eq!(only_mac.iter().collect::<Vec<_>>(), vec![Platform::MacOs]);
    }

    #[test]
    fn parse_targets_rejects_unknown_characters() {
        assert_eq!(
            parse_targets("x"),
            Err(TargetError::InvalidTarget("x".to_string()))
        );
        assert!(parse_targets("wmx").is_err());
        assert!(parse_targets("w m").is_err());
    }

    #[test]
    fn parse_targets_accepts_repeats_and_empty() {
        let set = parse_targets("lwl").unwrap();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Platform::Windows, Platform::Linux]
        );

        assert!(parse_targets("").unwrap().is_empty());
    }

    #[test]
    fn size_tables_match_platform_requirements() {
        let windows: Vec<u32> = WINDOWS_SIZES.iter().map(|s| s.pixels).collect();
        assert_eq!(windows, vec![16, 24, 32, 48, 64, 128, 256]);

        let linux: Vec<u32> = LINUX_SIZES.iter().map(|s| s.pixels).collect();
        assert_eq!(linux, vec![16, 24, 32, 48, 64, 96, 128, 256, 512, 1024]);

        assert_eq!(MACOS_SIZES.len(), 10);
        assert_eq!(MACOS_SIZES.first().map(|s| s.pixels), Some(16));
        assert_eq!(MACOS_SIZES.last().map(|s| s.pixels), Some(1024));
    }

    #[test]
    fn retina_labels_have_double_density() {
        let retina = MACOS_SIZES.iter().filter(|s| s.density() == 2).count();
        assert_eq!(retina, 5);
        assert_eq!(IconSize::labeled(32, "16x16@2x").density(), 2);
        assert_eq!(IconSize::labeled(32, "32x32").density(), 1);
        assert_eq!(IconSize::plain(32).density(), 1);
    }

    #[test]
    fn platform_display_and_dirs() {
        assert_eq!(Platform::MacOs.to_string(), "macOS");
        assert_eq!(Platform::Windows.dir_name(), "windows_ico");
        assert_eq!(Platform::from_selector('l'), Some(Platform::Linux));
        assert_eq!(Platform::from_selector('x'), None);
    }
}
