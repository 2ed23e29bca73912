use image::Rgba;

/// Directory (relative to the generation root) holding the sized icons.
pub const ICON_DIR: &str = "icons";

/// Largest accepted icon side; keeps the RGBA buffer well under allocation limits.
pub const MAX_ICON_SIZE: u32 = 4096;

/// One icon to produce: square pixel size plus path relative to the generation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub path: &'static str,
}

impl IconSpec {
    pub const fn new(size: u32, path: &'static str) -> Self {
        Self { size, path }
    }
}

// Extension toolbar sizes, then the 128px copy the app bundle expects at top level
pub const ICON_SPECS: [IconSpec; 5] = [
    IconSpec::new(16, "icons/icon-16.png"),
    IconSpec::new(32, "icons/icon-32.png"),
    IconSpec::new(48, "icons/icon-48.png"),
    IconSpec::new(128, "icons/icon-128.png"),
    IconSpec::new(128, "Icon.png"),
];

pub const FACE_FILL: Rgba<u8> = Rgba([59, 130, 246, 255]);
pub const FACE_OUTLINE: Rgba<u8> = Rgba([30, 64, 175, 255]);
pub const HAND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
