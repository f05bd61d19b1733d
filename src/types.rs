//! Shared types and constants used across LOGOGEN.
//! Defines the source logo name, the default assets directory, and the fixed
//! table of output sizes (`SizeSpec`, `LOGO_SIZES`).

/// File name of the source image all outputs derive from.
pub const SOURCE_LOGO: &str = "logo.png";

/// Default assets directory, relative to the invocation directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// One required square output: file name and edge length in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SizeSpec {
    pub filename: &'static str,
    pub size: u32,
}

impl std::fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.filename, self.size, self.size)
    }
}

/// The fixed output table, in generation order.
pub const LOGO_SIZES: [SizeSpec; 4] = [
    SizeSpec { filename: "logo-96.png", size: 96 },
    SizeSpec { filename: "logo-128.png", size: 128 },
    SizeSpec { filename: "logo-256.png", size: 256 },
    SizeSpec { filename: "logo-384.png", size: 384 },
];
