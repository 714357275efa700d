use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    Core,
    Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        GlVersion { major, minor }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for GlVersion {
    type Err = String;

    /// Parses `MAJOR.MINOR`, e.g. `3.3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("expected MAJOR.MINOR, got {s:?}"))?;
        let major = major
            .parse()
            .map_err(|e| format!("bad major version {major:?}: {e}"))?;
        let minor = minor
            .parse()
            .map_err(|e| format!("bad minor version {minor:?}: {e}"))?;
        Ok(GlVersion { major, minor })
    }
}

/// Window and context settings used by [crate::StartBuilder].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_version: GlVersion,
    pub profile: GlProfile,
    pub vsync: bool,
    /// Create the window without showing it.
    pub hidden: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Hello World".to_string(),
            width: 640,
            height: 480,
            gl_version: GlVersion::new(3, 3),
            profile: GlProfile::Core,
            vsync: false,
            hidden: false,
        }
    }
}

impl WindowConfig {
    /// Rejects sizes SDL would refuse anyway, with a readable reason.
    pub fn validate_size(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}
