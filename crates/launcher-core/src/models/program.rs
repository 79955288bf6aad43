//! Build and platform details shown on the About page

/// What the running launcher binary is and where it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramInfo {
    pub launcher_version: &'static str,
    /// Target operating system, e.g. `linux`, `macos`, `windows`
    pub platform: &'static str,
    pub arch: &'static str,
    /// Built without optimizations and with debug assertions
    pub dev_build: bool,
}

impl ProgramInfo {
    pub const fn current() -> Self {
        Self {
            launcher_version: env!("CARGO_PKG_VERSION"),
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            dev_build: cfg!(debug_assertions),
        }
    }

    /// Short label for the build flavour.
    pub const fn build_kind(&self) -> &'static str {
        if self.dev_build {
            "Development build"
        } else {
            "Release build"
        }
    }
}
