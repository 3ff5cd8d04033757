//! Platform identification and the fixed candidate tables.

use serde::{Deserialize, Serialize};

/// Directories probed for the shared libraries on Unix-like platforms.
///
/// The leading empty entry probes the bare file name, deferring to the system
/// loader's own search path. `/opt/local` covers MacPorts, `/sw` covers Fink,
/// both common homes for OpenCV on macOS where library paths are not clearly
/// defined.
const UNIX_SEARCH_PATHS: &[&str] = &[
    "",
    "/lib/",
    "/usr/lib/",
    "/usr/local/lib/",
    "/opt/local/lib/",
    "/sw/lib/",
];

/// On Windows the installation directory is already on `%PATH%`, so only the
/// bare file name is probed.
const WINDOWS_SEARCH_PATHS: &[&str] = &[""];

/// Linux distributions ship either the unversioned dev symlink or the
/// versioned runtime name, so both are probed.
const LINUX_EXTENSIONS: &[&str] = &[".so", ".so.1"];

const MACOS_EXTENSIONS: &[&str] = &[".dylib"];

const WINDOWS_EXTENSIONS: &[&str] = &[".dll"];

/// Target platform for library name resolution.
///
/// Any OS that is neither Linux nor macOS gets the Windows naming rules, the
/// only remaining convention the OpenCV 2.x binary distributions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detect the platform this process is running on.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Windows,
        }
    }

    /// Shared-library extensions probed on this platform, in probe order.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Linux => LINUX_EXTENSIONS,
            Self::MacOs => MACOS_EXTENSIONS,
            Self::Windows => WINDOWS_EXTENSIONS,
        }
    }

    /// Well-known directories probed on this platform, in probe order.
    pub fn search_paths(&self) -> &'static [&'static str] {
        match self {
            Self::Linux | Self::MacOs => UNIX_SEARCH_PATHS,
            Self::Windows => WINDOWS_SEARCH_PATHS,
        }
    }

    /// Get the platform as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
