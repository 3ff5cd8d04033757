//! Library naming schemes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::NamingError;
use crate::library::CvLibrary;
use crate::platform::Platform;
use crate::windows;

/// How shared-library file names are built on the running platform.
///
/// A file stem is `prefix + component + version`; the platform supplies the
/// extension(s). Unix systems use a fixed `lib` prefix and no version in the
/// stem, while Windows embeds both into the DLL name and must be inspected
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingScheme {
    /// Prepended to the component name, e.g. `lib`.
    pub prefix: String,

    /// Appended after the component name, e.g. `210`.
    pub version: String,
}

impl NamingScheme {
    pub fn new(prefix: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            version: version.into(),
        }
    }

    /// The fixed Unix scheme: `lib` prefix, unversioned stem.
    pub fn unix() -> Self {
        Self::new("lib", "")
    }

    /// The scheme used when Windows detection fails: bare component names.
    pub fn fallback() -> Self {
        Self::new("", "")
    }

    /// Determines the naming scheme for a platform.
    ///
    /// On Windows this inspects the installed DLLs; failure is reported as a
    /// warning and degrades to [`NamingScheme::fallback`] so that resolution
    /// can still be attempted.
    pub fn detect(platform: Platform) -> Self {
        match platform {
            Platform::Linux | Platform::MacOs => Self::unix(),
            Platform::Windows => Self::from_windows_detection(windows::detect_naming()),
        }
    }

    /// Folds a Windows detection outcome into a usable scheme.
    ///
    /// Detection failure is reported as a single warning and degrades to
    /// [`NamingScheme::fallback`] so that resolution can still be attempted.
    pub fn from_windows_detection(detected: Result<Self, NamingError>) -> Self {
        detected.unwrap_or_else(|err| {
            warn!(
                "{err}; falling back to unprefixed, unversioned DLL names. \
                 Please install OpenCV >= 2.0"
            );
            Self::fallback()
        })
    }

    /// File stem for a library under this scheme, without extension.
    pub fn file_stem(&self, library: CvLibrary) -> String {
        format!("{}{}{}", self.prefix, library.as_str(), self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_stems() {
        let scheme = NamingScheme::unix();
        assert_eq!(scheme.file_stem(CvLibrary::Cv), "libcv");
        assert_eq!(scheme.file_stem(CvLibrary::Cxcore), "libcxcore");
    }

    #[test]
    fn test_windows_stems() {
        let scheme = NamingScheme::new("lib", "200");
        assert_eq!(scheme.file_stem(CvLibrary::Cxcore), "libcxcore200");

        let scheme = NamingScheme::new("", "210");
        assert_eq!(scheme.file_stem(CvLibrary::Cv), "cv210");
    }

    #[test]
    fn test_fallback_stems_are_bare() {
        let scheme = NamingScheme::fallback();
        assert_eq!(scheme.file_stem(CvLibrary::Cv), "cv");
        assert_eq!(scheme.file_stem(CvLibrary::Cxcore), "cxcore");
    }

    #[test]
    fn test_detect_unix_platforms() {
        assert_eq!(NamingScheme::detect(Platform::Linux), NamingScheme::unix());
        assert_eq!(NamingScheme::detect(Platform::MacOs), NamingScheme::unix());
    }

    #[test]
    fn test_windows_detection_success_passes_through() {
        let scheme = NamingScheme::from_windows_detection(Ok(NamingScheme::new("lib", "200")));
        assert_eq!(scheme, NamingScheme::new("lib", "200"));
    }

    #[test]
    fn test_windows_detection_failure_falls_back() {
        let scheme = NamingScheme::from_windows_detection(Err(NamingError::InstallDirNotFound));
        assert_eq!(scheme, NamingScheme::fallback());

        let scheme = NamingScheme::from_windows_detection(Err(NamingError::ReferenceDllNotFound {
            dir: r"C:\OpenCV2.1\bin".to_string(),
        }));
        assert_eq!(scheme, NamingScheme::fallback());
    }
}
