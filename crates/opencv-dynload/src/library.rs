//! Logical names of the OpenCV libraries this crate resolves.

use serde::{Deserialize, Serialize};

/// One of the OpenCV shared libraries known to the resolver.
///
/// The set is deliberately closed: `cv` is the image-processing library and
/// `cxcore` its core data-structures companion. Optional OpenCV 2.x
/// components (highgui, cvaux, ml) are not handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvLibrary {
    /// The image-processing library.
    Cv,

    /// The core data-structures library. Mandatory in every OpenCV 2.x
    /// installation, which makes it the reference for naming detection.
    Cxcore,
}

impl CvLibrary {
    /// Both libraries, in the order the pair loader resolves them.
    pub const ALL: [CvLibrary; 2] = [CvLibrary::Cv, CvLibrary::Cxcore];

    /// Get the logical name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cv => "cv",
            Self::Cxcore => "cxcore",
        }
    }
}

impl std::fmt::Display for CvLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_names() {
        assert_eq!(CvLibrary::Cv.as_str(), "cv");
        assert_eq!(CvLibrary::Cxcore.as_str(), "cxcore");
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(CvLibrary::ALL, [CvLibrary::Cv, CvLibrary::Cxcore]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CvLibrary::Cv.to_string(), "cv");
        assert_eq!(CvLibrary::Cxcore.to_string(), "cxcore");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CvLibrary::Cxcore).unwrap();
        assert_eq!(json, "\"cxcore\"");
        let parsed: CvLibrary = serde_json::from_str("\"cv\"").unwrap();
        assert_eq!(parsed, CvLibrary::Cv);
    }
}
