//! Error types for naming detection and library resolution.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::library::CvLibrary;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// One failed load candidate, kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// Candidate path handed to the loader.
    pub path: PathBuf,

    /// What the loader reported for this candidate.
    pub error: String,
}

/// Errors from Windows naming-scheme detection.
///
/// Every variant is non-fatal: detection reports the condition once and falls
/// back to unprefixed, unversioned DLL names.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// No `%PATH%` entry mentions an OpenCV installation.
    #[error("No OpenCV installation found in PATH")]
    InstallDirNotFound,

    /// The detected installation directory could not be listed.
    #[error("Cannot list OpenCV directory {dir}: {source}")]
    InstallDirUnreadable {
        dir: String,
        #[source]
        source: std::io::Error,
    },

    /// The installation directory holds no release cxcore DLL to name against.
    #[error("No release cxcore DLL found in {dir}")]
    ReferenceDllNotFound { dir: String },
}

/// Errors from resolving and loading a library.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A single candidate failed to load. Expected during probing; the
    /// resolver records it and moves on to the next candidate.
    #[error("Failed to load {}: {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    /// Every candidate for a library failed to load.
    #[error("{library} library not found after {} attempt(s)", attempts.len())]
    NotFound {
        library: CvLibrary,
        attempts: Vec<Attempt>,
    },

    /// A symbol was missing from a loaded library.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}

impl ResolveError {
    /// The candidates behind a [`ResolveError::NotFound`], in probe order.
    ///
    /// Empty for the other variants.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::NotFound { attempts, .. } => attempts,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_display() {
        let err = ResolveError::LoadFailed {
            path: PathBuf::from("/usr/lib/libcv.so"),
            reason: "cannot open shared object file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/lib/libcv.so"));
        assert!(msg.contains("cannot open shared object file"));
    }

    #[test]
    fn test_not_found_display_counts_attempts() {
        let err = ResolveError::NotFound {
            library: CvLibrary::Cxcore,
            attempts: vec![
                Attempt {
                    path: PathBuf::from("libcxcore.so"),
                    error: "not found".to_string(),
                },
                Attempt {
                    path: PathBuf::from("/lib/libcxcore.so"),
                    error: "not found".to_string(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("cxcore"));
        assert!(msg.contains("2 attempt(s)"));
    }

    #[test]
    fn test_attempts_accessor() {
        let err = ResolveError::NotFound {
            library: CvLibrary::Cv,
            attempts: vec![Attempt {
                path: PathBuf::from("libcv.so"),
                error: "not found".to_string(),
            }],
        };
        assert_eq!(err.attempts().len(), 1);

        let err = ResolveError::SymbolNotFound("cvSmooth".to_string());
        assert!(err.attempts().is_empty());
    }

    #[test]
    fn test_naming_error_display() {
        let err = NamingError::InstallDirNotFound;
        assert!(err.to_string().contains("No OpenCV installation found"));

        let err = NamingError::ReferenceDllNotFound {
            dir: "C:\\OpenCV2.1\\bin".to_string(),
        };
        assert!(err.to_string().contains("cxcore"));
        assert!(err.to_string().contains("C:\\OpenCV2.1\\bin"));
    }
}
