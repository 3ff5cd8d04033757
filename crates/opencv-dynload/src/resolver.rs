//! Search-path probing and library resolution.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config;
use crate::error::{Attempt, ResolveError, Result};
use crate::library::CvLibrary;
use crate::loader::{LibraryLoader, NativeLoader, SharedLibrary};
use crate::naming::NamingScheme;
use crate::platform::Platform;

/// Search paths for a platform, with the configured override first.
///
/// The empty entry stands for the bare file name, which hands the lookup to
/// the system loader's own search order.
pub fn effective_search_paths(platform: Platform, override_dir: Option<&str>) -> Vec<String> {
    let mut paths = Vec::new();
    if let Some(dir) = override_dir {
        paths.push(dir.to_string());
    }
    paths.extend(platform.search_paths().iter().map(|p| p.to_string()));
    paths
}

/// Resolves OpenCV libraries against the platform's search paths.
///
/// Candidate file names follow the platform [`NamingScheme`], which is
/// derived once when the resolver is built. Probing walks search paths in
/// order and tries every platform extension in each before moving on; the
/// first candidate the loader accepts wins.
pub struct Resolver<L> {
    loader: L,
    platform: Platform,
    search_paths: Vec<String>,
    scheme: NamingScheme,
}

impl Resolver<NativeLoader> {
    /// Resolver for the current platform, backed by the system loader.
    pub fn new() -> Self {
        Self::for_platform(NativeLoader::new(), Platform::current())
    }
}

impl Default for Resolver<NativeLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LibraryLoader> Resolver<L> {
    /// Resolver for a specific platform, with naming detection and the
    /// configured search-path override applied.
    pub fn for_platform(loader: L, platform: Platform) -> Self {
        Self::with_scheme(loader, platform, NamingScheme::detect(platform))
            .with_search_paths(effective_search_paths(
                platform,
                config::lib_dir_override().as_deref(),
            ))
    }

    /// Resolver with an explicit naming scheme.
    ///
    /// Skips naming detection and the environment entirely; probes the
    /// platform's built-in search paths.
    pub fn with_scheme(loader: L, platform: Platform, scheme: NamingScheme) -> Self {
        let search_paths = platform.search_paths().iter().map(|p| p.to_string()).collect();
        Self {
            loader,
            platform,
            search_paths,
            scheme,
        }
    }

    /// Replaces the search paths.
    pub fn with_search_paths(mut self, search_paths: Vec<String>) -> Self {
        self.search_paths = search_paths;
        self
    }

    /// Replaces the naming scheme.
    pub fn with_naming(mut self, scheme: NamingScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn naming(&self) -> &NamingScheme {
        &self.scheme
    }

    pub fn search_paths(&self) -> &[String] {
        &self.search_paths
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Candidate paths for a library, in probe order.
    pub fn candidates(&self, library: CvLibrary) -> Vec<PathBuf> {
        let stem = self.scheme.file_stem(library);
        let mut candidates = Vec::new();
        for path in &self.search_paths {
            for ext in self.platform.extensions() {
                candidates.push(PathBuf::from(path).join(format!("{stem}{ext}")));
            }
        }
        candidates
    }

    /// Loads a library from the first candidate the loader accepts.
    ///
    /// Individual candidate failures are expected and recorded; when every
    /// candidate fails the error carries the full attempt list.
    pub fn resolve(&self, library: CvLibrary) -> Result<L::Handle> {
        let mut attempts = Vec::new();
        for candidate in self.candidates(library) {
            match self.loader.load(&candidate) {
                Ok(handle) => {
                    info!("Loaded OpenCV {library} from {}", candidate.display());
                    return Ok(handle);
                }
                Err(err) => {
                    let reason = match err {
                        ResolveError::LoadFailed { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    debug!("Candidate {} rejected: {reason}", candidate.display());
                    attempts.push(Attempt {
                        path: candidate,
                        error: reason,
                    });
                }
            }
        }
        Err(ResolveError::NotFound { library, attempts })
    }
}

/// Handles for the OpenCV libraries, one slot per component.
///
/// Missing libraries are represented as `None` rather than an error so that
/// import-time loading stays non-fatal.
#[derive(Debug)]
pub struct LibrarySet<H> {
    pub cv: Option<H>,
    pub cxcore: Option<H>,
}

impl<H> Default for LibrarySet<H> {
    fn default() -> Self {
        Self {
            cv: None,
            cxcore: None,
        }
    }
}

impl<H> LibrarySet<H> {
    /// Loads every library through `resolver`, keeping whatever succeeds.
    ///
    /// A library that cannot be resolved is reported as a single warning and
    /// left empty.
    pub fn load_with<L>(resolver: &Resolver<L>) -> Self
    where
        L: LibraryLoader<Handle = H>,
    {
        let mut set = Self::default();
        for library in CvLibrary::ALL {
            match resolver.resolve(library) {
                Ok(handle) => match library {
                    CvLibrary::Cv => set.cv = Some(handle),
                    CvLibrary::Cxcore => set.cxcore = Some(handle),
                },
                Err(err) => {
                    let tried = err
                        .attempts()
                        .iter()
                        .map(|attempt| attempt.path.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    warn!(
                        "The OpenCV {library} library was not found (tried: {tried}). \
                         Please ensure that it is installed and available on the \
                         system path."
                    );
                }
            }
        }
        set
    }

    pub fn get(&self, library: CvLibrary) -> Option<&H> {
        match library {
            CvLibrary::Cv => self.cv.as_ref(),
            CvLibrary::Cxcore => self.cxcore.as_ref(),
        }
    }

    /// Whether every library loaded.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// The libraries that failed to load.
    pub fn missing(&self) -> Vec<CvLibrary> {
        CvLibrary::ALL
            .into_iter()
            .filter(|library| self.get(*library).is_none())
            .collect()
    }
}

/// The OpenCV libraries as loaded by the system loader.
pub type OpenCvLibraries = LibrarySet<SharedLibrary>;

impl OpenCvLibraries {
    /// Loads the OpenCV libraries from the platform search paths.
    ///
    /// Never fails: libraries that cannot be found are warned about and left
    /// as `None`.
    pub fn load() -> Self {
        Self::load_with(&Resolver::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct FailingLoader;

    impl LibraryLoader for FailingLoader {
        type Handle = ();

        fn load(&self, path: &Path) -> std::result::Result<Self::Handle, ResolveError> {
            Err(ResolveError::LoadFailed {
                path: path.to_path_buf(),
                reason: "refused".to_string(),
            })
        }
    }

    #[test]
    fn test_candidates_walk_paths_before_extensions() {
        let resolver = Resolver::with_scheme(FailingLoader, Platform::Linux, NamingScheme::unix())
            .with_search_paths(vec!["".to_string(), "/lib/".to_string()]);

        let candidates = resolver.candidates(CvLibrary::Cv);
        let expected: Vec<PathBuf> = ["libcv.so", "libcv.so.1", "/lib/libcv.so", "/lib/libcv.so.1"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_candidates_windows_scheme() {
        let resolver =
            Resolver::with_scheme(FailingLoader, Platform::Windows, NamingScheme::new("", "210"));

        // The Windows table probes bare names only, so no detection or
        // search-path setup is needed beyond the scheme itself.
        let candidates = resolver.candidates(CvLibrary::Cxcore);
        assert_eq!(candidates, vec![PathBuf::from("cxcore210.dll")]);
    }

    #[test]
    fn test_resolve_exhaustion_records_every_attempt() {
        let resolver = Resolver::with_scheme(FailingLoader, Platform::Linux, NamingScheme::unix())
            .with_search_paths(vec!["".to_string(), "/usr/lib/".to_string()]);

        let err = resolver.resolve(CvLibrary::Cxcore).unwrap_err();
        let attempts = err.attempts();
        assert_eq!(attempts.len(), 4);
        assert_eq!(attempts[0].path, PathBuf::from("libcxcore.so"));
        assert_eq!(attempts[3].path, PathBuf::from("/usr/lib/libcxcore.so.1"));
        assert!(attempts.iter().all(|a| a.error == "refused"));
    }

    #[test]
    fn test_effective_search_paths_override_comes_first() {
        let paths = effective_search_paths(Platform::Linux, Some("/opt/opencv/lib"));
        assert_eq!(paths[0], "/opt/opencv/lib");
        assert_eq!(paths.len(), Platform::Linux.search_paths().len() + 1);

        let paths = effective_search_paths(Platform::Linux, None);
        assert_eq!(paths.len(), Platform::Linux.search_paths().len());
        assert_eq!(paths[0], "");
    }

    #[test]
    fn test_library_set_missing_and_complete() {
        let set: LibrarySet<()> = LibrarySet::default();
        assert!(!set.is_complete());
        assert_eq!(set.missing(), vec![CvLibrary::Cv, CvLibrary::Cxcore]);

        let set = LibrarySet {
            cv: Some(()),
            cxcore: Some(()),
        };
        assert!(set.is_complete());
        assert!(set.missing().is_empty());
    }
}
