//! Shared-library loading.
//!
//! [`LibraryLoader`] is the seam between path resolution and the platform
//! loader: the resolver probes candidates through it, and tests substitute a
//! mock to exercise probe order without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Loads a shared library from a path.
pub trait LibraryLoader {
    /// Handle returned for a successfully loaded library.
    type Handle;

    /// Attempts to load the library at `path`.
    fn load(&self, path: &Path) -> Result<Self::Handle, ResolveError>;
}

/// Loader backed by the platform's dynamic linker.
#[derive(Debug, Default)]
pub struct NativeLoader;

impl NativeLoader {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryLoader for NativeLoader {
    type Handle = SharedLibrary;

    fn load(&self, path: &Path) -> Result<Self::Handle, ResolveError> {
        // Loading runs arbitrary initialization code from the library, which
        // is inherently unsafe. Candidates come from the fixed search tables,
        // not from untrusted input.
        let library = unsafe {
            libloading::Library::new(path).map_err(|e| ResolveError::LoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        Ok(SharedLibrary {
            path: path.to_path_buf(),
            library,
        })
    }
}

/// A loaded shared library.
///
/// Dropping this unloads the library, so it must outlive any use of symbols
/// obtained from it.
#[derive(Debug)]
pub struct SharedLibrary {
    path: PathBuf,
    library: libloading::Library,
}

impl SharedLibrary {
    /// The path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a symbol.
    ///
    /// `symbol` is the raw exported name, with or without a trailing NUL.
    ///
    /// # Safety
    ///
    /// The caller must ensure `T` matches the actual type of the exported
    /// symbol. See [`libloading::Library::get`].
    pub unsafe fn get<T>(&self, symbol: &[u8]) -> Result<libloading::Symbol<'_, T>, ResolveError> {
        unsafe { self.library.get(symbol) }.map_err(|_| {
            let name = String::from_utf8_lossy(symbol)
                .trim_end_matches('\0')
                .to_string();
            ResolveError::SymbolNotFound(name)
        })
    }
}
