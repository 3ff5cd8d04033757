//! Runtime discovery and loading of the OpenCV 2.x shared libraries.
//!
//! OpenCV installations vary in where the libraries sit and what the files
//! are called. This crate resolves the `cv` and `cxcore` libraries by
//! probing a fixed set of per-platform search paths with per-platform file
//! names, loading each library from the first candidate that succeeds.
//!
//! ## Platform behavior
//!
//! - **Linux**: `lib<name>.so` then `lib<name>.so.1`, probed through the
//!   usual system library directories.
//! - **macOS**: `lib<name>.dylib`, same directories plus the MacPorts and
//!   Fink trees.
//! - **Windows**: `<prefix><name><version>.dll`, where prefix and version
//!   are read off the installed cxcore DLL found through `%PATH%`.
//!
//! Resolution is non-fatal: a library that cannot be found is reported as a
//! warning and its slot stays empty, so callers can degrade gracefully.
//!
//! ## Example
//!
//! ```rust,no_run
//! use opencv_dynload::{CvLibrary, OpenCvLibraries};
//!
//! let libs = OpenCvLibraries::load();
//! if let Some(cv) = libs.get(CvLibrary::Cv) {
//!     println!("cv loaded from {}", cv.path().display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod loader;
pub mod naming;
pub mod platform;
pub mod resolver;
pub mod windows;

// Error handling
pub use error::{Attempt, NamingError, ResolveError, Result};

// Library identity and naming
pub use library::CvLibrary;
pub use naming::NamingScheme;
pub use platform::Platform;

// Loading
pub use loader::{LibraryLoader, NativeLoader, SharedLibrary};
pub use resolver::{effective_search_paths, LibrarySet, OpenCvLibraries, Resolver};

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::error::{ResolveError, Result};
    pub use crate::library::CvLibrary;
    pub use crate::loader::{LibraryLoader, NativeLoader, SharedLibrary};
    pub use crate::naming::NamingScheme;
    pub use crate::platform::Platform;
    pub use crate::resolver::{LibrarySet, OpenCvLibraries, Resolver};
}
