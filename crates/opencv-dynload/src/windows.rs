//! Windows DLL naming-scheme detection.
//!
//! OpenCV 2.x releases shipped DLLs under two naming schemes depending on how
//! they were built: `libcxcore200.dll` (MinGW builds) or `cxcore210.dll`
//! (MSVC builds). Neither the prefix nor the version can be assumed, so both
//! are read off the installed files: the installation directory is located
//! through `%PATH%`, its release DLLs are listed, and the `cxcore` entry is
//! split around the component name to recover `(prefix, version)`.

use std::env;
use std::fs;

use crate::error::NamingError;
use crate::naming::NamingScheme;

/// Separator between `%PATH%` entries.
const PATH_SEPARATOR: char = ';';

/// Suffix shared by debug builds of the OpenCV DLLs.
const DEBUG_SUFFIX: &str = "d.dll";

/// Extension of Windows shared libraries.
const DLL_EXTENSION: &str = ".dll";

/// Component whose DLL name anchors the prefix/version split.
const REFERENCE_COMPONENT: &str = "cxcore";

/// Finds the OpenCV installation directory on `%PATH%`.
///
/// Entries are matched case-insensitively against `opencv`; the first match
/// wins. Installers for OpenCV 2.x put the DLL directory on the path, so in
/// practice this is the `bin` directory of the installation.
pub fn find_install_dir(path_var: &str) -> Option<String> {
    path_var
        .split(PATH_SEPARATOR)
        .find(|entry| entry.to_lowercase().contains("opencv"))
        .map(|entry| entry.to_string())
}

/// Whether a file name is a release DLL.
///
/// Debug builds carry a `d` before the extension (`cxcore200d.dll`) and link
/// against the debug CRT, so they are skipped.
pub fn is_release_dll(name: &str) -> bool {
    name.ends_with(DLL_EXTENSION) && !name.ends_with(DEBUG_SUFFIX)
}

/// Picks the cxcore release DLL out of a directory listing.
pub fn reference_dll<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| is_release_dll(name))
        .find(|name| name.contains(REFERENCE_COMPONENT))
}

/// Splits a cxcore DLL file name into `(prefix, version)`.
///
/// `libcxcore200.dll` yields `("lib", "200")` and `cxcore210.dll` yields
/// `("", "210")`. Returns `None` when the name does not contain the
/// `cxcore` component.
pub fn extract_prefix_and_version(file_name: &str) -> Option<(String, String)> {
    let stem = file_name.strip_suffix(DLL_EXTENSION).unwrap_or(file_name);
    let at = stem.find(REFERENCE_COMPONENT)?;
    let prefix = &stem[..at];
    let version = &stem[at + REFERENCE_COMPONENT.len()..];
    Some((prefix.to_string(), version.to_string()))
}

/// Derives the naming scheme from a directory listing.
pub fn scheme_from_listing(dir: &str, names: &[String]) -> Result<NamingScheme, NamingError> {
    let reference = reference_dll(names.iter().map(String::as_str)).ok_or_else(|| {
        NamingError::ReferenceDllNotFound {
            dir: dir.to_string(),
        }
    })?;
    let (prefix, version) =
        extract_prefix_and_version(reference).ok_or_else(|| NamingError::ReferenceDllNotFound {
            dir: dir.to_string(),
        })?;
    Ok(NamingScheme::new(prefix, version))
}

/// Derives the naming scheme from the DLLs present in `dir`.
pub fn scan_install_dir(dir: &str) -> Result<NamingScheme, NamingError> {
    let names = list_dll_names(dir)?;
    scheme_from_listing(dir, &names)
}

/// Detects the DLL naming scheme of the installed OpenCV.
///
/// Locates the installation through `%PATH%` and reads the scheme off its
/// cxcore DLL. Intended to run once per process; callers fall back to
/// unprefixed, unversioned names when detection fails.
pub fn detect_naming() -> Result<NamingScheme, NamingError> {
    let path_var = env::var("PATH").unwrap_or_default();
    let dir = find_install_dir(&path_var).ok_or(NamingError::InstallDirNotFound)?;
    scan_install_dir(&dir)
}

/// Lists the DLL file names in a directory.
fn list_dll_names(dir: &str) -> Result<Vec<String>, NamingError> {
    let entries = fs::read_dir(dir).map_err(|source| NamingError::InstallDirUnreadable {
        dir: dir.to_string(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| NamingError::InstallDirUnreadable {
            dir: dir.to_string(),
            source,
        })?;
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(DLL_EXTENSION) {
                names.push(name);
            }
        }
    }
    Ok(names)
}
