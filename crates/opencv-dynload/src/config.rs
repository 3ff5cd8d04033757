//! Environment-variable configuration for the resolver.

/// Environment variable names honored at load time.
pub mod env_vars {
    /// Extra directory probed before the built-in search paths.
    pub const LIB_DIR: &str = "OPENCV_LIB_DIR";
}

/// Extra library directory from the environment, if set and non-empty.
pub fn lib_dir_override() -> Option<String> {
    std::env::var(env_vars::LIB_DIR)
        .ok()
        .filter(|dir| !dir.is_empty())
}
