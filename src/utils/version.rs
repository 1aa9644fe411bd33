//! Version information utilities

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current crate version
pub fn get_version() -> &'static str {
    VERSION
}

/// Version string with git commit and build date when provided at build time
pub fn get_detailed_version() -> String {
    let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");

    format!("{} ({}@{})", get_version(), git_hash, build_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_detailed_version() {
        let detailed = get_detailed_version();
        assert!(detailed.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(detailed.contains('@'));
    }
}
