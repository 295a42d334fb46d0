use crate::build;

/// Returns the long version string with build information
pub fn long_version() -> String {
    let dirty = if build::GIT_CLEAN { "clean" } else { "dirty" };
    format!(
        "{} (commit {} {})
Build: {}
Target: {}
Rustc: {}",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        dirty,
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::RUST_VERSION,
    )
}
