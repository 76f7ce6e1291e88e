//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `dragons-quest <version> (<date> <commit>)`, as printed by `--version`.
pub fn version_string() -> String {
    format!(
        "dragons-quest {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
