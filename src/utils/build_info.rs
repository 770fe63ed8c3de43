//! Compile-time build information, shown by `flappy --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `flappy <date> (<commit>)`.
pub fn version_line() -> String {
    format!("flappy {} ({})", BUILD_DATE, BUILD_COMMIT)
}
