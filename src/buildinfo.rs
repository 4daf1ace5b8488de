//! Build-time identity constants for the plugin descriptor.

/// Plugin version. Release builds tag the crate, so the crate version is the
/// plugin version.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit SHA captured by `build.rs`, "unknown" outside a git checkout.
pub(crate) const SHA: &str = env!("IMGPKG_PLUGIN_BUILD_SHA");

/// Version of the plugin-runtime layer this binary embeds. The host records
/// it from `info` output to decide runtime compatibility.
pub(crate) const RUNTIME_VERSION: &str = env!("CARGO_PKG_VERSION");
