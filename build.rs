//! Build script for imgpkg-plugin.
//!
//! Captures the git commit SHA at build time (used by the plugin descriptor
//! and the `info` command). Release pipelines build from a tagged checkout,
//! so the SHA is taken from the repository; builds outside a git checkout
//! fall back to "unknown".

fn main() {
    let sha = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=IMGPKG_PLUGIN_BUILD_SHA={}", sha);
    println!("cargo:rerun-if-changed=build.rs");
}
