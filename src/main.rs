//! imgpkg plugin entry point.
//!
//! Registers the standalone `imgpkg` image-packaging CLI as a plugin under
//! the host's command tree: a static descriptor identifies the plugin, three
//! hidden commands (`describe`, `info`, `post-install`) serve host discovery
//! and lifecycle management, and every other invocation is forwarded to the
//! `imgpkg` command tree itself.

mod buildinfo;
mod commands;
mod delegate;
mod descriptor;
mod output;
mod plugin;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::delegate::ExecDelegate;
use crate::descriptor::{CmdGroup, PluginDescriptor, Target};
use crate::plugin::Plugin;

/// Executable providing the delegated command tree.
const IMGPKG_BIN: &str = "imgpkg";

fn plugin_descriptor() -> PluginDescriptor {
    PluginDescriptor {
        name: "imgpkg".to_string(),
        description: "imgpkg allows to store configuration and image references as oci artifacts \
                      (copy, describe, pull, push, tag, version)"
            .to_string(),
        target: Target::Global,
        version: buildinfo::VERSION.to_string(),
        build_sha: buildinfo::SHA.to_string(),
        group: CmdGroup::Manage,
        post_install_hook: None,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imgpkg_plugin=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let descriptor = plugin_descriptor();
    let plugin = match Plugin::new(descriptor, Box::new(ExecDelegate::new(IMGPKG_BIN))) {
        Ok(plugin) => plugin,
        Err(err) => {
            // Unrecoverable configuration error: the static descriptor is wrong.
            tracing::error!(error = %err, "invalid plugin descriptor");
            return ExitCode::FAILURE;
        }
    };

    match plugin.execute() {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            output::error_report("imgpkg", &err);
            ExitCode::FAILURE
        }
    }
}
