//! Plugin assembly — descriptor validation, argv routing, execution.
//!
//! The plugin owns exactly three commands (`describe`, `info`,
//! `post-install`), all hidden and host-driven. Every other invocation,
//! including one with no arguments at all, belongs to the delegated command
//! tree and is forwarded verbatim.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::delegate::{DelegateError, RootDelegate};
use crate::descriptor::{DescriptorError, PluginDescriptor};
use crate::output;

#[derive(Parser)]
#[command(
    name = "imgpkg",
    styles = output::clap_styles(),
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct PluginCli {
    #[command(subcommand)]
    command: Option<PluginCommand>,
}

#[derive(Subcommand)]
enum PluginCommand {
    /// Describes the plugin
    #[command(hide = true)]
    Describe,

    /// Plugin info
    #[command(hide = true)]
    Info,

    /// Run post install configuration for a plugin
    #[command(hide = true)]
    PostInstall,

    /// Anything else belongs to the delegated command tree.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Names the plugin layer claims; everything else routes to the delegate.
const AUX_COMMANDS: [&str; 3] = ["describe", "info", "post-install"];

/// A constructed plugin: validated descriptor plus the root delegate.
pub(crate) struct Plugin {
    descriptor: PluginDescriptor,
    delegate: Box<dyn RootDelegate>,
}

impl Plugin {
    /// Validate the descriptor and assemble the plugin. A validation failure
    /// is an unrecoverable configuration error.
    pub fn new(
        descriptor: PluginDescriptor,
        delegate: Box<dyn RootDelegate>,
    ) -> Result<Self, DescriptorError> {
        descriptor.validate()?;
        Ok(Self {
            descriptor,
            delegate,
        })
    }

    /// Execute against the process arguments, returning the exit code.
    pub fn execute(&self) -> Result<i32, PluginError> {
        self.execute_from(std::env::args_os())
    }

    /// Execute against an explicit argv (including the binary name).
    pub fn execute_from<I, T>(&self, args: I) -> Result<i32, PluginError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match PluginCli::try_parse_from(&argv) {
            Ok(cli) => match cli.command {
                Some(PluginCommand::Describe) => {
                    commands::describe::run(&self.descriptor.description);
                    Ok(0)
                }
                Some(PluginCommand::Info) => {
                    commands::info::run(&self.descriptor)?;
                    Ok(0)
                }
                Some(PluginCommand::PostInstall) => {
                    commands::post_install::run(&self.descriptor)?;
                    Ok(0)
                }
                Some(PluginCommand::External(args)) => self.forward(&args),
                None => self.forward(&[]),
            },
            Err(err) => {
                let tail = argv.get(1..).unwrap_or(&[]);
                if claims(tail.first()) {
                    // Bad arguments to one of our own commands.
                    return Err(PluginError::Usage(Box::new(err)));
                }
                // Root-level flags the plugin layer does not recognize are
                // owned by the delegated tool; forward the invocation whole.
                self.forward(tail)
            }
        }
    }

    fn forward(&self, args: &[OsString]) -> Result<i32, PluginError> {
        tracing::debug!(delegate = %self.delegate.name(), ?args, "Forwarding to root command");
        Ok(self.delegate.run(args)?)
    }
}

fn claims(first: Option<&OsString>) -> bool {
    first
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| AUX_COMMANDS.contains(&arg))
}

/// Command-execution failures, all rendered by the top-level error report.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PluginError {
    /// Post-install hook failure; the hook's own message is authoritative.
    #[error(transparent)]
    Hook(#[from] anyhow::Error),

    /// Runtime-version invariant violation while building plugin info.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Serialization failure for the static info payload; a logic error.
    #[error("failed to serialize plugin info: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Delegate(#[from] DelegateError),

    /// Bad arguments to one of the plugin's own hidden commands.
    #[error(transparent)]
    Usage(Box<clap::Error>),
}
