//! Root-command delegation.
//!
//! The plugin's real functionality lives in the externally owned `imgpkg`
//! command tree. This layer only routes: anything that is not one of the
//! hidden auxiliary commands is handed to a [`RootDelegate`] untouched, and
//! the delegate's exit code becomes the plugin's exit code.

use std::ffi::OsString;
use std::process::Command;

/// The externally supplied command implementation the plugin wraps.
///
/// Implementations own the entire delegated CLI surface: flags, subcommands,
/// prompts, and exit codes are theirs, not the plugin's.
pub(crate) trait RootDelegate {
    /// Name used in error reports when the delegate cannot be reached.
    fn name(&self) -> &str;

    /// Run the delegated command tree with the given argument tail and
    /// return its exit code.
    fn run(&self, args: &[OsString]) -> Result<i32, DelegateError>;
}

/// Production delegate: forwards the invocation to a standalone executable
/// with inherited stdio, so the wrapped tool's own CLI surface is preserved
/// exactly.
#[derive(Debug)]
pub(crate) struct ExecDelegate {
    program: String,
}

impl ExecDelegate {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RootDelegate for ExecDelegate {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> Result<i32, DelegateError> {
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| DelegateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // A child killed by a signal has no exit code; report plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Errors reaching the delegated command tree.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DelegateError {
    #[error("cannot run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_exec_delegate_propagates_exit_code() {
        let ok = ExecDelegate::new("true");
        assert_eq!(ok.run(&[]).unwrap(), 0);

        let fail = ExecDelegate::new("false");
        assert_eq!(fail.run(&[]).unwrap(), 1);
    }

    #[test]
    fn test_exec_delegate_missing_program_is_spawn_error() {
        let delegate = ExecDelegate::new("definitely-not-an-installed-tool");
        let err = delegate.run(&[]).unwrap_err();
        assert!(matches!(err, DelegateError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-an-installed-tool"));
    }

    #[test]
    #[cfg(unix)]
    fn test_exec_delegate_forwards_arguments() {
        // `sh -c 'exit 7'` only exits 7 if both arguments arrive intact.
        let delegate = ExecDelegate::new("sh");
        let args = [OsString::from("-c"), OsString::from("exit 7")];
        assert_eq!(delegate.run(&args).unwrap(), 7);
    }
}
