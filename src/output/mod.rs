//! Styled terminal output for the plugin shim.
//!
//! Uses `anstyle` for ANSI style definitions and `anstream` for auto-detecting
//! terminal capabilities. Output gracefully degrades to plain text when piped
//! or when the terminal doesn't support colors — the host pipes both streams.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::ERROR;

/// Print plain text to stdout (for output the host parses verbatim).
pub(crate) fn plain(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{msg}").ok();
}

/// Render a command-execution failure to stderr as a multi-line report:
/// the failure itself on the first line behind the plugin tag, then each
/// underlying cause indented on its own line.
pub(crate) fn error_report(plugin: &str, err: &(dyn std::error::Error + 'static)) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}{plugin}: Error: {err}{ERROR:#}").ok();

    let mut cause = err.source();
    while let Some(err) = cause {
        writeln!(out, "{ERROR}  - {err}{ERROR:#}").ok();
        cause = err.source();
    }
}
