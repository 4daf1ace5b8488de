//! Handlers for the plugin's hidden auxiliary commands.
//!
//! Each module handles one host-driven command; everything user-facing is
//! delegated to the wrapped command tree and never lands here.

pub(crate) mod describe;
pub(crate) mod info;
pub(crate) mod post_install;
