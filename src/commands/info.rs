//! `info` — serialize the descriptor plus runtime metadata as JSON.

use crate::buildinfo;
use crate::descriptor::{PluginDescriptor, PluginInfo};
use crate::output;
use crate::plugin::PluginError;

/// Print the plugin-info record as a single JSON line on stdout. The host
/// parses this during discovery, so stdout carries nothing else.
pub(crate) fn run(descriptor: &PluginDescriptor) -> Result<(), PluginError> {
    let info = PluginInfo::new(descriptor, buildinfo::RUNTIME_VERSION)?;
    let json = serde_json::to_string(&info)?;
    output::plain(json);
    Ok(())
}
