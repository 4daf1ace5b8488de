//! `post-install` — run the descriptor's post-install hook.

use crate::descriptor::PluginDescriptor;
use crate::plugin::PluginError;

/// Invoke the post-install hook once. A plugin without a hook has nothing to
/// configure, so the command succeeds. Hook errors propagate unchanged; the
/// hook's own message is authoritative and no usage text accompanies it.
pub(crate) fn run(descriptor: &PluginDescriptor) -> Result<(), PluginError> {
    match descriptor.post_install_hook {
        Some(hook) => hook().map_err(PluginError::Hook),
        None => Ok(()),
    }
}
