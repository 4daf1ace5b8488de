//! `describe` — print the plugin description for host discovery.

use crate::output;

pub(crate) fn run(description: &str) {
    output::plain(description);
}
