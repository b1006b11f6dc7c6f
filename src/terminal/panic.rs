//! Panic hook that restores the terminal before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating the
/// [`TerminalManager`](super::TerminalManager), after `color_eyre::install`
/// so its report handler is the one chained to.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
