//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then defers to the
/// previous hook to print the panic message.
///
/// Call early in `main`, before creating the `TerminalManager`. When
/// `color_eyre::install` is used, install it first so its hook is the one
/// chained here.
///
/// # Example
///
/// ```no_run
/// use folio::terminal::setup_panic_hook;
///
/// fn main() {
///     setup_panic_hook();
///     // ... rest of initialization ...
/// }
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
