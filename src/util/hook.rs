use tracing::error;

use crate::ui::tui;

/// Restores the terminal and logs the panic before the default hook (or
/// color-eyre's) prints the report.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        error!("{}", panic_info);
        hook(panic_info);
    }));
}
