//! Blocking browser dialogs.

use leptos::window;

pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::warn!("Unable to show alert '{message}': {err:?}");
    }
}

/// Returns `false` if the dialog could not be shown.
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or_else(|err| {
        log::warn!("Unable to show confirmation '{message}': {err:?}");
        false
    })
}
