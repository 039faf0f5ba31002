use std::panic;
use leptos::logging::{error, log};

/// Installs `console_error_panic_hook` and adds a one-line summary with the
/// panic location, so panics inside `spawn_local` tasks are easy to spot.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!("[PANIC] {} at {}", message, location);
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
