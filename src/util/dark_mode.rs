//! Theme preference persistence behind the dark-mode toggle.
//!
//! The choice lives in `localStorage` under a single key and is mirrored to
//! a `data-theme` attribute on `<html>` so the stylesheet can key off it.
//! With no stored choice, the OS color-scheme query decides. Outside a
//! browser (SSR, native tests) everything is a deterministic no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "lifeboard_dark";

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(value == "true")
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[cfg(feature = "hydrate")]
fn set_theme_attr(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(el) = root {
        let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}

/// Resolve the dark-mode preference (stored choice, else the OS color
/// scheme) and style the document accordingly. Returns the resolved value
/// so callers can seed UI state with it.
pub fn init() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let dark = stored_preference().unwrap_or_else(system_prefers_dark);
        set_theme_attr(dark);
        dark
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Flip the theme, persist the choice, and restyle the document.
/// Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    #[cfg(feature = "hydrate")]
    {
        set_theme_attr(next);
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
