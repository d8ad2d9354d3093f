//! Browser glue, cfg-split so the rest of the crate stays platform-free.
//!
//! Everything here either talks to `web-sys` (wasm builds) or degrades to a
//! harmless stand-in (native test builds). Failures are tolerated silently
//! where the page contract allows it; the helpers log instead of raising.

use crate::core::theme::{Theme, ThemeStore};

/// Body class toggled around the native print lifecycle.
pub const PRINT_MODE_CLASS: &str = "printing";

/// Element id of the host page's embedded analysis JSON.
pub const ANALYSIS_DATA_ID: &str = "analysis-data";

/// Explicit height applied after an autosize measurement.
pub fn autosize_css_height(scroll_height: i32) -> String {
    format!("{scroll_height}px")
}

// ---------------------------------------------------------------------------
// wasm: the real browser bindings
// ---------------------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::core::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

    use super::*;

    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    fn document() -> Option<web_sys::Document> {
        window().and_then(|w| w.document())
    }

    pub fn spawn_future<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    pub async fn sleep_ms(ms: u64) {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }

    pub fn alert(message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn confirm(message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    pub fn origin() -> Option<String> {
        window().and_then(|w| w.location().origin().ok())
    }

    pub fn reload_page() {
        if let Some(window) = window() {
            if window.location().reload().is_err() {
                tracing::warn!("page reload was refused by the browser");
            }
        }
    }

    /// Theme store backed by per-origin local storage. Storage being blocked
    /// (private mode, embedded frames) degrades to the light default.
    #[derive(Debug, Default)]
    pub struct PlatformThemeStore;

    impl ThemeStore for PlatformThemeStore {
        fn load(&self) -> Option<String> {
            window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        }

        fn save(&mut self, value: &str) {
            let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
                tracing::warn!("local storage unavailable; theme will not persist");
                return;
            };
            if storage.set_item(THEME_STORAGE_KEY, value).is_err() {
                tracing::warn!("failed to persist theme flag");
            }
        }
    }

    pub fn apply_document_theme(theme: Theme) {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_attr());
        }
    }

    /// Grow a textarea to fit its content: height auto, then the measured
    /// scroll height. Missing element is a silent no-op.
    pub fn autosize_textarea(id: &str) {
        let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let Ok(area) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
            return;
        };
        let style = area.style();
        let _ = style.set_property("height", "auto");
        let _ = style.set_property("height", &autosize_css_height(area.scroll_height()));
    }

    /// Smooth-scroll the results card into view, top-aligned.
    pub fn scroll_results_into_view() {
        let Some(element) = document()
            .and_then(|d| d.query_selector(".results-container").ok().flatten())
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Toggle the print-mode body class around the native print dialog. The
    /// closures stay alive for the page's lifetime.
    pub fn install_print_listeners() {
        let Some(window) = window() else { return };

        let on_before = Closure::<dyn FnMut()>::new(|| set_print_mode(true));
        let on_after = Closure::<dyn FnMut()>::new(|| set_print_mode(false));

        let _ = window
            .add_event_listener_with_callback("beforeprint", on_before.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("afterprint", on_after.as_ref().unchecked_ref());

        on_before.forget();
        on_after.forget();
    }

    fn set_print_mode(active: bool) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let result = if active {
            body.class_list().add_1(PRINT_MODE_CLASS)
        } else {
            body.class_list().remove_1(PRINT_MODE_CLASS)
        };
        if result.is_err() {
            tracing::warn!("failed to toggle print-mode class");
        }
    }

    /// Raw JSON text the server-rendered host embedded, when present.
    pub fn embedded_analysis_json() -> Option<String> {
        let text = document()
            .and_then(|d| d.get_element_by_id(ANALYSIS_DATA_ID))
            .and_then(|el| el.text_content())?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// native: inert stand-ins so the crate tests without a browser
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    static THEME_CELL: OnceLock<Mutex<Option<String>>> = OnceLock::new();

    fn theme_cell() -> &'static Mutex<Option<String>> {
        THEME_CELL.get_or_init(|| Mutex::new(None))
    }

    pub fn spawn_future<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        futures::executor::block_on(future);
    }

    pub async fn sleep_ms(ms: u64) {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }

    pub fn alert(message: &str) {
        tracing::info!(message, "alert");
    }

    pub fn confirm(message: &str) -> bool {
        tracing::info!(message, "confirm auto-declined (no interactive dialog)");
        false
    }

    pub fn origin() -> Option<String> {
        None
    }

    pub fn reload_page() {}

    /// Process-local theme store; persists for the session only.
    #[derive(Debug, Default)]
    pub struct PlatformThemeStore;

    impl ThemeStore for PlatformThemeStore {
        fn load(&self) -> Option<String> {
            theme_cell().lock().ok().and_then(|cell| cell.clone())
        }

        fn save(&mut self, value: &str) {
            if let Ok(mut cell) = theme_cell().lock() {
                *cell = Some(value.to_string());
            }
        }
    }

    pub fn apply_document_theme(_theme: Theme) {}

    pub fn autosize_textarea(_id: &str) {}

    pub fn scroll_results_into_view() {}

    pub fn install_print_listeners() {}

    pub fn embedded_analysis_json() -> Option<String> {
        None
    }
}

pub use imp::{
    alert, apply_document_theme, autosize_textarea, confirm, embedded_analysis_json,
    install_print_listeners, origin, reload_page, scroll_results_into_view, sleep_ms, spawn_future,
    PlatformThemeStore,
};

/// Handle to the platform's theme store.
pub fn theme_store() -> PlatformThemeStore {
    PlatformThemeStore
}
