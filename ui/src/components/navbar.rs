//! Page header with the theme toggle.

use dioxus::prelude::*;

use crate::core::{platform, theme};

#[component]
pub fn Navbar() -> Element {
    let mut theme_flag = use_signal(|| theme::resolve(&platform::theme_store()));

    // Mirror the flag onto <html data-theme="..."> on mount and every flip.
    use_effect(move || {
        platform::apply_document_theme(theme_flag());
    });

    rsx! {
        header { class: "navbar",
            span { class: "navbar__brand", "Resumescope" }
            button {
                id: "themeToggle",
                r#type: "button",
                class: "navbar__theme-toggle",
                onclick: move |_| {
                    let mut store = platform::theme_store();
                    let next = theme::toggle(&mut store, theme_flag());
                    theme_flag.set(next);
                },
                "{theme_flag().toggle_label()}"
            }
        }
    }
}
