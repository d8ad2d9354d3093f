use dioxus::prelude::*;

use ui::components::Navbar;
use ui::core::platform;
use ui::views::AnalyzePage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Page-lifetime concerns: the print-mode class toggles around the native
    // print dialog for as long as the page lives.
    use_effect(|| {
        platform::install_print_listeners();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Navbar {}
        AnalyzePage {}
    }
}
