//! Results region: score headline, radar chart, section list, keyword chips,
//! and the export / clear-history actions.

use dioxus::prelude::*;

use crate::core::history::{self, ClearOutcome};
use crate::core::platform;
use crate::results::{AnalysisSnapshot, ResultsExportPanel, SectionChart};

/// Fixed pause before the results card scrolls into view.
const SCROLL_DELAY_MS: u64 = 300;

#[component]
pub fn ResultsPanel(snapshot: AnalysisSnapshot) -> Element {
    // One-shot: after the card rendered, bring it into view.
    use_effect(|| {
        platform::spawn_future(async {
            platform::sleep_ms(SCROLL_DELAY_MS).await;
            platform::scroll_results_into_view();
        });
    });

    let similarity = snapshot
        .similarity
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    let has_keywords =
        !snapshot.keywords.matching.is_empty() || !snapshot.keywords.missing.is_empty();

    rsx! {
        section { class: "results-container", id: "results",
            header { class: "results-container__header",
                h2 { "Analysis Results" }
            }

            div { class: "score-card",
                span { class: "score-number", "{similarity}" }
                span { class: "score-label", "overall match" }
            }

            if let Some(chart) = snapshot.chart.clone() {
                div { class: "results-card results-card--chart",
                    h3 { "Section breakdown" }
                    SectionChart { data: chart }
                }
            }

            if !snapshot.sections.is_empty() {
                div { class: "results-card results-card--sections",
                    h3 { "Section scores" }
                    for section in snapshot.sections.iter() {
                        div { class: "section-item",
                            span { class: "section-name", "{section.name}" }
                            span { class: "section-score", "{section.score}" }
                        }
                    }
                }
            }

            if has_keywords {
                div { class: "results-card results-card--keywords",
                    h3 { "Keywords" }
                    div { class: "keyword-list",
                        for word in snapshot.keywords.matching.iter() {
                            span { class: "keyword-tag match", "{word}" }
                        }
                        for word in snapshot.keywords.missing.iter() {
                            span { class: "keyword-tag missing", "{word}" }
                        }
                    }
                }
            }

            div { class: "results-actions",
                ResultsExportPanel { snapshot: snapshot.clone() }
                ClearHistoryButton {}
            }
        }
    }
}

#[component]
fn ClearHistoryButton() -> Element {
    let mut busy = use_signal(|| false);

    rsx! {
        button {
            r#type: "button",
            class: "btn-danger results-actions__clear",
            disabled: busy(),
            onclick: move |_| async move {
                if busy() {
                    return;
                }
                busy.set(true);
                run_clear_history().await;
                busy.set(false);
            },
            "🗑 Clear History"
        }
    }
}

/// Confirm, fire the single POST, reflect the outcome. Declining issues no
/// request at all; one attempt per click.
async fn run_clear_history() {
    if !platform::confirm("Are you sure you want to clear all analysis history?") {
        return;
    }
    let Some(origin) = platform::origin() else {
        platform::alert("❌ Error clearing history: page origin unavailable");
        return;
    };
    match history::request_clear(&origin).await {
        Ok(response) => match history::interpret(&response) {
            ClearOutcome::Cleared => {
                platform::alert("✓ History cleared successfully!");
                platform::reload_page();
            }
            ClearOutcome::Failed(message) => {
                platform::alert(&format!("❌ Error clearing history: {message}"));
            }
        },
        Err(err) => platform::alert(&format!("❌ Error clearing history: {err}")),
    }
}
