//! The main page: upload form plus (when the host embedded one) the results
//! region.

use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::core::{platform, upload};
use crate::results::ResultsState;

use super::results::ResultsPanel;

/// Id of the job-description textarea; shared with the autosize glue.
const JOB_DESC_ID: &str = "job_desc";

#[component]
pub fn AnalyzePage() -> Element {
    // Embedded page data is read exactly once, at mount.
    let results = use_signal(ResultsState::load);
    let state = results();

    rsx! {
        main { class: "page page-analyze",
            AnalyzeForm {}

            if let Some(err) = state.error {
                div { class: "results-error", "⚠️ {err}" }
            }
            if let Some(snapshot) = state.snapshot {
                ResultsPanel { snapshot }
            }
        }
    }
}

#[component]
fn AnalyzeForm() -> Element {
    let mut accepted = use_signal(|| Option::<String>::None);
    let mut input_epoch = use_signal(|| 0u32);
    let mut submitting = use_signal(|| false);

    let on_file_change = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else { return };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let size = engine.file_size(&name).await.unwrap_or(0);
        match upload::validate_upload(&name, size) {
            Ok(()) => accepted.set(Some(name)),
            Err(err) => {
                platform::alert(&err.to_string());
                accepted.set(None);
                // Remounting the input drops the rejected native selection.
                input_epoch += 1;
            }
        }
    };

    rsx! {
        form {
            id: "atsForm",
            class: "analyze-form",
            action: "/analyze",
            method: "post",
            enctype: "multipart/form-data",

            div { class: "analyze-form__field",
                label { r#for: "resume", "Resume (TXT, PDF, or DOCX, up to 5 MB)" }
                input {
                    key: "{input_epoch}",
                    id: "resume",
                    name: "resume",
                    r#type: "file",
                    required: true,
                    accept: ".txt,.pdf,.docx",
                    class: if accepted().is_some() { "file-input file-input--accepted" } else { "file-input" },
                    onchange: on_file_change,
                }
            }

            div { class: "analyze-form__field",
                label { r#for: JOB_DESC_ID, "Job description" }
                textarea {
                    id: JOB_DESC_ID,
                    name: "job_desc",
                    rows: "6",
                    required: true,
                    placeholder: "Paste the job description to score against…",
                    oninput: move |_| platform::autosize_textarea(JOB_DESC_ID),
                }
            }

            // Submit feedback hangs off the button click so the form's native
            // submission (and the navigation that follows) stays untouched.
            button {
                r#type: "submit",
                class: if submitting() { "btn-primary btn-primary--busy" } else { "btn-primary" },
                disabled: submitting(),
                onclick: move |_| submitting.set(true),
                span { class: "btn-text", hidden: submitting(), "Analyze Resume" }
                span { class: "btn-loading", hidden: !submitting(), "⏳ Analyzing…" }
            }
        }
    }
}
