//! JSON export of the on-page analysis results.
//!
//! Triggered only by the user. The payload is rebuilt from the current
//! snapshot at every click, serialized as indented JSON, and handed to the
//! browser as a one-shot blob download named after the export instant.

use dioxus::prelude::*;
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::core::platform;

use super::{AnalysisSnapshot, KeywordSets, SectionScore};

/// Downloadable payload: ISO-8601 timestamp, similarity text (or `"N/A"`),
/// ordered section scores, and the two keyword buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisExport {
    pub timestamp: String,
    pub similarity: String,
    pub sections: Vec<SectionScore>,
    pub keywords: KeywordSets,
}

impl AnalysisExport {
    pub fn capture(snapshot: &AnalysisSnapshot, timestamp: String) -> Self {
        Self {
            timestamp,
            similarity: snapshot
                .similarity
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            sections: snapshot.sections.clone(),
            keywords: snapshot.keywords.clone(),
        }
    }
}

pub fn export_filename(unix_ms: i64) -> String {
    format!("resume-analysis-{unix_ms}.json")
}

/// Current instant as (RFC 3339 string, unix milliseconds).
fn now_stamps() -> (String, i64) {
    let now = OffsetDateTime::now_utc();
    let iso = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string());
    let ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    (iso, ms)
}

/// Build, serialize, and download the export. Returns the filename used.
pub async fn export_snapshot(snapshot: &AnalysisSnapshot) -> Result<String, String> {
    let (iso, ms) = now_stamps();
    let payload = AnalysisExport::capture(snapshot, iso);
    let json = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
    let filename = export_filename(ms);
    download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(filename)
}

#[component]
pub fn ResultsExportPanel(snapshot: AnalysisSnapshot) -> Element {
    let mut busy = use_signal(|| false);

    rsx! {
        button {
            r#type: "button",
            class: "btn-secondary results-actions__export",
            disabled: busy(),
            onclick: move |_| {
                let snapshot = snapshot.clone();
                async move {
                    if busy() {
                        return;
                    }
                    busy.set(true);
                    match export_snapshot(&snapshot).await {
                        Ok(filename) => {
                            tracing::info!(%filename, "results exported");
                            platform::alert("✓ Results exported successfully!");
                        }
                        Err(err) => platform::alert(&format!("❌ Export failed: {err}")),
                    }
                    busy.set(false);
                }
            },
            "📥 Export Results"
        }
    }
}

async fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (filename, mime, bytes);
        Err("Downloads are only available in the browser".to_string())
    }
}
