mod chart;
pub use chart::SectionChart;

mod export;
pub use export::ResultsExportPanel;

pub use chart::{radar_geometry, RadarGeometry, AXIS_MAX, TICK_STEP};
pub use export::AnalysisExport;

use serde::{Deserialize, Serialize};

use crate::core::platform;

/// One scored resume section as the host page presents it, score text
/// included verbatim (e.g. `"80%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub score: String,
}

/// Keyword buckets split the way the page renders its chips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSets {
    #[serde(default)]
    pub matching: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

/// Chart input exactly as the host embeds it: parallel label/value arrays.
/// Read once at load; never mutated by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Everything the server-rendered host page knows about the last analysis,
/// parsed from the embedded `#analysis-data` JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    #[serde(default)]
    pub similarity: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionScore>,
    #[serde(default)]
    pub keywords: KeywordSets,
    #[serde(default)]
    pub chart: Option<SectionChartData>,
}

pub fn parse_snapshot(raw: &str) -> Result<AnalysisSnapshot, String> {
    serde_json::from_str(raw).map_err(|err| err.to_string())
}

/// Load state for the results region: a snapshot when the host embedded one,
/// an error when it embedded something unreadable, neither on a fresh page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    pub snapshot: Option<AnalysisSnapshot>,
    pub error: Option<String>,
}

impl ResultsState {
    pub fn load() -> Self {
        match platform::embedded_analysis_json() {
            None => Self::default(),
            Some(raw) => match parse_snapshot(&raw) {
                Ok(snapshot) => Self {
                    snapshot: Some(snapshot),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(%err, "embedded analysis data did not parse");
                    Self {
                        snapshot: None,
                        error: Some(format!("Couldn't read analysis results: {err}")),
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_snapshot() {
        let raw = r#"{
            "similarity": "87%",
            "sections": [
                {"name": "Experience", "score": "80%"},
                {"name": "Skills", "score": "65%"}
            ],
            "keywords": {"matching": ["Python"], "missing": ["Kubernetes"]},
            "chart": {"labels": ["Experience", "Skills"], "values": [80.0, 65.0]}
        }"#;

        let snapshot = parse_snapshot(raw).unwrap();
        assert_eq!(snapshot.similarity.as_deref(), Some("87%"));
        assert_eq!(snapshot.sections.len(), 2);
        assert_eq!(snapshot.sections[0].name, "Experience");
        assert_eq!(snapshot.sections[0].score, "80%");
        assert_eq!(snapshot.keywords.matching, vec!["Python"]);
        assert_eq!(snapshot.keywords.missing, vec!["Kubernetes"]);
        assert_eq!(snapshot.chart.unwrap().values, vec![80.0, 65.0]);
    }

    #[test]
    fn missing_fields_default() {
        let snapshot = parse_snapshot("{}").unwrap();
        assert!(snapshot.similarity.is_none());
        assert!(snapshot.sections.is_empty());
        assert!(snapshot.keywords.matching.is_empty());
        assert!(snapshot.chart.is_none());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_snapshot("not json").is_err());
    }
}
