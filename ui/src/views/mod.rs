mod analyze;
pub use analyze::AnalyzePage;

mod results;
pub use results::ResultsPanel;
