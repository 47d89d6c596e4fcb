use crate::tags::TagCounts;
use serde::{Deserialize, Serialize};

/// Generated report as listed on the reports page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub report_id: String,
    pub scope: String,
    pub generated_at: String,
    pub tag_counts: TagCounts,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportHighlights {
    #[serde(default)]
    pub top_risks: Vec<String>,
    #[serde(default)]
    pub improving: Vec<String>,
    #[serde(default)]
    pub worsening: Vec<String>,
}

/// Full report with highlight lists and analyst notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    #[serde(flatten)]
    pub summary: ReportSummary,
    #[serde(default)]
    pub highlights: ReportHighlights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReportHighlights {
    /// Sections in display order, paired with their headings.
    pub fn sections(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Top risks", self.top_risks.as_slice()),
            ("Improving", self.improving.as_slice()),
            ("Worsening", self.worsening.as_slice()),
        ]
    }
}
