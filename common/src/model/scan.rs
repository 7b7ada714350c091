use crate::model::analysis::{AnalysisResult, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload the client sends to the history store after a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScan {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    /// Data URI of the photo that was analysed.
    pub image_data: String,
}

/// One persisted scan. Created once by the store and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// UUID assigned by the store.
    pub id: String,
    pub disease: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub cure: Vec<String>,
    pub image_data: String,
    /// Assigned by the store on insert.
    pub created_at: DateTime<Utc>,
}

impl ScanRecord {
    /// Rebuilds the analysis this record was created from.
    pub fn analysis(&self) -> AnalysisResult {
        AnalysisResult {
            disease: self.disease.clone(),
            severity: self.severity,
            description: self.description.clone(),
            cure: self.cure.clone(),
        }
    }
}
