use serde::{Deserialize, Serialize};
use std::fmt;

/// Disease name the model reports when nothing is wrong with the crop.
pub const HEALTHY_DISEASE: &str = "Healthy Crop";

/// How badly a crop is affected.
///
/// The set is closed: the relay refuses to forward anything outside these
/// three values and the client themes each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No visible symptoms.
    Healthy,
    /// Early infection, less than 20% of the visible area affected.
    Mild,
    /// Advanced infection, more than 50% of the visible area affected.
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Healthy, Severity::Mild, Severity::Severe];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Healthy => "healthy",
            Severity::Mild => "mild",
            Severity::Severe => "severe",
        }
    }

    /// Parses a wire name. Unknown values give `None` rather than an error so
    /// callers can decide to render nothing.
    pub fn parse(value: &str) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized diagnosis produced by the relay for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Free-text disease name, or [`HEALTHY_DISEASE`].
    pub disease: String,
    pub severity: Severity,
    /// Two or three farmer-friendly sentences.
    pub description: String,
    /// Ordered treatment steps. May be empty.
    #[serde(default)]
    pub cure: Vec<String>,
}

impl AnalysisResult {
    /// Result returned when the model reply cannot be understood.
    pub fn fallback() -> Self {
        Self {
            disease: "Analysis Error".to_string(),
            severity: Severity::Mild,
            description: "Unable to analyze the image clearly. Please take a clearer photo in good lighting."
                .to_string(),
            cure: vec![
                "Ensure photo is taken in good natural light".to_string(),
                "Focus on affected leaf areas".to_string(),
                "Take multiple photos from different angles".to_string(),
                "Consult local agricultural expert if unsure".to_string(),
            ],
        }
    }

    /// Subtitle shown under the disease name.
    pub fn status_label(&self) -> String {
        match self.severity {
            Severity::Healthy => HEALTHY_DISEASE.to_string(),
            other => format!("{} Infection", other),
        }
    }

    /// Text read aloud by the speech playback button.
    pub fn narration(&self) -> String {
        format!(
            "{}. {}. Treatment: {}",
            self.disease,
            self.description,
            self.cure.join(". ")
        )
    }
}
