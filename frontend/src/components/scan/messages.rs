use crate::api::ScanFailure;
use common::model::analysis::AnalysisResult;

pub enum Msg {
    OpenCamera,
    OpenGallery,
    /// `None` when the dialog closed without a file.
    FileSelected(Option<web_sys::File>),
    Encoded(String),
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed(ScanFailure),
    Back,
}
