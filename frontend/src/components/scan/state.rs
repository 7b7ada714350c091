use yew::prelude::*;

/// Where the scan flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    /// A file dialog is open. Closing it without a choice leaves no trace,
    /// so this phase does not block the buttons.
    Capturing,
    Encoding,
    Requesting,
}

impl ScanPhase {
    /// While busy, capture buttons are disabled and new selections ignored.
    pub fn is_busy(self) -> bool {
        matches!(self, ScanPhase::Encoding | ScanPhase::Requesting)
    }
}

pub struct ScanComponent {
    pub phase: ScanPhase,
    /// Data URI of the photo being analysed, shown as a preview.
    pub captured_image: Option<String>,
    /// Hidden input opening the rear camera.
    pub camera_input_ref: NodeRef,
    /// Hidden input opening the gallery.
    pub gallery_input_ref: NodeRef,
}

impl ScanComponent {
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            captured_image: None,
            camera_input_ref: NodeRef::default(),
            gallery_input_ref: NodeRef::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_encoding_and_requesting_are_busy() {
        assert!(!ScanPhase::Idle.is_busy());
        assert!(!ScanPhase::Capturing.is_busy());
        assert!(ScanPhase::Encoding.is_busy());
        assert!(ScanPhase::Requesting.is_busy());
    }

    #[test]
    fn starts_idle_without_preview() {
        let component = ScanComponent::new();
        assert_eq!(component.phase, ScanPhase::Idle);
        assert!(component.captured_image.is_none());
    }
}
