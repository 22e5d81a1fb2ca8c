use super::gateway::GatewayError;
use super::sequencer::{Advance, Alphabet, LetterSequencer};

/// Drawing area seam. The controller only ever wipes it; everything
/// else about the widget stays on the UI side.
pub trait CaptureSurface {
    fn clear(&mut self);
}

/// Drives the sample-collection workflow: which symbol is up, and what
/// happens when the backend acknowledges (or refuses) a save.
pub struct CaptureController {
    sequencer: LetterSequencer,
}

impl CaptureController {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            sequencer: LetterSequencer::new(alphabet),
        }
    }

    pub fn current_symbol(&self) -> char {
        self.sequencer.current_symbol()
    }

    pub fn progress(&self) -> (usize, usize) {
        self.sequencer.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.sequencer.alphabet()
    }

    /// Apply a save outcome and return the status line to show.
    ///
    /// On success the walk advances (completion overrides the saved
    /// message) and the surface is cleared for the next symbol, the
    /// final one included. On failure both are left untouched so the
    /// user can retry the same drawing.
    pub fn finish_save(
        &mut self,
        symbol: char,
        outcome: Result<(), GatewayError>,
        surface: &mut dyn CaptureSurface,
    ) -> String {
        match outcome {
            Ok(()) => {
                let status = match self.sequencer.advance() {
                    Advance::Next(_) => format!("Saved letter {symbol}"),
                    Advance::Complete => {
                        "Completed all letters! Try rendering some text.".to_string()
                    }
                };
                surface.clear();
                status
            }
            Err(err) => err.status("Error saving letter"),
        }
    }
}

/// Status line for a dataset-generation outcome. Seeding runs entirely
/// on the backend; the capture walk is not involved.
pub fn dataset_status(outcome: Result<String, GatewayError>) -> String {
    match outcome {
        Ok(message) => format!("{message}. Try drawing or rendering some text!"),
        Err(err) => err.status("Error generating test dataset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockSurface {
        clears: usize,
    }

    impl CaptureSurface for MockSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn test_successful_save_advances_and_clears() {
        let mut capture = CaptureController::new(Alphabet::standard());
        let mut surface = MockSurface::default();

        let status = capture.finish_save('A', Ok(()), &mut surface);

        assert_eq!(status, "Saved letter A");
        assert_eq!(capture.current_symbol(), 'B');
        assert_eq!(capture.progress(), (2, 62));
        assert_eq!(surface.clears, 1);
    }

    #[test]
    fn test_final_save_reports_completion_and_still_clears() {
        let mut capture = CaptureController::new(Alphabet::new("AB"));
        let mut surface = MockSurface::default();

        assert_eq!(capture.finish_save('A', Ok(()), &mut surface), "Saved letter A");
        let status = capture.finish_save('B', Ok(()), &mut surface);

        assert_eq!(status, "Completed all letters! Try rendering some text.");
        assert!(capture.is_complete());
        assert_eq!(capture.current_symbol(), 'B');
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn test_rejected_save_shows_backend_error_verbatim() {
        let mut capture = CaptureController::new(Alphabet::standard());
        let mut surface = MockSurface::default();

        let outcome = Err(GatewayError::Rejected(Some("duplicate".to_string())));
        let status = capture.finish_save('A', outcome, &mut surface);

        assert_eq!(status, "duplicate");
        assert_eq!(capture.current_symbol(), 'A');
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_rejected_save_without_detail_uses_fallback() {
        let mut capture = CaptureController::new(Alphabet::standard());
        let mut surface = MockSurface::default();

        let status = capture.finish_save('A', Err(GatewayError::Rejected(None)), &mut surface);

        assert_eq!(status, "Error saving letter");
        assert_eq!(capture.current_symbol(), 'A');
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_transport_failure_keeps_drawing() {
        let mut capture = CaptureController::new(Alphabet::standard());
        let mut surface = MockSurface::default();

        let outcome = Err(GatewayError::Transport("connection refused".to_string()));
        let status = capture.finish_save('A', outcome, &mut surface);

        assert_eq!(status, "Error: connection refused");
        assert_eq!(capture.current_symbol(), 'A');
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_dataset_status_success_appends_hint() {
        let status = dataset_status(Ok("Generated test dataset".to_string()));
        assert_eq!(
            status,
            "Generated test dataset. Try drawing or rendering some text!"
        );
    }

    #[test]
    fn test_dataset_status_failures() {
        let rejected = Err(GatewayError::Rejected(Some("font missing".to_string())));
        assert_eq!(dataset_status(rejected), "font missing");

        let bare = Err(GatewayError::Rejected(None));
        assert_eq!(dataset_status(bare), "Error generating test dataset");

        let transport = Err(GatewayError::Transport("timed out".to_string()));
        assert_eq!(dataset_status(transport), "Error: timed out");
    }
}
