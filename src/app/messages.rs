use super::gateway::GatewayError;

/// All messages that can be sent through the FLTK channel.
/// Each button or menu callback sends one of these; the dispatch loop
/// in main handles them. Backend exchanges resolve by sending a
/// `*Done` message back from their worker thread.
#[derive(Debug, Clone)]
pub enum Message {
    // Capture
    SaveLetter,
    ClearCanvas,
    GenerateDataset,

    // Render
    RenderText,
    CopyRendered,

    // Settings & Help
    OpenSettings,
    ToggleDarkMode,
    ShowAbout,
    Quit,

    // Background completions
    SaveLetterDone {
        symbol: char,
        outcome: Result<(), GatewayError>,
    },
    GenerateDatasetDone(Result<String, GatewayError>),
    RenderTextDone(Result<String, GatewayError>),
}
