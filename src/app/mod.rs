//! Application layer: workflow logic, kept free of widget construction.
//!
//! # Structure
//!
//! - `sequencer.rs` - Alphabet walk (which symbol is up next)
//! - `capture_controller.rs` - Save/dataset workflow policy
//! - `render_controller.rs` - Render workflow, held result, export
//! - `gateway.rs` - JSON-over-HTTP exchanges with the backend
//! - `status.rs` - Single last-write-wins status line
//! - `state.rs` - Main application coordinator
//!
//! Every backend exchange runs on a worker thread and resolves by
//! sending a completion `Message` back to the dispatch loop in main.

pub mod capture_controller;
pub mod error;
pub mod gateway;
pub mod messages;
pub mod render_controller;
pub mod sequencer;
pub mod settings;
pub mod state;
pub mod status;

// Re-exports for convenient external access
pub use capture_controller::{CaptureController, CaptureSurface};
pub use error::{AppError, Result};
pub use gateway::{BackendGateway, GatewayError};
pub use messages::Message;
pub use render_controller::{Clipboard, RenderController};
pub use sequencer::{Alphabet, LetterSequencer};
pub use settings::{AppSettings, ThemeMode};
pub use state::AppState;
pub use status::StatusLine;
