use crate::app::render_controller::Clipboard;

/// System clipboard backed by FLTK's copy buffer.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        fltk::app::copy(text);
        Ok(())
    }
}
