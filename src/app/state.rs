use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    dialog,
    frame::Frame,
    input::MultilineInput,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::capture_controller::{CaptureController, dataset_status};
use super::gateway::{BackendGateway, GatewayError};
use super::messages::Message;
use super::render_controller::{RenderController, RenderFinish};
use super::sequencer::Alphabet;
use super::settings::{AppSettings, ThemeMode};
use super::status::StatusLine;
use crate::ui::canvas::CanvasView;
use crate::ui::clipboard::SystemClipboard;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::render_view::RenderHost;
use crate::ui::theme::{ThemeWidgets, apply_theme, detect_system_dark_mode};

pub struct AppState {
    pub capture: CaptureController,
    pub render: RenderController,
    pub status: StatusLine,
    pub window: Window,
    pub menu: MenuBar,
    pub letter_frame: Frame,
    pub canvas: CanvasView,
    pub text_input: MultilineInput,
    pub render_host: RenderHost,
    pub status_frame: Frame,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        Self {
            capture: CaptureController::new(Alphabet::standard()),
            render: RenderController::new(),
            status: StatusLine::new(),
            window: widgets.wind,
            menu: widgets.menu,
            letter_frame: widgets.letter_frame,
            canvas: widgets.canvas,
            text_input: widgets.text_input,
            render_host: widgets.render_host,
            status_frame: widgets.status_frame,
            sender,
            settings,
            dark_mode,
        }
    }

    /// Write a message to the status line (model and widget together).
    pub fn set_status(&mut self, message: &str) {
        self.status.set(message);
        self.status_frame.set_label(message);
    }

    /// Update the letter panel from the capture walk.
    pub fn refresh_letter_panel(&mut self) {
        let (current, total) = self.capture.progress();
        self.letter_frame.set_label(&format!(
            "Current letter: {}   ({current} / {total})",
            self.capture.current_symbol()
        ));
    }

    fn gateway(&self) -> BackendGateway {
        let settings = self.settings.borrow();
        BackendGateway::new(settings.backend_url.clone(), settings.request_timeout_secs)
    }

    // --- Capture workflow ---

    /// Snapshot the canvas and submit it for the current symbol.
    /// The sequencer moves only when the backend acknowledges, so the
    /// completion carries the symbol this request was made for.
    pub fn save_letter(&mut self) {
        let symbol = self.capture.current_symbol();
        let image = match self.canvas.snapshot_png() {
            Ok(bytes) => bytes,
            Err(detail) => {
                log::warn!("canvas snapshot failed: {detail}");
                self.set_status(&format!("Error: {detail}"));
                return;
            }
        };

        log::info!("submitting sample for {symbol:?}");
        let gateway = self.gateway();
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = gateway.save_letter(symbol, &image);
            sender.send(Message::SaveLetterDone { symbol, outcome });
        });
    }

    pub fn finish_save(&mut self, symbol: char, outcome: Result<(), GatewayError>) {
        let status = self.capture.finish_save(symbol, outcome, &mut self.canvas);
        self.refresh_letter_panel();
        self.set_status(&status);
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
    }

    pub fn generate_dataset(&mut self) {
        let letterlist = self.capture.alphabet().request_string();
        log::info!("requesting test dataset for {} symbols", letterlist.len());
        let gateway = self.gateway();
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = gateway.generate_test_dataset(&letterlist);
            sender.send(Message::GenerateDatasetDone(outcome));
        });
    }

    pub fn finish_dataset(&mut self, outcome: Result<String, GatewayError>) {
        let status = dataset_status(outcome);
        self.set_status(&status);
    }

    // --- Render workflow ---

    pub fn render_text(&mut self) {
        let raw = self.text_input.value();
        let text = match self.render.begin(&raw) {
            Ok(text) => text,
            Err(status) => {
                self.set_status(&status);
                return;
            }
        };

        log::info!("rendering {} chars", text.len());
        let gateway = self.gateway();
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = gateway.render_text(&text);
            sender.send(Message::RenderTextDone(outcome));
        });
    }

    pub fn finish_render(&mut self, outcome: Result<String, GatewayError>) {
        match self.render.finish(outcome) {
            RenderFinish::Replaced { status } => {
                if let Some(markup) = self.render.page_markup() {
                    self.render_host.materialize(markup);
                }
                self.set_status(&status);
            }
            RenderFinish::Failed { status } => self.set_status(&status),
        }
    }

    pub fn copy_rendered(&mut self) {
        let mut clipboard = SystemClipboard;
        let status = self.render.export(&mut clipboard);
        self.set_status(&status);
    }

    // --- Settings & theme ---

    pub fn apply_current_theme(&mut self) {
        apply_theme(
            &mut ThemeWidgets {
                window: &mut self.window,
                menu: &mut self.menu,
                letter_frame: &mut self.letter_frame,
                text_input: &mut self.text_input,
                status_frame: &mut self.status_frame,
            },
            self.dark_mode,
        );
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_current_theme();
    }

    pub fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
                return;
            }
            self.apply_settings(new_settings);
        }
    }

    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        let is_dark = match new_settings.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        };
        self.dark_mode = is_dark;
        self.apply_current_theme();
        self.update_menu_checkbox("View/Toggle Dark Mode", is_dark);

        self.canvas.set_pen_width(new_settings.pen_width);

        // backend_url and timeout are read per exchange, nothing to rebind
        *self.settings.borrow_mut() = new_settings;
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
