use fltk::{app, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

use scrawl_pad::app::messages::Message;
use scrawl_pad::app::settings::{AppSettings, ThemeMode};
use scrawl_pad::app::state::AppState;
use scrawl_pad::ui::dialogs::about::show_about_dialog;
use scrawl_pad::ui::main_window::build_main_window;
use scrawl_pad::ui::menu::build_menu;
use scrawl_pad::ui::theme::detect_system_dark_mode;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender, &settings);
    build_menu(&mut widgets.menu, &sender, dark_mode);

    let settings = Rc::new(RefCell::new(settings));
    let mut state = AppState::new(widgets, sender, settings, dark_mode);

    state.refresh_letter_panel();
    state.apply_current_theme();

    state.window.end();
    state.window.show();

    #[cfg(target_os = "windows")]
    scrawl_pad::ui::theme::set_windows_titlebar_theme(&state.window, dark_mode);

    log::info!(
        "ScrawlPad started, backend at {}",
        state.settings.borrow().backend_url
    );

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SaveLetter => state.save_letter(),
                Message::ClearCanvas => state.clear_canvas(),
                Message::GenerateDataset => state.generate_dataset(),
                Message::RenderText => state.render_text(),
                Message::CopyRendered => state.copy_rendered(),
                Message::OpenSettings => state.open_settings(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => app::quit(),
                Message::SaveLetterDone { symbol, outcome } => state.finish_save(symbol, outcome),
                Message::GenerateDatasetDone(outcome) => state.finish_dataset(outcome),
                Message::RenderTextDone(outcome) => state.finish_render(outcome),
            }
        }
    }
}
