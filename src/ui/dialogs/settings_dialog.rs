use fltk::{
    button::{Button, RadioRoundButton},
    enums::Color,
    frame::Frame,
    group::Group,
    input::Input,
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{AppSettings, ThemeMode};

const TIMEOUT_CHOICES: [u64; 4] = [5, 10, 30, 60];

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(350, 480)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    let vpack = Group::default()
        .with_size(320, 410)
        .with_pos(15, 15);

    // Backend section
    Frame::default().with_pos(15, 15).with_size(320, 25).with_label("Backend URL:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut url_input = Input::default().with_pos(30, 45).with_size(280, 25);
    url_input.set_value(&current_settings.backend_url);

    // Theme section
    Frame::default().with_pos(15, 85).with_size(320, 25).with_label("Theme:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let theme_group = Group::default().with_pos(30, 115).with_size(280, 75);
    let mut theme_light = RadioRoundButton::default().with_pos(30, 115).with_size(280, 25).with_label("Light");
    let mut theme_dark = RadioRoundButton::default().with_pos(30, 140).with_size(280, 25).with_label("Dark");
    let mut theme_system = RadioRoundButton::default().with_pos(30, 165).with_size(280, 25).with_label("System Default");
    theme_group.end();

    match current_settings.theme_mode {
        ThemeMode::Light => theme_light.set_value(true),
        ThemeMode::Dark => theme_dark.set_value(true),
        ThemeMode::SystemDefault => theme_system.set_value(true),
    }

    // Pen width section
    Frame::default().with_pos(15, 205).with_size(320, 25).with_label("Pen Width:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let pen_group = Group::default().with_pos(30, 235).with_size(280, 75);
    let mut pen_fine = RadioRoundButton::default().with_pos(30, 235).with_size(280, 25).with_label("Fine (2)");
    let mut pen_medium = RadioRoundButton::default().with_pos(30, 260).with_size(280, 25).with_label("Medium (4)");
    let mut pen_broad = RadioRoundButton::default().with_pos(30, 285).with_size(280, 25).with_label("Broad (7)");
    pen_group.end();

    match current_settings.pen_width {
        2 => pen_fine.set_value(true),
        7 => pen_broad.set_value(true),
        _ => pen_medium.set_value(true),
    }

    // Timeout section
    Frame::default().with_pos(15, 325).with_size(320, 25).with_label("Request Timeout:").with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut timeout_choice = Choice::default().with_pos(30, 355).with_size(280, 25);
    for secs in TIMEOUT_CHOICES {
        timeout_choice.add_choice(&format!("{} seconds", secs));
    }
    timeout_choice.set_value(timeout_index(current_settings.request_timeout_secs));

    // Info text
    let mut info_frame = Frame::default().with_pos(30, 390).with_size(290, 35);
    info_frame.set_label("Rendering quality depends on the letters\nyou have saved so far.");
    info_frame.set_label_size(11);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(fltk::enums::Align::Left | fltk::enums::Align::Inside | fltk::enums::Align::Wrap);

    vpack.end();

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(150, 435).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(250, 435).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let url = url_input.value().trim().to_string();
        let new_settings = AppSettings {
            backend_url: if url.is_empty() {
                current.backend_url.clone()
            } else {
                url
            },
            theme_mode: if theme_light.value() {
                ThemeMode::Light
            } else if theme_dark.value() {
                ThemeMode::Dark
            } else {
                ThemeMode::SystemDefault
            },
            pen_width: if pen_fine.value() {
                2
            } else if pen_broad.value() {
                7
            } else {
                4
            },
            request_timeout_secs: index_to_timeout(timeout_choice.value())
                .unwrap_or(current.request_timeout_secs),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

/// Convert timeout seconds to dropdown index
fn timeout_index(secs: u64) -> i32 {
    TIMEOUT_CHOICES
        .iter()
        .position(|t| *t == secs)
        .map(|i| i as i32)
        .unwrap_or(1)
}

/// Convert dropdown index to timeout seconds
fn index_to_timeout(index: i32) -> Option<u64> {
    if index < 0 {
        return None;
    }
    TIMEOUT_CHOICES.get(index as usize).copied()
}
