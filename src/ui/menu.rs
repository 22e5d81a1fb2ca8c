use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Settings...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Letters
    menu.add("Letters/Save Current Letter", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveLetter) });
    menu.add("Letters/Clear Drawing", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearCanvas) });
    menu.add("Letters/Generate Test Dataset", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GenerateDataset) });

    // Text
    menu.add("Text/Render Handwriting", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RenderText) });
    menu.add("Text/Copy Rendered Text", Shortcut::Ctrl | Shortcut::Shift | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CopyRendered) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Help
    menu.add("Help/About ScrawlPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
