pub mod canvas;
pub mod clipboard;
pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod render_view;
pub mod theme;
