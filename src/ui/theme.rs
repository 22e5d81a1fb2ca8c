use fltk::{
    enums::Color,
    frame::Frame,
    input::MultilineInput,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

/// The widgets retinted on a theme change. The drawing canvas and the
/// rendered page keep their own colors in both modes.
pub struct ThemeWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub letter_frame: &'a mut Frame,
    pub text_input: &'a mut MultilineInput,
    pub status_frame: &'a mut Frame,
}

pub fn apply_theme(widgets: &mut ThemeWidgets, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        widgets.window.set_color(Color::from_rgb(25, 25, 25));
        widgets.window.set_label_color(Color::from_rgb(220, 220, 220));
        widgets.menu.set_color(Color::from_rgb(35, 35, 35));
        widgets.menu.set_text_color(Color::from_rgb(220, 220, 220));
        widgets.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        widgets.letter_frame.set_label_color(Color::from_rgb(220, 220, 220));
        widgets.text_input.set_color(Color::from_rgb(30, 30, 30));
        widgets.text_input.set_text_color(Color::from_rgb(220, 220, 220));
        widgets.text_input.set_cursor_color(Color::from_rgb(255, 255, 255));
        widgets.text_input.set_selection_color(Color::from_rgb(70, 70, 100));
        widgets.status_frame.set_label_color(Color::from_rgb(200, 200, 200));
    } else {
        // Light mode colors
        widgets.window.set_color(Color::from_rgb(240, 240, 240));
        widgets.window.set_label_color(Color::Black);
        widgets.menu.set_color(Color::from_rgb(240, 240, 240));
        widgets.menu.set_text_color(Color::Black);
        widgets.menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        widgets.letter_frame.set_label_color(Color::Black);
        widgets.text_input.set_color(Color::White);
        widgets.text_input.set_text_color(Color::Black);
        widgets.text_input.set_cursor_color(Color::Black);
        widgets.text_input.set_selection_color(Color::from_rgb(173, 216, 230));
        widgets.status_frame.set_label_color(Color::from_rgb(60, 60, 60));
    }

    widgets.window.redraw();
    widgets.menu.redraw();
    widgets.letter_frame.redraw();
    widgets.text_input.redraw();
    widgets.status_frame.redraw();
}

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME exposes the preference through gsettings
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if theme.contains("dark") {
                return true;
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                return true;
            }
        }
    }

    // macOS: Check AppleInterfaceStyle
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    // Default to light mode if detection fails
    false
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
