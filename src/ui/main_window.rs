use fltk::{
    app::Sender,
    button::Button,
    enums::Align,
    frame::Frame,
    group::Flex,
    input::MultilineInput,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::canvas::{CANVAS_SIZE, CanvasView};
use super::render_view::RenderHost;
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub letter_frame: Frame,
    pub canvas: CanvasView,
    pub text_input: MultilineInput,
    pub render_host: RenderHost,
    pub status_frame: Frame,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, 720, 860, "\u{270d} ScrawlPad");
    wind.set_xclass("ScrawlPad");

    let mut flex = Flex::new(0, 0, 720, 860, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Shows "Current letter: X (n / total)" while letters remain
    let mut letter_frame = Frame::default();
    letter_frame.set_label_size(16);
    flex.fixed(&letter_frame, 28);

    // Center the fixed-size canvas between two stretch frames
    let mut canvas_row = Flex::default();
    canvas_row.set_type(fltk::group::FlexType::Row);
    Frame::default();
    let canvas = CanvasView::new(settings.pen_width);
    canvas_row.fixed(&canvas.widget, CANVAS_SIZE);
    Frame::default();
    canvas_row.end();
    flex.fixed(&canvas_row, CANVAS_SIZE);

    let mut capture_row = Flex::default();
    capture_row.set_type(fltk::group::FlexType::Row);
    let mut save_btn = Button::default().with_label("Save Letter");
    save_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::SaveLetter)
    });
    let mut clear_btn = Button::default().with_label("Clear");
    clear_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::ClearCanvas)
    });
    let mut dataset_btn = Button::default().with_label("Generate Test Dataset");
    dataset_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::GenerateDataset)
    });
    capture_row.end();
    flex.fixed(&capture_row, 36);

    let mut text_input = MultilineInput::default();
    text_input.set_wrap(true);
    flex.fixed(&text_input, 96);

    let mut render_row = Flex::default();
    render_row.set_type(fltk::group::FlexType::Row);
    let mut render_btn = Button::default().with_label("Render Handwriting");
    render_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::RenderText)
    });
    let mut copy_btn = Button::default().with_label("Copy to Clipboard");
    copy_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::CopyRendered)
    });
    render_row.end();
    flex.fixed(&render_row, 36);

    // Rendered handwriting fills whatever height is left
    let render_host = RenderHost::new();

    let mut status_frame = Frame::default();
    status_frame.set_align(Align::Left | Align::Inside);
    status_frame.set_label_size(13);
    flex.fixed(&status_frame, 26);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        letter_frame,
        canvas,
        text_input,
        render_host,
        status_frame,
    }
}
