use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    draw,
    enums::{Color, Event},
    prelude::*,
    widget::Widget,
};

use crate::app::capture_controller::CaptureSurface;

/// On-screen side of the square drawing area, in pixels.
pub const CANVAS_SIZE: i32 = 280;

/// Side of the rasterized sample submitted to the backend.
pub const SAMPLE_SIZE: u32 = 200;

struct CanvasState {
    /// Finished and in-progress strokes, widget-relative coordinates.
    strokes: Vec<Vec<(i32, i32)>>,
    drawing: bool,
    pen_width: i32,
}

/// Freehand drawing widget the user draws each symbol on.
///
/// Strokes are kept as point lists so the sample can be rasterized at
/// submission time, independent of the on-screen pixel size.
pub struct CanvasView {
    pub widget: Widget,
    state: Rc<RefCell<CanvasState>>,
}

impl CanvasView {
    pub fn new(pen_width: u32) -> Self {
        let state = Rc::new(RefCell::new(CanvasState {
            strokes: Vec::new(),
            drawing: false,
            pen_width: pen_width.max(1) as i32,
        }));

        let mut widget = Widget::default().with_size(CANVAS_SIZE, CANVAS_SIZE);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_canvas(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_canvas(wid, event, &handle_state));

        Self { widget, state }
    }

    /// Wipe the drawing. Used by the Clear button and after each
    /// acknowledged save.
    pub fn clear(&mut self) {
        self.state.borrow_mut().strokes.clear();
        self.widget.redraw();
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.state.borrow_mut().pen_width = width.max(1) as i32;
        self.widget.redraw();
    }

    /// Rasterize the current strokes to a PNG sample, dark ink on a
    /// white square of SAMPLE_SIZE pixels.
    pub fn snapshot_png(&self) -> Result<Vec<u8>, String> {
        let st = self.state.borrow();
        let image = rasterize(&st.strokes, self.widget.w(), st.pen_width);
        encode_png(&image)
    }
}

impl CaptureSurface for CanvasView {
    fn clear(&mut self) {
        CanvasView::clear(self);
    }
}

fn draw_canvas(wid: &Widget, st: &CanvasState) {
    let (x, y, w, h) = (wid.x(), wid.y(), wid.w(), wid.h());

    // White paper in both themes; samples are dark ink on light ground
    draw::draw_rect_fill(x, y, w, h, Color::White);
    draw::set_draw_color(Color::from_rgb(180, 180, 180));
    draw::draw_rect(x, y, w, h);

    draw::set_draw_color(Color::Black);
    draw::set_line_style(draw::LineStyle::Solid, st.pen_width);
    let dot = st.pen_width.max(2);
    for stroke in &st.strokes {
        match stroke.as_slice() {
            [] => {}
            [p] => {
                draw::draw_pie(x + p.0 - dot / 2, y + p.1 - dot / 2, dot, dot, 0.0, 360.0);
            }
            points => {
                for pair in points.windows(2) {
                    draw::draw_line(x + pair[0].0, y + pair[0].1, x + pair[1].0, y + pair[1].1);
                }
            }
        }
    }
    draw::set_line_style(draw::LineStyle::Solid, 0);
}

fn handle_canvas(wid: &mut Widget, event: Event, state: &Rc<RefCell<CanvasState>>) -> bool {
    match event {
        Event::Push => {
            if fltk::app::event_button() != 1 {
                return false;
            }
            let point = event_point(wid);
            let mut st = state.borrow_mut();
            st.drawing = true;
            st.strokes.push(vec![point]);
            drop(st);
            wid.redraw();
            true
        }
        Event::Drag => {
            let point = event_point(wid);
            let mut st = state.borrow_mut();
            if !st.drawing {
                return false;
            }
            if let Some(stroke) = st.strokes.last_mut() {
                if stroke.last() != Some(&point) {
                    stroke.push(point);
                }
            }
            drop(st);
            wid.redraw();
            true
        }
        Event::Released => {
            let mut st = state.borrow_mut();
            let was_drawing = st.drawing;
            st.drawing = false;
            was_drawing
        }
        _ => false,
    }
}

/// Current pointer position, widget-relative and clamped to the canvas.
fn event_point(wid: &Widget) -> (i32, i32) {
    let x = (fltk::app::event_x() - wid.x()).clamp(0, wid.w() - 1);
    let y = (fltk::app::event_y() - wid.y()).clamp(0, wid.h() - 1);
    (x, y)
}

/// Draw the strokes into a SAMPLE_SIZE square bitmap, scaling from the
/// on-screen side length.
fn rasterize(strokes: &[Vec<(i32, i32)>], side: i32, pen_width: i32) -> image::RgbImage {
    let mut img =
        image::RgbImage::from_pixel(SAMPLE_SIZE, SAMPLE_SIZE, image::Rgb([255, 255, 255]));
    let factor = SAMPLE_SIZE as f32 / side.max(1) as f32;
    let radius = (pen_width as f32 * factor / 2.0).max(0.75);

    for stroke in strokes {
        match stroke.as_slice() {
            [] => {}
            [p] => stamp(&mut img, scale(*p, factor), radius),
            points => {
                for pair in points.windows(2) {
                    stamp_segment(&mut img, scale(pair[0], factor), scale(pair[1], factor), radius);
                }
            }
        }
    }
    img
}

fn scale(point: (i32, i32), factor: f32) -> (f32, f32) {
    (point.0 as f32 * factor, point.1 as f32 * factor)
}

/// Stamp ink discs along the segment, one per pixel of travel.
fn stamp_segment(img: &mut image::RgbImage, from: (f32, f32), to: (f32, f32), radius: f32) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(img, (from.0 + dx * t, from.1 + dy * t), radius);
    }
}

fn stamp(img: &mut image::RgbImage, center: (f32, f32), radius: f32) {
    let r = radius.ceil() as i32;
    let cx = center.0.round() as i32;
    let cy = center.1.round() as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f32 > radius * radius {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, image::Rgb([0, 0, 0]));
            }
        }
    }
}

fn encode_png(img: &image::RgbImage) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| e.to_string())?;
    Ok(bytes)
}
