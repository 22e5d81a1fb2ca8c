use fltk::{group::Group, misc::HelpView, prelude::*};

/// Hosts the rendered-handwriting surface inside the main window.
///
/// The surface starts out absent and is created on the first successful
/// render. Every later render deletes the old widget and builds a fresh
/// one, so no scroll position or half-loaded markup survives from one
/// page to the next.
pub struct RenderHost {
    container: Group,
    view: Option<HelpView>,
}

impl RenderHost {
    pub fn new() -> Self {
        let mut container = Group::default();
        container.end();
        container.resize_callback(|grp, x, y, w, h| {
            for i in 0..grp.children() {
                if let Some(mut child) = grp.child(i) {
                    child.resize(x, y, w, h);
                }
            }
        });
        Self {
            container,
            view: None,
        }
    }

    /// Swap in a fresh view showing `markup`, discarding any old one.
    pub fn materialize(&mut self, markup: &str) {
        if let Some(old) = self.view.take() {
            self.container.remove(&old);
            fltk::app::delete_widget(old);
        }

        self.container.begin();
        let mut view = HelpView::new(
            self.container.x(),
            self.container.y(),
            self.container.w(),
            self.container.h(),
            None,
        );
        view.set_value(markup);
        self.container.end();
        view.show();
        self.view = Some(view);
        self.container.redraw();
    }
}
