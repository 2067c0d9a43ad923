use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{CircularProgressView, GraphView};
use crate::core::{NumericValue, Rect};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

/// View that can resize to a widget and draw into its cairo context.
pub trait CairoDrawable {
    fn resize(&mut self, bounds: Rect) -> ChartResult<()>;
    fn draw(&mut self, context: &cairo::Context) -> ChartResult<()>;
}

impl<K, V, R> CairoDrawable for GraphView<K, V, R>
where
    V: NumericValue,
    R: Renderer + CairoContextRenderer,
{
    fn resize(&mut self, bounds: Rect) -> ChartResult<()> {
        if self.bounds() != bounds {
            self.set_bounds(bounds)?;
        }
        Ok(())
    }

    fn draw(&mut self, context: &cairo::Context) -> ChartResult<()> {
        self.render_on_cairo_context(context)
    }
}

impl<R> CairoDrawable for CircularProgressView<R>
where
    R: Renderer + CairoContextRenderer,
{
    fn resize(&mut self, bounds: Rect) -> ChartResult<()> {
        if self.bounds() != bounds {
            self.set_bounds(bounds)?;
        }
        Ok(())
    }

    fn draw(&mut self, context: &cairo::Context) -> ChartResult<()> {
        self.render_on_cairo_context(context)
    }
}

/// Hosts a view in a GTK `DrawingArea`, redrawing it at the widget size.
pub struct GtkChartAdapter<T: CairoDrawable + 'static> {
    view: Rc<RefCell<T>>,
    drawing_area: gtk::DrawingArea,
}

impl<T: CairoDrawable + 'static> GtkChartAdapter<T> {
    #[must_use]
    pub fn new(view: T) -> Self {
        let view = Rc::new(RefCell::new(view));
        let drawing_area = gtk::DrawingArea::new();
        let draw_view = Rc::clone(&view);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let mut view = draw_view.borrow_mut();
            let bounds = Rect::from_size(f64::from(width), f64::from(height));
            if let Err(err) = view.resize(bounds).and_then(|()| view.draw(context)) {
                warn!(error = %err, width, height, "skipping chart draw");
            }
        });
        Self { view, drawing_area }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn view(&self) -> Rc<RefCell<T>> {
        Rc::clone(&self.view)
    }

    /// Mutates the view and schedules a widget redraw.
    pub fn update<F: FnOnce(&mut T)>(&self, update: F) {
        update(&mut self.view.borrow_mut());
        self.drawing_area.queue_draw();
    }
}

impl<R> GtkChartAdapter<CircularProgressView<R>>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    /// Drives progress animations from the widget frame clock.
    pub fn attach_animation_clock(&self) {
        let view = Rc::clone(&self.view);
        let last_frame_time = RefCell::new(None::<i64>);
        self.drawing_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let delta_seconds = last_frame_time
                .replace(Some(now))
                .map_or(0.0, |previous| (now - previous) as f64 / 1_000_000.0);
            if view.borrow_mut().tick(delta_seconds) {
                area.queue_draw();
            }
            gtk::glib::ControlFlow::Continue
        });
    }
}
