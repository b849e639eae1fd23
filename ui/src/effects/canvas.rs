use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::rain::{GlyphSurface, RainConfig, RainField};
use super::RainError;

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl GlyphSurface for CanvasSurface {
    fn fade(&mut self, color: &str, width: f64, height: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
    }
}

/// Live animation bound to a canvas. Call [`RainHandle::stop`] on teardown.
pub struct RainHandle {
    window: Window,
    tick: Interval,
    on_resize: Closure<dyn FnMut()>,
}

impl RainHandle {
    pub fn stop(self) {
        let _ = self.tick.cancel();
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        debug!("background rain stopped");
    }
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

/// Start the rain on the canvas with element id `canvas_id`.
pub fn mount(canvas_id: &str, config: RainConfig) -> Result<RainHandle, RainError> {
    let window = web_sys::window().ok_or(RainError::SurfaceUnavailable("no window"))?;
    let document = window
        .document()
        .ok_or(RainError::SurfaceUnavailable("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or(RainError::SurfaceUnavailable("canvas element missing"))?
        .dyn_into()
        .map_err(|_| RainError::SurfaceUnavailable("element is not a canvas"))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(RainError::SurfaceUnavailable("no 2d context"))?
        .dyn_into()
        .map_err(|_| RainError::SurfaceUnavailable("no 2d context"))?;

    let (width, height) = viewport(&window);
    fit_canvas(&canvas, width, height);

    let tick_ms = config.tick_ms;
    let field = Rc::new(RefCell::new(RainField::new(width, height, config)));
    debug!(
        columns = field.borrow().columns(),
        glyph_px = field.borrow().glyph_px(),
        "background rain mounted"
    );

    let on_resize = {
        let window = window.clone();
        let field = field.clone();
        Closure::<dyn FnMut()>::new(move || {
            let (width, height) = viewport(&window);
            fit_canvas(&canvas, width, height);
            field.borrow_mut().resize(width, height);
        })
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|_| RainError::SurfaceUnavailable("cannot observe resize"))?;

    let mut surface = CanvasSurface { ctx };
    let mut rng = StdRng::from_entropy();
    let tick = Interval::new(tick_ms, move || {
        field.borrow_mut().tick(&mut surface, &mut rng);
    });

    Ok(RainHandle {
        window,
        tick,
        on_resize,
    })
}
