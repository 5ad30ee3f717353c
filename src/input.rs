use glam::Vec2;
use std::cell::Cell;
use web_sys as web;

/// Last pointer position in viewport (client) pixels, shared between the
/// pointer feed and the frame loop. `None` until the first update.
#[derive(Clone, Default)]
pub struct PointerState {
    viewport: std::rc::Rc<Cell<Option<Vec2>>>,
}

impl PointerState {
    #[inline]
    pub fn set(&self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.viewport.set(Some(Vec2::new(x, y)));
        }
    }

    #[inline]
    pub fn clear(&self) {
        self.viewport.set(None);
    }

    #[inline]
    pub fn viewport(&self) -> Option<Vec2> {
        self.viewport.get()
    }
}

/// Viewport coordinates to the canvas's own CSS-pixel space.
#[inline]
pub fn viewport_to_canvas(canvas: &web::HtmlCanvasElement, viewport: Vec2) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    viewport - Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// Logical (CSS pixel) size of the canvas drawing area.
#[inline]
pub fn canvas_logical_size(canvas: &web::HtmlCanvasElement, dpr: f64) -> Vec2 {
    Vec2::new(
        (canvas.width() as f64 / dpr) as f32,
        (canvas.height() as f64 / dpr) as f32,
    )
}
