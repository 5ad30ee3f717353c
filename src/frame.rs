use crate::constants::{CANVAS_VISIBLE_THRESHOLD, FRAME_INTERVAL_MS, RESIZE_DEBOUNCE_MS};
use crate::core::{FieldParams, FrameGate, FrameThrottle, ParticleField, Release, Teardown};
use crate::dom::{self, Debounce, Listener};
use crate::events::pointer;
use crate::input::{self, PointerState};
use crate::observe::Observer;
use crate::render;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: ParticleField,
    pub gate: FrameGate,
    pub pointer: PointerState,
    pub dpr: f64,
}

impl FrameContext {
    /// One animation callback. Returns `false` when the frame was skipped
    /// (off-screen or inside the throttle interval).
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.gate.admit(now_ms) {
            return false;
        }
        self.field
            .set_bounds(input::canvas_logical_size(&self.canvas, self.dpr));
        let pointer = self
            .pointer
            .viewport()
            .map(|p| input::viewport_to_canvas(&self.canvas, p));
        self.field.step(pointer);
        render::draw_field(&self.ctx, &self.field, self.field.glow_center(pointer));
        true
    }

    /// Re-allocate the backing store for the current CSS size.
    pub fn provision(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas, &self.ctx);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(tick: &TickClosure, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::warn!("[particles] requestAnimationFrame failed: {:?}", e),
        }
    }
}

struct PendingFrames {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl Release for PendingFrames {
    fn release(self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure also breaks its self-reference.
        self.tick.borrow_mut().take();
    }
}

/// Self-rescheduling requestAnimationFrame loop with explicit cancellation.
struct RenderLoop {
    frames: Teardown<PendingFrames>,
}

impl RenderLoop {
    fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            raf_clone.set(None);
            frame_ctx.borrow_mut().frame(now_ms);
            request_frame(&tick_clone, &raf_clone);
        }) as Box<dyn FnMut(f64)>));
        request_frame(&tick, &raf_id);
        Self {
            frames: Teardown::new(PendingFrames { raf_id, tick }),
        }
    }

    fn stop(&mut self) {
        self.frames.release();
    }
}

/// Canvas particle backdrop: pool, loop, visibility gate, debounced resize
/// and (optionally) its own pointer feed.
pub struct ParticleRenderer {
    frame_ctx: Rc<RefCell<FrameContext>>,
    pointer: PointerState,
    render_loop: Option<RenderLoop>,
    visibility: Option<Observer>,
    resize: Option<Listener>,
    resize_debounce: Option<Rc<Debounce>>,
    pointer_feed: Option<Listener>,
}

impl ParticleRenderer {
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        params: FieldParams,
        track_pointer: bool,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d canvas context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))?;

        let dpr = dom::sync_canvas_backing_size(&canvas, &ctx);
        let bounds = input::canvas_logical_size(&canvas, dpr);
        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(params, bounds, &mut rng);
        log::info!(
            "[particles] {} particles on {:.0}x{:.0} (dpr {:.2})",
            field.particles().len(),
            bounds.x,
            bounds.y,
            dpr
        );

        let pointer = PointerState::default();
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            canvas: canvas.clone(),
            ctx,
            field,
            gate: FrameGate::new(FrameThrottle::new(FRAME_INTERVAL_MS)),
            pointer: pointer.clone(),
            dpr,
        }));

        let ctx_resize = frame_ctx.clone();
        let debounce = Rc::new(Debounce::new(RESIZE_DEBOUNCE_MS, move || {
            ctx_resize.borrow_mut().provision();
        }));
        let debounce_cb = debounce.clone();
        let resize = Listener::attach(&window, "resize", move |_ev| debounce_cb.trigger())
            .map_err(|e| log::warn!("[particles] resize tracking disabled: {e}"))
            .ok();

        let ctx_vis = frame_ctx.clone();
        let visibility = Observer::new("0px", CANVAS_VISIBLE_THRESHOLD, move |entry| {
            ctx_vis
                .borrow_mut()
                .gate
                .set_visible(entry.is_intersecting());
        })
        .map_err(|e| log::warn!("[particles] visibility gating disabled: {e}"))
        .ok();
        if let Some(obs) = &visibility {
            obs.observe(&canvas);
        }

        let pointer_feed = if track_pointer {
            pointer::wire_pointer_tracking(pointer.clone())
                .map_err(|e| log::warn!("[particles] pointer tracking disabled: {e}"))
                .ok()
        } else {
            None
        };

        let render_loop = Some(RenderLoop::start(frame_ctx.clone()));
        Ok(Self {
            frame_ctx,
            pointer,
            render_loop,
            visibility,
            resize,
            resize_debounce: Some(debounce),
            pointer_feed,
        })
    }

    /// Pointer position in viewport pixels, as supplied by the host.
    pub fn set_pointer(&self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn is_visible(&self) -> bool {
        self.frame_ctx.borrow().gate.is_visible()
    }

    pub fn stop(&mut self) {
        if let Some(mut l) = self.render_loop.take() {
            l.stop();
        }
        if let Some(mut obs) = self.visibility.take() {
            obs.disconnect();
        }
        if let Some(mut l) = self.resize.take() {
            l.remove();
        }
        if let Some(d) = self.resize_debounce.take() {
            d.cancel();
        }
        if let Some(mut l) = self.pointer_feed.take() {
            l.remove();
        }
        self.pointer.clear();
    }
}

impl Drop for ParticleRenderer {
    fn drop(&mut self) {
        self.stop();
    }
}
