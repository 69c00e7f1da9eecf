mod canvas;
mod logger;
mod view;

use backdrop_core::config::BackdropConfig;
use backdrop_core::driver::{FrameClock, LoopDriver};
use backdrop_core::simulation::Simulation;
use backdrop_core::surface::SurfaceMetrics;
use canvas::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

pub use view::ProjectView;

#[wasm_bindgen(start)]
pub fn start() {
    logger::init();
}

/// State shared between the frame callback and the event listeners.
struct Shared {
    sim: Simulation,
    driver: LoopDriver,
    painter: CanvasPainter,
    canvas: HtmlCanvasElement,
    frame_handle: Option<i32>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything acquired at mount; released together on teardown.
struct Mounted {
    window: Window,
    shared: Rc<RefCell<Shared>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn teardown(&mut self) {
        let handle = {
            let mut shared = self.shared.borrow_mut();
            shared.driver.stop();
            shared.frame_handle.take()
        };
        if let Some(handle) = handle {
            let _ = self.window.cancel_animation_frame(handle);
        }
        self.listeners.clear();
        // Breaks the callback's reference cycle through `frame_callback`.
        self.frame_callback.borrow_mut().take();
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Animated particle background bound to one canvas element.
#[wasm_bindgen]
pub struct Backdrop {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Attach to `canvas` and start the render loop.
    ///
    /// A missing canvas or an unavailable 2D context yields an inert handle
    /// that never draws.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<HtmlCanvasElement>) -> Result<Backdrop, JsValue> {
        let mounted = match (canvas, web_sys::window()) {
            (Some(canvas), Some(window)) => mount(window, canvas)?,
            _ => None,
        };
        Ok(Backdrop { mounted })
    }

    /// Stop the loop and remove every listener. Safe to call repeatedly.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.teardown();
            log::debug!("backdrop destroyed");
        }
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map_or(false, |m| m.shared.borrow().driver.is_running())
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.shared.borrow().sim.particles.count)
    }

    #[wasm_bindgen]
    pub fn frames(&self) -> f64 {
        self.mounted
            .as_ref()
            .map_or(0.0, |m| m.shared.borrow().driver.frames() as f64)
    }
}

fn mount(window: Window, canvas: HtmlCanvasElement) -> Result<Option<Mounted>, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::FALSE)?;
    let ctx = match canvas.get_context_with_context_options("2d", &options) {
        Ok(Some(ctx)) => ctx,
        _ => {
            log::warn!("2d canvas context unavailable; background disabled");
            return Ok(None);
        }
    };
    let ctx = match ctx.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => ctx,
        Err(_) => return Ok(None),
    };

    let clock = FrameClock::starting_at(now_ms(&window));
    let shared = Rc::new(RefCell::new(Shared {
        sim: Simulation::new(BackdropConfig::default()),
        driver: LoopDriver::new(clock),
        painter: CanvasPainter::new(ctx),
        canvas,
        frame_handle: None,
    }));
    apply_resize(&window, &mut shared.borrow_mut());

    let target: &EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(4);

    listeners.push({
        let shared = shared.clone();
        let window = window.clone();
        Listener::attach(target, "resize", move |_: Event| {
            apply_resize(&window, &mut shared.borrow_mut());
        })?
    });

    listeners.push({
        let shared = shared.clone();
        Listener::attach(target, "mousemove", move |event: Event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                shared
                    .borrow_mut()
                    .sim
                    .pointer_move(e.client_x() as f32, e.client_y() as f32);
            }
        })?
    });

    listeners.push({
        let shared = shared.clone();
        // `mouseout` with no related target means the pointer left the window.
        Listener::attach(target, "mouseout", move |event: Event| {
            let left = event
                .dyn_ref::<MouseEvent>()
                .map_or(true, |e| e.related_target().is_none());
            if left {
                shared.borrow_mut().sim.pointer_leave();
            }
        })?
    });

    listeners.push({
        let shared = shared.clone();
        Listener::attach(target, "click", move |event: Event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                let mut state = shared.borrow_mut();
                let now = state.driver.now();
                state.sim.click(e.client_x() as f32, e.client_y() as f32, now);
            }
        })?
    });

    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let shared = shared.clone();
        let window = window.clone();
        let next = frame_callback.clone();
        *frame_callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let keep_going = {
                let mut guard = shared.borrow_mut();
                let state = &mut *guard;
                state.frame_handle = None;
                match state.driver.tick(&mut state.sim, &mut state.painter, timestamp) {
                    Ok(Some(_)) => state.driver.is_running(),
                    _ => false,
                }
            };
            if keep_going {
                request_frame(&window, &next, &shared);
            }
        }));
    }

    request_frame(&window, &frame_callback, &shared);
    log::info!(
        "backdrop mounted: {} particles",
        shared.borrow().sim.particles.count
    );

    Ok(Some(Mounted {
        window,
        shared,
        frame_callback,
        listeners,
    }))
}

fn request_frame(window: &Window, callback: &FrameCallback, shared: &Rc<RefCell<Shared>>) {
    let Some(cb) = callback.borrow().as_ref().map(|c| c.as_ref().clone()) else {
        return;
    };
    match window.request_animation_frame(cb.unchecked_ref()) {
        Ok(handle) => shared.borrow_mut().frame_handle = Some(handle),
        Err(err) => {
            log::error!("requestAnimationFrame failed: {:?}", err);
            shared.borrow_mut().driver.stop();
        }
    }
}

/// Re-derive the surface size from the canvas' client box.
fn apply_resize(window: &Window, state: &mut Shared) {
    let metrics = SurfaceMetrics::from_client(
        state.canvas.client_width() as f32,
        state.canvas.client_height() as f32,
        window.device_pixel_ratio() as f32,
        state.sim.config.max_device_pixel_ratio,
    );
    let (width, height) = metrics.buffer_size();
    state.canvas.set_width(width);
    state.canvas.set_height(height);
    state.sim.resize(metrics);
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}
