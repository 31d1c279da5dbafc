use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame loop that owns its closure.
///
/// The callback receives seconds since the previous frame and returns
/// whether to keep going. `stop` (or dropping the loop) cancels the pending
/// frame and releases the closure.
pub struct RenderLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
}

fn schedule(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl RenderLoop {
    pub fn start(mut on_frame: impl FnMut(f32) -> bool + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let mut last = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            if on_frame(dt) {
                handle_clone.set(schedule(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        handle.set(schedule(&tick));
        Self { tick, handle }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> slot cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
