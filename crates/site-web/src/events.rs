//! RAII wrappers for DOM listeners and timers. Each one owns its closure and
//! detaches it on drop, so unmounting a component is just dropping it.

use anyhow::anyhow;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({event}): {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Fire-once `setTimeout`.
pub struct Timeout {
    handle: Cell<Option<i32>>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)
            .map_err(|e| anyhow!("setTimeout: {:?}", e))?;
        Ok(Self {
            handle: Cell::new(Some(id)),
            _callback: callback,
        })
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Repeating `setInterval`. `cancel` may be called from inside the handler;
/// the closure itself is only released on drop.
pub struct Interval {
    handle: Cell<Option<i32>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            handle: Cell::new(Some(id)),
            _callback: callback,
        })
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
