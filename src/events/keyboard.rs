use crate::core::ZoomOverlay;
use crate::overlay::DomOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    overlay: &Rc<RefCell<ZoomOverlay<DomOverlay>>>,
) {
    let key = ev.key();
    if overlay.borrow_mut().handle_key(&key) {
        log::info!("[keys] {} closed zoom", key);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(overlay: Rc<RefCell<ZoomOverlay<DomOverlay>>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &overlay);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
