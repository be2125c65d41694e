use crate::audio::WebAudio;
use crate::constants::{
    ACTIVE_CLEAR_MS, GRID_ID, RANDOM_BUTTON_ID, ZOOM_BACKDROP_ID, ZOOM_CLOSE_ID, ZOOM_ROOT_ID,
};
use crate::core::{
    ActorGrid, AudioSession, ClearToken, DismissReason, FrameTicket, Rect, SoundBoard, ZoomOverlay,
};
use crate::dom;
use crate::grid;
use crate::overlay::{self, DomOverlay};
use crate::speech::WebSpeech;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub grid: Rc<RefCell<ActorGrid>>,
    pub overlay: Rc<RefCell<ZoomOverlay<DomOverlay>>>,
    pub board: Rc<SoundBoard<WebSpeech, WebAudio>>,
    pub session: Rc<AudioSession<WebAudio>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_gesture_resume(&w);
    wire_grid_clicks(&w);
    wire_random_button(&w);
    wire_zoom_dismiss(&w);
}

// Autoplay policy: resume the shared context on the first gestures
fn wire_gesture_resume(w: &InputWiring) {
    let session = w.session.clone();
    let closure = Closure::wrap(Box::new(move || {
        session.resume();
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts.set_capture(true);
    for ty in ["touchstart", "click"] {
        _ = w
            .document
            .add_event_listener_with_callback_and_add_event_listener_options(
                ty,
                closure.as_ref().unchecked_ref(),
                &opts,
            );
    }
    closure.forget();
}

fn event_element(ev: &web::MouseEvent) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

fn arm_clear(w: &InputWiring, token: ClearToken) {
    let grid_state = w.grid.clone();
    let document = w.document.clone();
    dom::set_timeout(ACTIVE_CLEAR_MS, move || {
        let expired = grid_state.borrow_mut().expire(token);
        if expired {
            grid::render_cards(&document, &grid_state.borrow());
        }
    });
}

fn start_zoom(w: &InputWiring, ticket: FrameTicket) {
    let zoom = w.overlay.clone();
    dom::request_frame(move || {
        zoom.borrow_mut().on_frame(ticket);
    });

    let Some(src) = w.overlay.borrow().image().map(|image| image.src.clone()) else {
        return;
    };
    let zoom = w.overlay.clone();
    let probed = src.clone();
    overlay::probe_natural_size(&src, move |width, height| {
        zoom.borrow_mut().on_image_loaded(&probed, width, height);
    });
}

fn wire_grid_clicks(w: &InputWiring) {
    let Some(grid_el) = w.document.get_element_by_id(GRID_ID) else {
        log::error!("[grid] missing #{}", GRID_ID);
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(target) = event_element(&ev) else {
            return;
        };
        let Some(role_el) = closest(&target, "[data-role]") else {
            return;
        };
        let Some(index) = closest(&role_el, "[data-actor-index]")
            .and_then(|card| card.get_attribute("data-actor-index"))
            .and_then(|s| s.parse::<usize>().ok())
        else {
            return;
        };

        let token = match role_el.get_attribute("data-role").as_deref() {
            Some("image") => {
                let r = role_el.get_bounding_client_rect();
                let rect = Rect::new(r.x(), r.y(), r.width(), r.height());
                let outcome = {
                    let mut zoom = w.overlay.borrow_mut();
                    w.grid
                        .borrow_mut()
                        .tap_image(index, Some(rect), &mut *zoom, w.board.as_ref())
                };
                let Some((ticket, token)) = outcome else {
                    return;
                };
                if let Some(ticket) = ticket {
                    start_zoom(&w, ticket);
                }
                token
            }
            Some("name") => match w.grid.borrow_mut().tap(index, w.board.as_ref()) {
                Some(token) => token,
                None => return,
            },
            _ => return,
        };
        arm_clear(&w, token);
        grid::render_cards(&w.document, &w.grid.borrow());
    }) as Box<dyn FnMut(_)>);
    _ = grid_el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_random_button(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, RANDOM_BUTTON_ID, move |_ev| {
        let picked = w2.grid.borrow_mut().random(w2.board.as_ref());
        if let Some((index, token)) = picked {
            log::info!("[grid] random pick {}", index);
            arm_clear(&w2, token);
            grid::render_cards(&w2.document, &w2.grid.borrow());
        }
    });
}

fn wire_zoom_dismiss(w: &InputWiring) {
    let Some(root) = w.document.get_element_by_id(ZOOM_ROOT_ID) else {
        log::error!("[zoom] missing #{}", ZOOM_ROOT_ID);
        return;
    };
    let zoom = w.overlay.clone();
    let close_selector = format!("#{}", ZOOM_CLOSE_ID);
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(target) = event_element(&ev) else {
            return;
        };
        if closest(&target, &close_selector).is_some() {
            zoom.borrow_mut().dismiss(DismissReason::CloseButton);
        } else {
            let on_backdrop = target.id() == ZOOM_BACKDROP_ID;
            zoom.borrow_mut().handle_backdrop_click(on_backdrop);
        }
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
