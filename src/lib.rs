//! jst kidding: a grid of cartoon actor cards that pop, speak a line and zoom.
//!
//! `core` holds the platform-agnostic pieces (zoom overlay controller, tone
//! synthesizer, speech announcer, grid state) and builds on every target so it
//! can be tested on the host. The browser bindings below are wasm-only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod grid;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod speech;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::audio::WebAudio;
    use crate::constants::{APP_ROOT_ID, FLOATY_COUNT};
    use crate::core::floaties;
    use crate::core::{
        ActorGrid, AudioSession, SoundBoard, ToneSynth, ZoomConfig, ZoomOverlay, ROSTER,
    };
    use crate::overlay::DomOverlay;
    use crate::speech::WebSpeech;
    use crate::{events, grid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("jst-kidding starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

        grid::render_shell(&root);
        let mut rng = StdRng::from_entropy();
        grid::render_background(&document, &floaties::scatter(&mut rng, FLOATY_COUNT));

        // One audio context per page session, created on first use
        let session = Rc::new(AudioSession::new(WebAudio));
        let tones = Rc::new(ToneSynth::new(session.clone()));
        let board = Rc::new(SoundBoard::new(WebSpeech::detect(), tones));

        let actors = Rc::new(RefCell::new(ActorGrid::new(ROSTER.to_vec(), rng)));
        let overlay = Rc::new(RefCell::new(ZoomOverlay::new(
            DomOverlay::new(document.clone()),
            ZoomConfig::default(),
        )));
        grid::render_cards(&document, &actors.borrow());
        log::info!("[grid] {} actors", actors.borrow().actors().len());

        events::wire_global_keydown(overlay.clone());
        events::wire_input_handlers(events::InputWiring {
            document,
            grid: actors,
            overlay,
            board,
            session,
        });
        Ok(())
    }
}
