use crate::constants::{
    BACKGROUND_ID, GRID_ID, LIVE_REGION_ID, PLACEHOLDER_IMAGE, RANDOM_BUTTON_ID, ZOOM_ROOT_ID,
};
use crate::core::floaties::{Floaty, FLOAT_DOWN_KEYFRAMES};
use crate::core::{Actor, ActorGrid};
use crate::dom::escape_html;
use web_sys as web;

/// Static page chrome; the grid, zoom root and background are filled later.
pub fn render_shell(root: &web::Element) {
    let html = format!(
        "<main class='page'>\
           <div id='{background}' class='background-fun' aria-hidden='true'></div>\
           <header class='page-header'>\
             <h1 class='title' aria-label='jst kidding'>jst kidding</h1>\
             <p class='subtitle'>Tap a face to hear a funny line. Click the image to zoom!</p>\
           </header>\
           <section class='grid-section'><div id='{grid}' class='actor-grid'></div></section>\
           <div class='random-dock'>\
             <button id='{random}' class='random-button' aria-label='Random Actor' title='Random Actor'>😆 Random Actor!</button>\
           </div>\
           <footer class='page-footer'>\
             <p>All lines are playful placeholders inspired by Malayalam movie vibes. For best experience, allow audio.</p>\
           </footer>\
           <div id='{live}' class='sr-only' aria-live='polite'></div>\
           <div id='{zoom}'></div>\
         </main>",
        background = BACKGROUND_ID,
        grid = GRID_ID,
        random = RANDOM_BUTTON_ID,
        live = LIVE_REGION_ID,
        zoom = ZOOM_ROOT_ID,
    );
    root.set_inner_html(&html);
}

pub fn render_background(document: &web::Document, floaties: &[Floaty]) {
    if let Some(el) = document.get_element_by_id(BACKGROUND_ID) {
        let mut html = format!("<style>{}</style>", FLOAT_DOWN_KEYFRAMES);
        for f in floaties {
            html.push_str(&format!(
                "<div class='floaty' style='position:absolute;{}' aria-hidden='true'>{}</div>",
                f.style(),
                f.emoji
            ));
        }
        el.set_inner_html(&html);
    }
}

fn card_html(index: usize, actor: &Actor, active: bool, pulse: u64) -> String {
    let name = escape_html(actor.name);
    let image = if actor.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        actor.image
    };
    let bubble_scale = if active { "scale(1)" } else { "scale(0)" };
    format!(
        "<div class='card{ring}' data-actor-index='{index}' data-pulse='{pulse}' style='--accent:{accent}'>\
           <div class='card-face' aria-pressed='{active}' aria-describedby='{id}-name'>\
             <div class='card-image' data-role='image' role='button' aria-label='Open {name} image and play audio'>\
               <img src='{image}' alt='{alt}' width='160' height='160'>\
             </div>\
             <button id='{id}-name' class='name-tag' data-role='name' aria-label='Play {name} audio'>{name}</button>\
           </div>\
           <div class='bubble' style='transform:{scale};transform-origin:bottom left' aria-hidden='{hidden}'>\
             <div class='bubble-body' style='box-shadow:6px 6px 0 {accent}'><p>{line}</p></div>\
           </div>\
         </div>",
        ring = if active { " active" } else { "" },
        index = index,
        pulse = pulse,
        accent = escape_html(actor.accent),
        active = active,
        id = escape_html(actor.id),
        name = name,
        image = escape_html(image),
        alt = escape_html(&actor.face_alt()),
        scale = bubble_scale,
        hidden = !active,
        line = escape_html(actor.line),
    )
}

/// Re-render every card from the grid state.
pub fn render_cards(document: &web::Document, grid: &ActorGrid) {
    let Some(el) = document.get_element_by_id(GRID_ID) else {
        log::error!("[grid] missing #{}", GRID_ID);
        return;
    };
    let active = grid.active_index();
    let html: String = grid
        .actors()
        .iter()
        .enumerate()
        .map(|(i, actor)| card_html(i, actor, active == Some(i), grid.pulse()))
        .collect();
    el.set_inner_html(&html);

    if let (Some(actor), Some(live)) = (grid.active(), document.get_element_by_id(LIVE_REGION_ID)) {
        live.set_text_content(Some(actor.line));
    }
}
