use crate::constants::{ZOOM_BACKDROP_ID, ZOOM_BOX_ID, ZOOM_CLOSE_ID, ZOOM_ROOT_ID};
use crate::core::{OverlaySurface, Rect, Transition, Viewport, ZoomImage};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Mounted {
    backdrop: web::HtmlElement,
    image_box: web::HtmlElement,
    img: web::HtmlImageElement,
}

/// Zoom overlay rendered into `#zoom-root`.
pub struct DomOverlay {
    document: web::Document,
    mounted: Option<Mounted>,
}

impl DomOverlay {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            mounted: None,
        }
    }

    fn build(&self, image: &ZoomImage) -> Option<Mounted> {
        let root = self.document.get_element_by_id(ZOOM_ROOT_ID)?;
        let backdrop = dom::create_html_element(&self.document, "div")?;
        backdrop.set_id(ZOOM_BACKDROP_ID);
        backdrop.set_class_name("zoom-backdrop");
        _ = backdrop.set_attribute("role", "dialog");
        _ = backdrop.set_attribute("aria-modal", "true");
        dom::set_styles(
            &backdrop,
            &[
                ("position", "fixed"),
                ("inset", "0"),
                ("z-index", "60"),
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("background", "rgba(0,0,0,0.7)"),
                ("opacity", "0"),
            ],
        );

        let close = dom::create_html_element(&self.document, "button")?;
        close.set_id(ZOOM_CLOSE_ID);
        close.set_class_name("zoom-close");
        _ = close.set_attribute("aria-label", "Close");
        close.set_inner_text("✕");
        dom::set_styles(
            &close,
            &[("position", "absolute"), ("right", "12px"), ("top", "12px")],
        );

        let image_box = dom::create_html_element(&self.document, "div")?;
        image_box.set_id(ZOOM_BOX_ID);
        image_box.set_class_name("zoom-box");

        let img = self
            .document
            .create_element("img")
            .ok()?
            .dyn_into::<web::HtmlImageElement>()
            .ok()?;
        img.set_cross_origin(Some("anonymous"));
        dom::set_styles(
            &img,
            &[
                ("width", "100%"),
                ("height", "100%"),
                ("object-fit", "cover"),
            ],
        );

        _ = image_box.append_child(&img);
        _ = backdrop.append_child(&close);
        _ = backdrop.append_child(&image_box);
        _ = root.append_child(&backdrop);

        let mounted = Mounted {
            backdrop,
            image_box,
            img,
        };
        set_image(&mounted, image);
        Some(mounted)
    }

    fn body(&self) -> Option<web::HtmlElement> {
        self.document.body()
    }
}

fn set_image(mounted: &Mounted, image: &ZoomImage) {
    mounted.img.set_src(&image.src);
    mounted.img.set_alt(&image.alt);
    _ = mounted.image_box.set_attribute("aria-label", &image.alt);
}

impl OverlaySurface for DomOverlay {
    fn viewport(&self) -> Viewport {
        let (width, height) = dom::viewport_size();
        Viewport::new(width, height)
    }

    fn mount(&mut self, image: &ZoomImage) {
        match &self.mounted {
            Some(mounted) => set_image(mounted, image),
            None => {
                self.mounted = self.build(image);
                if self.mounted.is_none() {
                    log::error!("[zoom] missing #{}", ZOOM_ROOT_ID);
                }
            }
        }
    }

    fn place(&mut self, rect: Rect, transition: Option<&Transition>) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        let el = &mounted.image_box;
        let (left, top) = (format!("{}px", rect.x), format!("{}px", rect.y));
        let (width, height) = (format!("{}px", rect.width), format!("{}px", rect.height));
        match transition {
            None => {
                dom::set_styles(
                    el,
                    &[
                        ("position", "fixed"),
                        ("transform", "translate3d(0,0,0)"),
                        ("transition", "none"),
                        ("left", left.as_str()),
                        ("top", top.as_str()),
                        ("width", width.as_str()),
                        ("height", height.as_str()),
                    ],
                );
                // flush layout so the snapped box is the transition's start
                _ = el.offset_width();
            }
            Some(t) => {
                let css = t.css();
                dom::set_styles(
                    el,
                    &[
                        ("transition", css.as_str()),
                        ("left", left.as_str()),
                        ("top", top.as_str()),
                        ("width", width.as_str()),
                        ("height", height.as_str()),
                    ],
                );
            }
        }
    }

    fn reveal(&mut self, fade_ms: u32) {
        if let Some(mounted) = &self.mounted {
            let transition = format!("opacity {}ms", fade_ms);
            dom::set_styles(
                &mounted.backdrop,
                &[("transition", transition.as_str()), ("opacity", "1")],
            );
        }
    }

    fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.backdrop.remove();
        }
    }

    fn scroll_overflow(&self) -> String {
        self.body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_scroll_overflow(&mut self, value: &str) {
        if let Some(body) = self.body() {
            _ = body.style().set_property("overflow", value);
        }
    }
}

/// Load `src` off-screen and report its natural size.
pub fn probe_natural_size(src: &str, on_loaded: impl FnOnce(u32, u32) + 'static) {
    let Ok(img) = web::HtmlImageElement::new() else {
        return;
    };
    let probe = img.clone();
    let cb = Closure::once_into_js(move || {
        on_loaded(probe.natural_width(), probe.natural_height());
    });
    img.set_onload(Some(cb.unchecked_ref()));
    img.set_cross_origin(Some("anonymous"));
    img.set_src(src);
}
