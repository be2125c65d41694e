/// Zoom sizing and timing, tone and speech levels, page layout ids.
///
/// Pixel caps are CSS pixels, durations are milliseconds unless the name says
/// otherwise.
// Zoom target ceilings: the smaller of a viewport fraction and a fixed pixel cap
pub const ZOOM_VIEWPORT_WIDTH_FRACTION: f64 = 0.94;
pub const ZOOM_MAX_WIDTH_PX: f64 = 1100.0;
pub const ZOOM_VIEWPORT_HEIGHT_FRACTION: f64 = 0.9;
pub const ZOOM_MAX_HEIGHT_PX: f64 = 900.0;

// Zoom box transition (left/top/width/height)
pub const ZOOM_TRANSITION_MS: u32 = 280;
pub const ZOOM_EASING: [f64; 4] = [0.2, 0.8, 0.2, 1.0]; // cubic-bezier control points
pub const ZOOM_BACKDROP_FADE_MS: u32 = 200;

// Aspect ratio used until the image's natural size is known
pub const DEFAULT_ASPECT: f64 = 1.0;
// Resolved aspect must differ by more than this to re-center
pub const ASPECT_TOLERANCE: f64 = 1e-3;

// Active actor highlight (speech bubble) auto-clear
pub const ACTIVE_CLEAR_MS: i32 = 3400;

// Speech synthesis request
pub const SPEECH_LOCALE: &str = "ml-IN";
pub const SPEECH_RATE: f32 = 1.0;
pub const SPEECH_PITCH: f32 = 1.0;
pub const SPEECH_VOLUME: f32 = 1.0;

// Exponential ramps cannot reach zero; envelopes start and end here
pub const ENVELOPE_FLOOR: f32 = 0.0001;

// Background decoration
pub const FLOATY_COUNT: usize = 14;
pub const FLOATY_EMOJIS: [&str; 5] = ["🍌", "🥥", "🌴", "⭐", "💥"];

// DOM ids
pub const APP_ROOT_ID: &str = "app";
pub const GRID_ID: &str = "actor-grid";
pub const RANDOM_BUTTON_ID: &str = "random-actor";
pub const LIVE_REGION_ID: &str = "actor-live";
pub const ZOOM_ROOT_ID: &str = "zoom-root";
pub const ZOOM_BACKDROP_ID: &str = "zoom-backdrop";
pub const ZOOM_CLOSE_ID: &str = "zoom-close";
pub const ZOOM_BOX_ID: &str = "zoom-box";
pub const BACKGROUND_ID: &str = "background-fun";

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
