pub mod actors;
pub mod audio;
pub mod floaties;
pub mod geometry;
pub mod overlay;
pub mod speech;
pub mod tones;

pub use actors::*;
pub use audio::*;
pub use geometry::*;
pub use overlay::*;
pub use speech::*;
pub use tones::*;
