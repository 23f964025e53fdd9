//! Rod Ball - a two-rod bouncing ball arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (motion, wall/rod collisions, paddle steps)
//! - `game`: Game loop controller (start-on-Enter, tick scheduling)
//! - `geometry`: Bounding boxes and the geometry provider seam
//! - `input`: Key code to action mapping
//! - `wins`: Win recording
//! - `render`: On-screen placement output
//! - `platform`: Browser host (DOM geometry, styles, timers)

pub mod game;
pub mod geometry;
pub mod input;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod wins;

pub use game::{GameLoop, KeyOutcome, StartOutcome, TickClock};
pub use geometry::{Axis, FixedGeometry, GeometryProvider, Rect, Viewport};
pub use input::{Action, KeyBindings, map_key};
pub use render::{Element, Renderer};
pub use settings::Settings;
pub use wins::{Side, WinSink, WinTally};

/// Game configuration constants
pub mod consts {
    /// Fixed tick period in milliseconds (100 Hz)
    pub const TICK_MS: u32 = 10;
    /// Ball displacement per tick on each axis (pixels)
    pub const BALL_STEP: f32 = 3.0;
    /// Rod displacement per accepted key press (pixels)
    pub const ROD_STEP: f32 = 20.0;
    /// Slack around a rod's span before the ball counts as missed.
    /// Zero: a ball center exactly on a rod end is a return.
    pub const MISS_TOLERANCE: f32 = 0.0;
}
