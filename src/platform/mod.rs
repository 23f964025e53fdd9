//! Platform abstraction layer
//!
//! The simulation only talks to traits (`GeometryProvider`, `Renderer`,
//! `WinSink`). This module supplies the browser implementations:
//! - Geometry from `getBoundingClientRect` and the window size
//! - Placement through `style.left` / `style.top`
//! - Key presses from `keydown`, ticks from `setInterval`

#[cfg(target_arch = "wasm32")]
pub mod web;
