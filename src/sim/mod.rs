//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick and fixed step only
//! - Geometry comes in through `GeometryProvider`, never from the page
//! - Side effects leave through `WinSink`, nothing else

pub mod collision;
pub mod motion;
pub mod paddle;
pub mod state;
pub mod tick;

pub use collision::{
    Contact, RodCheck, TickReport, handle_collision_with_rod1, handle_collision_with_rod2, resolve,
};
pub use motion::advance_ball;
pub use paddle::{Direction, move_rod};
pub use state::{Ball, GamePhase, GameState, Layout};
pub use tick::{advance, tick};
