//! Collision detection and response
//!
//! Walls reflect by flipping one velocity component. The two defended edges
//! additionally check the rod guarding them: a ball center outside the rod's
//! span is a miss and scores for the other side.

use glam::Vec2;

use super::state::{GameState, Layout};
use crate::consts::MISS_TOLERANCE;
use crate::geometry::{Rect, Viewport};
use crate::wins::{Side, WinSink};

/// How a ball arriving at a defended edge met the rod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball center within the rod's span; play goes on
    Returned,
    /// Ball got past; a win was recorded for the opponent
    Missed,
}

/// Result of checking one rod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RodCheck {
    pub rod: Side,
    pub contact: Contact,
}

/// What happened during one tick's collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub flipped_x: bool,
    pub flipped_y: bool,
    pub rod_check: Option<RodCheck>,
}

/// Reflect the ball off the viewport edges and check the defending rod
///
/// Must run after the ball has moved; uses the updated position.
pub fn resolve(
    state: &mut GameState,
    ball_size: Vec2,
    viewport: Viewport,
    wins: &mut impl WinSink,
) -> TickReport {
    let ball = state.ball.rect(ball_size);
    let vel = state.ball.vel;

    // An edge only counts while the ball is heading into it; a ball already
    // past an edge and moving away is left alone until it is back inside.
    let hit_left = ball.left() <= 0.0 && vel.x < 0.0;
    let hit_right = ball.right() >= viewport.width && vel.x > 0.0;
    let hit_top = ball.top() <= 0.0 && vel.y < 0.0;
    let hit_bottom = ball.bottom() >= viewport.height && vel.y > 0.0;

    let flipped_x = hit_left || hit_right;
    let flipped_y = hit_top || hit_bottom;
    if flipped_x {
        state.ball.vel.x = -vel.x;
    }
    if flipped_y {
        state.ball.vel.y = -vel.y;
    }

    let (at_rod1, at_rod2) = match state.layout {
        Layout::Sides => (hit_left, hit_right),
        Layout::Ends => (hit_top, hit_bottom),
    };
    let coord = state.layout.slide_axis().of(ball.center());

    let rod_check = if at_rod1 {
        Some(handle_collision_with_rod1(coord, &state.rod1, state.layout, wins))
    } else if at_rod2 {
        Some(handle_collision_with_rod2(coord, &state.rod2, state.layout, wins))
    } else {
        None
    };

    TickReport {
        flipped_x,
        flipped_y,
        rod_check,
    }
}

/// Decide hit or miss at rod1's edge. `ball_coord` is the ball center on
/// the slide axis.
pub fn handle_collision_with_rod1(
    ball_coord: f32,
    rod: &Rect,
    layout: Layout,
    wins: &mut impl WinSink,
) -> RodCheck {
    check_rod(Side::Rod1, ball_coord, rod, layout, wins)
}

/// Decide hit or miss at rod2's edge
pub fn handle_collision_with_rod2(
    ball_coord: f32,
    rod: &Rect,
    layout: Layout,
    wins: &mut impl WinSink,
) -> RodCheck {
    check_rod(Side::Rod2, ball_coord, rod, layout, wins)
}

fn check_rod(
    side: Side,
    ball_coord: f32,
    rod: &Rect,
    layout: Layout,
    wins: &mut impl WinSink,
) -> RodCheck {
    let axis = layout.slide_axis();
    let missed = ball_coord < rod.start(axis) - MISS_TOLERANCE
        || ball_coord > rod.end(axis) + MISS_TOLERANCE;

    let contact = if missed {
        log::debug!("{} missed at {}", side.as_str(), ball_coord);
        wins.store_win(side.opponent());
        Contact::Missed
    } else {
        Contact::Returned
    };

    RodCheck { rod: side, contact }
}
