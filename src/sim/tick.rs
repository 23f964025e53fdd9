//! Fixed timestep simulation tick
//!
//! Core game loop step: move, then resolve collisions against the moved ball.

use super::collision::{TickReport, resolve};
use super::motion::advance_ball;
use super::state::GameState;
use crate::geometry::GeometryProvider;
use crate::wins::WinSink;

/// Advance the game state by one tick. Does nothing before the game starts.
pub fn tick(
    state: &mut GameState,
    geometry: &impl GeometryProvider,
    wins: &mut impl WinSink,
) -> Option<TickReport> {
    if !state.is_running() {
        return None;
    }

    state.time_ticks += 1;
    advance_ball(&mut state.ball);

    let ball_size = geometry.ball_box().size;
    Some(resolve(state, ball_size, geometry.viewport(), wins))
}

/// Run `n` ticks back to back, collecting their reports
pub fn advance(
    state: &mut GameState,
    n: u32,
    geometry: &impl GeometryProvider,
    wins: &mut impl WinSink,
) -> Vec<TickReport> {
    let mut reports = Vec::new();
    for _ in 0..n {
        match tick(state, geometry, wins) {
            Some(report) => reports.push(report),
            None => break,
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_STEP;
    use crate::geometry::{FixedGeometry, Rect, Viewport};
    use crate::sim::state::{GamePhase, Layout};
    use crate::wins::WinTally;
    use glam::Vec2;

    fn running(geometry: &FixedGeometry, layout: Layout) -> GameState {
        let mut state = GameState::from_geometry(layout, geometry);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let geometry = FixedGeometry::arena(Layout::Sides, Viewport::new(500.0, 400.0));
        let mut state = GameState::from_geometry(Layout::Sides, &geometry);
        let before = state.ball;

        assert_eq!(tick(&mut state, &geometry, &mut WinTally::new()), None);
        assert!(advance(&mut state, 10, &geometry, &mut WinTally::new()).is_empty());
        assert_eq!(state.ball, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_bounce_off_right_then_left() {
        let geometry =
            FixedGeometry::uniform(Rect::new(200.0, 300.0, 25.0, 25.0), Viewport::new(250.0, 768.0));
        let mut state = running(&geometry, Layout::Sides);
        let mut wins = WinTally::new();

        let reports = advance(&mut state, 10, &geometry, &mut wins);
        assert_eq!(reports.len(), 10);
        // 227 + 25 reaches 250 on the ninth tick
        assert!(reports[8].flipped_x);
        assert_eq!(state.ball.pos, Vec2::new(224.0, 330.0));

        advance(&mut state, 80, &geometry, &mut wins);
        assert_eq!(state.ball.pos, Vec2::new(14.0, 570.0));
        assert_eq!(state.time_ticks, 90);
    }

    #[test]
    fn test_step_magnitude_never_changes() {
        let geometry = FixedGeometry::arena(Layout::Ends, Viewport::new(137.0, 91.0));
        let mut state = running(&geometry, Layout::Ends);
        let mut wins = WinTally::new();

        for _ in 0..5_000 {
            let before = state.ball.pos;
            let vel = state.ball.vel;
            tick(&mut state, &geometry, &mut wins);
            assert_eq!(state.ball.pos, before + vel);
            assert_eq!(state.ball.vel.abs(), Vec2::splat(BALL_STEP));
        }
    }

    #[test]
    fn test_one_win_per_miss() {
        // Rods too short to ever return a ball
        let mut geometry = FixedGeometry::arena(Layout::Sides, Viewport::new(200.0, 200.0));
        geometry.rod1.size.y = 0.0;
        geometry.rod2.size.y = 0.0;
        geometry.rod1.pos.y = -50.0;
        geometry.rod2.pos.y = -50.0;
        let mut state = running(&geometry, Layout::Sides);
        let mut wins = WinTally::new();

        let reports = advance(&mut state, 2_000, &geometry, &mut wins);
        let misses = reports
            .iter()
            .filter(|r| r.rod_check.is_some())
            .count() as u32;

        assert!(misses > 0);
        assert_eq!(wins.total(), misses);
    }

    #[test]
    fn test_ball_starting_off_screen_scores_nothing() {
        let mut geometry = FixedGeometry::arena(Layout::Sides, Viewport::new(500.0, 400.0));
        geometry.ball = Rect::new(-10.0, 20.0, 20.0, 20.0);
        let mut state = running(&geometry, Layout::Sides);
        let mut wins = WinTally::new();

        let reports = advance(&mut state, 20, &geometry, &mut wins);

        assert!(reports.iter().all(|r| r.rod_check.is_none()));
        assert_eq!(wins.total(), 0);
        assert_eq!(state.ball.pos, Vec2::new(50.0, 80.0));
    }

    #[test]
    fn test_huge_advance_before_start_returns_at_once() {
        let geometry = FixedGeometry::arena(Layout::Ends, Viewport::new(500.0, 400.0));
        let mut state = GameState::from_geometry(Layout::Ends, &geometry);

        assert!(advance(&mut state, u32::MAX, &geometry, &mut WinTally::new()).is_empty());
    }
}
