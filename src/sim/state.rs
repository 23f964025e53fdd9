//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BALL_STEP;
use crate::geometry::{Axis, GeometryProvider, Rect};
use crate::wins::Side;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start key
    NotStarted,
    /// Ticking; there is no way back
    Running,
}

/// Which pair of arena edges the rods defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Rod1 on the left edge, rod2 on the right; rods slide vertically
    Sides,
    /// Rod1 on the top edge, rod2 on the bottom; rods slide horizontally
    #[default]
    Ends,
}

impl Layout {
    /// Axis the rods move along (and the axis their span covers)
    pub fn slide_axis(self) -> Axis {
        match self {
            Layout::Sides => Axis::Y,
            Layout::Ends => Axis::X,
        }
    }

    /// Axis the ball crosses to reach a defended edge
    pub fn goal_axis(self) -> Axis {
        match self {
            Layout::Sides => Axis::X,
            Layout::Ends => Axis::Y,
        }
    }
}

/// The ball. Only its position and velocity are state; its size is
/// read from geometry each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at `pos` heading down-right
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::splat(BALL_STEP),
        }
    }

    /// Bounding box for a ball of `size` at the current position
    pub fn rect(&self, size: Vec2) -> Rect {
        Rect {
            pos: self.pos,
            size,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub layout: Layout,
    pub ball: Ball,
    pub rod1: Rect,
    pub rod2: Rect,
    /// Ticks run since the game started
    pub time_ticks: u64,
}

impl GameState {
    /// Seed a not-started game from the current element boxes
    pub fn from_geometry(layout: Layout, geometry: &impl GeometryProvider) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            layout,
            ball: Ball::new(geometry.ball_box().pos),
            rod1: geometry.rod1_box(),
            rod2: geometry.rod2_box(),
            time_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn rod(&self, side: Side) -> &Rect {
        match side {
            Side::Rod1 => &self.rod1,
            Side::Rod2 => &self.rod2,
        }
    }

    pub fn rod_mut(&mut self, side: Side) -> &mut Rect {
        match side {
            Side::Rod1 => &mut self.rod1,
            Side::Rod2 => &mut self.rod2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{FixedGeometry, Viewport};

    #[test]
    fn test_layout_axes_are_perpendicular() {
        for layout in [Layout::Sides, Layout::Ends] {
            assert_ne!(layout.slide_axis(), layout.goal_axis());
        }
        assert_eq!(Layout::default(), Layout::Ends);
    }

    #[test]
    fn test_from_geometry() {
        let geometry = FixedGeometry::arena(Layout::Ends, Viewport::new(400.0, 300.0));
        let state = GameState::from_geometry(Layout::Ends, &geometry);

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.ball.pos, geometry.ball.pos);
        assert_eq!(state.ball.vel, Vec2::new(3.0, 3.0));
        assert_eq!(*state.rod(Side::Rod1), geometry.rod1);
        assert_eq!(*state.rod(Side::Rod2), geometry.rod2);
    }
}
