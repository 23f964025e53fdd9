//! Rod movement
//!
//! Every accepted key press moves a rod by exactly one step. A step that
//! would push the rod past the viewport is refused outright, not clamped.

use crate::consts::ROD_STEP;
use crate::geometry::{Axis, Rect};

/// Direction along a rod's slide axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the low end (left, or up when rods slide vertically)
    Left,
    /// Toward the high end
    Right,
}

/// Step `rod` along `axis` if it stays inside `[0, extent]`.
/// Returns whether the rod moved.
pub fn move_rod(rod: &mut Rect, axis: Axis, direction: Direction, extent: f32) -> bool {
    let allowed = match direction {
        Direction::Left => rod.start(axis) - ROD_STEP >= 0.0,
        Direction::Right => rod.end(axis) + ROD_STEP <= extent,
    };
    if !allowed {
        return false;
    }

    let sign = match direction {
        Direction::Left => -1.0,
        Direction::Right => 1.0,
    };
    rod.pos += axis.unit() * (sign * ROD_STEP);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_blocked_near_edge() {
        let mut rod = Rect::new(465.0, 0.0, 25.0, 10.0);
        assert!(!move_rod(&mut rod, Axis::X, Direction::Right, 500.0));
        assert_eq!(rod.left(), 465.0);

        let mut rod = Rect::new(485.0, 0.0, 25.0, 10.0);
        assert!(!move_rod(&mut rod, Axis::X, Direction::Right, 500.0));
        assert_eq!(rod.left(), 485.0);
    }

    #[test]
    fn test_right_allowed_up_to_edge() {
        let mut rod = Rect::new(455.0, 0.0, 25.0, 10.0);
        assert!(move_rod(&mut rod, Axis::X, Direction::Right, 500.0));
        assert_eq!(rod.right(), 500.0);
        assert!(!move_rod(&mut rod, Axis::X, Direction::Right, 500.0));
    }

    #[test]
    fn test_left_allowed_down_to_zero() {
        let mut rod = Rect::new(30.0, 0.0, 25.0, 10.0);
        assert!(move_rod(&mut rod, Axis::X, Direction::Left, 500.0));
        assert_eq!(rod.left(), 10.0);
        assert!(!move_rod(&mut rod, Axis::X, Direction::Left, 500.0));
        assert_eq!(rod.left(), 10.0);

        let mut rod = Rect::new(20.0, 0.0, 25.0, 10.0);
        assert!(move_rod(&mut rod, Axis::X, Direction::Left, 500.0));
        assert_eq!(rod.left(), 0.0);
    }

    #[test]
    fn test_vertical_slide_leaves_x_alone() {
        let mut rod = Rect::new(0.0, 100.0, 12.0, 80.0);
        assert!(move_rod(&mut rod, Axis::Y, Direction::Right, 400.0));
        assert_eq!(rod.pos.x, 0.0);
        assert_eq!(rod.top(), 120.0);
    }
}
