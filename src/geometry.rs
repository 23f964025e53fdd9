//! Bounding boxes and the geometry provider
//!
//! The engine never reads the page directly. Everything it needs to know about
//! sizes and the viewport comes through [`GeometryProvider`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Layout;

/// One of the two screen axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Unit vector along this axis
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Axis::X => Vec2::X,
            Axis::Y => Vec2::Y,
        }
    }
}

/// Axis-aligned box in page pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Low edge along `axis`
    #[inline]
    pub fn start(&self, axis: Axis) -> f32 {
        axis.of(self.pos)
    }

    /// High edge along `axis`
    #[inline]
    pub fn end(&self, axis: Axis) -> f32 {
        axis.of(self.pos) + axis.of(self.size)
    }
}

/// Visible play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size of the viewport along `axis`
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Read-only source of current element boxes
///
/// The browser host answers from `getBoundingClientRect`; tests and the
/// native binary use [`FixedGeometry`].
pub trait GeometryProvider {
    fn ball_box(&self) -> Rect;
    fn rod1_box(&self) -> Rect;
    fn rod2_box(&self) -> Rect;
    fn viewport(&self) -> Viewport;
}

/// In-memory geometry with fixed boxes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedGeometry {
    pub ball: Rect,
    pub rod1: Rect,
    pub rod2: Rect,
    pub viewport: Viewport,
}

impl FixedGeometry {
    /// Every element shares the same box, like a page whose boxes all report alike
    pub fn uniform(bounds: Rect, viewport: Viewport) -> Self {
        Self {
            ball: bounds,
            rod1: bounds,
            rod2: bounds,
            viewport,
        }
    }

    /// A playable arena: rods centered on their defended edges, ball in the middle
    pub fn arena(layout: Layout, viewport: Viewport) -> Self {
        const BALL_SIZE: f32 = 20.0;
        const ROD_LENGTH: f32 = 100.0;
        const ROD_THICKNESS: f32 = 12.0;

        let ball = Rect::new(
            (viewport.width - BALL_SIZE) / 2.0,
            (viewport.height - BALL_SIZE) / 2.0,
            BALL_SIZE,
            BALL_SIZE,
        );
        let (rod1, rod2) = match layout {
            Layout::Sides => {
                let y = (viewport.height - ROD_LENGTH) / 2.0;
                (
                    Rect::new(0.0, y, ROD_THICKNESS, ROD_LENGTH),
                    Rect::new(viewport.width - ROD_THICKNESS, y, ROD_THICKNESS, ROD_LENGTH),
                )
            }
            Layout::Ends => {
                let x = (viewport.width - ROD_LENGTH) / 2.0;
                (
                    Rect::new(x, 0.0, ROD_LENGTH, ROD_THICKNESS),
                    Rect::new(x, viewport.height - ROD_THICKNESS, ROD_LENGTH, ROD_THICKNESS),
                )
            }
        };

        Self {
            ball,
            rod1,
            rod2,
            viewport,
        }
    }
}

impl GeometryProvider for FixedGeometry {
    fn ball_box(&self) -> Rect {
        self.ball
    }

    fn rod1_box(&self) -> Rect {
        self.rod1
    }

    fn rod2_box(&self) -> Rect {
        self.rod2
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
