//! On-screen placement output
//!
//! After each tick the engine pushes element positions to a [`Renderer`].
//! Positions are whole pixels, matching `style.left`/`style.top` offsets.

use glam::Vec2;

use crate::geometry::Rect;
use crate::sim::GameState;

/// Elements the engine positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Ball,
    Rod1,
    Rod2,
}

impl Element {
    /// Page element id
    pub fn id(&self) -> &'static str {
        match self {
            Element::Ball => "ball",
            Element::Rod1 => "rod1",
            Element::Rod2 => "rod2",
        }
    }
}

/// Receives element placements in integer pixels
pub trait Renderer {
    fn place(&mut self, element: Element, left: i32, top: i32);
}

/// Place one element at the rounded origin of `rect`
pub fn place_rect(renderer: &mut impl Renderer, element: Element, rect: &Rect) {
    renderer.place(
        element,
        rect.pos.x.round() as i32,
        rect.pos.y.round() as i32,
    );
}

/// Push the whole frame: ball, then both rods
pub fn render_state(renderer: &mut impl Renderer, state: &GameState) {
    place_rect(renderer, Element::Ball, &state.ball.rect(Vec2::ZERO));
    place_rect(renderer, Element::Rod1, &state.rod1);
    place_rect(renderer, Element::Rod2, &state.rod2);
}

/// Renderer that remembers every placement (native runs and tests)
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub placements: Vec<(Element, i32, i32)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent placement of `element`
    pub fn last(&self, element: Element) -> Option<(i32, i32)> {
        self.placements
            .iter()
            .rev()
            .find(|(e, _, _)| *e == element)
            .map(|&(_, left, top)| (left, top))
    }
}

impl Renderer for RecordingRenderer {
    fn place(&mut self, element: Element, left: i32, top: i32) {
        self.placements.push((element, left, top));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rect_rounds() {
        let mut out = RecordingRenderer::new();
        place_rect(&mut out, Element::Rod1, &Rect::new(10.4, 19.6, 5.0, 5.0));
        assert_eq!(out.last(Element::Rod1), Some((10, 20)));
        assert_eq!(out.last(Element::Ball), None);
    }

    #[test]
    fn test_render_state_rounds_every_element() {
        use crate::geometry::{FixedGeometry, Viewport};
        use crate::sim::Layout;

        let geometry =
            FixedGeometry::uniform(Rect::new(4.6, 7.2, 10.0, 10.0), Viewport::new(100.0, 100.0));
        let state = GameState::from_geometry(Layout::Ends, &geometry);
        let mut out = RecordingRenderer::new();

        render_state(&mut out, &state);

        assert_eq!(
            out.placements,
            vec![
                (Element::Ball, 5, 7),
                (Element::Rod1, 5, 7),
                (Element::Rod2, 5, 7),
            ]
        );
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(Element::Ball.id(), "ball");
        assert_eq!(Element::Rod2.id(), "rod2");
    }
}
