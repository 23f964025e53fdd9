//! Game loop controller
//!
//! Owns the simulation state, routes key presses and drives ticks. The real
//! timer lives with the host; [`TickClock`] converts elapsed wall time into
//! whole ticks for hosts (and tests) that only know how much time passed.

use crate::consts::TICK_MS;
use crate::geometry::GeometryProvider;
use crate::input::{Action, KeyBindings, map_key};
use crate::render::{self, Element, Renderer};
use crate::settings::Settings;
use crate::sim::{self, Direction, GamePhase, GameState, TickReport};
use crate::wins::{Side, WinSink};

/// Result of a start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The game was idle and is now running; the host should begin ticking
    Started,
    /// Already running; nothing changed and no second timer is wanted
    AlreadyRunning,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Moved(Side),
    /// Move refused at the viewport edge
    Blocked(Side),
    Start(StartOutcome),
    Ignored,
}

/// Accumulates elapsed milliseconds and hands out whole ticks
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator_ms: u32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time, return how many ticks are now due
    pub fn elapse(&mut self, ms: u32) -> u32 {
        let total = u64::from(self.accumulator_ms) + u64::from(ms);
        self.accumulator_ms = (total % u64::from(TICK_MS)) as u32;
        (total / u64::from(TICK_MS)) as u32
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

/// The game: state, key bindings and the tick clock
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    bindings: KeyBindings,
    clock: TickClock,
}

impl GameLoop {
    /// Build an idle game from the current element boxes
    pub fn new(settings: &Settings, geometry: &impl GeometryProvider) -> Self {
        Self {
            state: GameState::from_geometry(settings.layout, geometry),
            bindings: settings.keys.clone(),
            clock: TickClock::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Dispatch one key press
    pub fn handle_key_press(
        &mut self,
        code: &str,
        geometry: &impl GeometryProvider,
        renderer: &mut impl Renderer,
    ) -> KeyOutcome {
        match map_key(code, &self.bindings) {
            Action::StartGame => KeyOutcome::Start(self.handle_enter_key(geometry)),
            Action::MoveRod1Left => self.move_rod(Side::Rod1, Direction::Left, geometry, renderer),
            Action::MoveRod1Right => self.move_rod(Side::Rod1, Direction::Right, geometry, renderer),
            Action::MoveRod2Left => self.move_rod(Side::Rod2, Direction::Left, geometry, renderer),
            Action::MoveRod2Right => self.move_rod(Side::Rod2, Direction::Right, geometry, renderer),
            Action::Ignore => KeyOutcome::Ignored,
        }
    }

    /// Start on the first press only
    pub fn handle_enter_key(&mut self, geometry: &impl GeometryProvider) -> StartOutcome {
        match self.state.phase {
            GamePhase::NotStarted => self.start_game(geometry),
            GamePhase::Running => StartOutcome::AlreadyRunning,
        }
    }

    /// Place the ball at its laid-out position and begin running
    pub fn start_game(&mut self, geometry: &impl GeometryProvider) -> StartOutcome {
        if self.state.is_running() {
            log::debug!("Start ignored, game already running");
            return StartOutcome::AlreadyRunning;
        }

        self.state.ball = sim::Ball::new(geometry.ball_box().pos);
        self.state.phase = GamePhase::Running;
        self.clock.reset();
        log::info!("Game started at ({}, {})", self.state.ball.pos.x, self.state.ball.pos.y);
        StartOutcome::Started
    }

    /// One tick, then render the frame
    pub fn tick(
        &mut self,
        geometry: &impl GeometryProvider,
        wins: &mut impl WinSink,
        renderer: &mut impl Renderer,
    ) -> Option<TickReport> {
        let report = sim::tick(&mut self.state, geometry, wins)?;
        render::render_state(renderer, &self.state);
        Some(report)
    }

    /// Run `n` ticks
    pub fn advance(
        &mut self,
        n: u32,
        geometry: &impl GeometryProvider,
        wins: &mut impl WinSink,
        renderer: &mut impl Renderer,
    ) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..n {
            match self.tick(geometry, wins, renderer) {
                Some(report) => reports.push(report),
                None => break,
            }
        }
        reports
    }

    /// Let `ms` of wall time pass. Time before the start does not count.
    pub fn elapse(
        &mut self,
        ms: u32,
        geometry: &impl GeometryProvider,
        wins: &mut impl WinSink,
        renderer: &mut impl Renderer,
    ) -> Vec<TickReport> {
        if !self.state.is_running() {
            return Vec::new();
        }
        let due = self.clock.elapse(ms);
        self.advance(due, geometry, wins, renderer)
    }

    fn move_rod(
        &mut self,
        side: Side,
        direction: Direction,
        geometry: &impl GeometryProvider,
        renderer: &mut impl Renderer,
    ) -> KeyOutcome {
        let axis = self.state.layout.slide_axis();
        let extent = geometry.viewport().extent(axis);
        let rod = self.state.rod_mut(side);

        if !sim::move_rod(rod, axis, direction, extent) {
            log::debug!("{} blocked moving {:?}", side.as_str(), direction);
            return KeyOutcome::Blocked(side);
        }

        let element = match side {
            Side::Rod1 => Element::Rod1,
            Side::Rod2 => Element::Rod2,
        };
        render::place_rect(renderer, element, rod);
        KeyOutcome::Moved(side)
    }
}
