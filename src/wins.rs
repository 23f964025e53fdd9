//! Win recording
//!
//! A win is a discrete event: the ball got past a rod. The engine only
//! notifies a [`WinSink`]; what happens next (a tally, a display, storage)
//! belongs to the sink.

use serde::{Deserialize, Serialize};

/// One of the two players, named after the rod they control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Rod1,
    Rod2,
}

impl Side {
    /// The side that scores when this side misses
    pub fn opponent(self) -> Self {
        match self {
            Side::Rod1 => Side::Rod2,
            Side::Rod2 => Side::Rod1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Rod1 => "Rod 1",
            Side::Rod2 => "Rod 2",
        }
    }
}

/// Receives one call per genuine miss
pub trait WinSink {
    fn store_win(&mut self, side: Side);
}

impl<F: FnMut(Side)> WinSink for F {
    fn store_win(&mut self, side: Side) {
        self(side)
    }
}

/// Running win count per side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    pub rod1: u32,
    pub rod2: u32,
}

impl WinSink for WinTally {
    fn store_win(&mut self, side: Side) {
        match side {
            Side::Rod1 => self.rod1 += 1,
            Side::Rod2 => self.rod2 += 1,
        }
        log::debug!("{} wins ({} - {})", side.as_str(), self.rod1, self.rod2);
    }
}

impl WinTally {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rod_ball_wins";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Rod1 => self.rod1,
            Side::Rod2 => self.rod2,
        }
    }

    pub fn total(&self) -> u32 {
        self.rod1 + self.rod2
    }

    /// Side with more wins, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.rod1.cmp(&self.rod2) {
            std::cmp::Ordering::Greater => Some(Side::Rod1),
            std::cmp::Ordering::Less => Some(Side::Rod2),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Load the tally from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<WinTally>(&json) {
                    Ok(tally) => {
                        log::info!("Loaded wins {} - {}", tally.rod1, tally.rod2);
                        return tally;
                    }
                    Err(e) => log::warn!("Discarding stored wins: {}", e),
                }
            }
        }

        Self::new()
    }

    /// Save the tally to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Rod1.opponent(), Side::Rod2);
        assert_eq!(Side::Rod2.opponent(), Side::Rod1);
    }

    #[test]
    fn test_tally_counts_per_side() {
        let mut tally = WinTally::new();
        assert_eq!(tally.leader(), None);

        tally.store_win(Side::Rod2);
        tally.store_win(Side::Rod2);
        tally.store_win(Side::Rod1);

        assert_eq!(tally.wins(Side::Rod1), 1);
        assert_eq!(tally.wins(Side::Rod2), 2);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.leader(), Some(Side::Rod2));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |side: Side| seen.push(side);
            sink.store_win(Side::Rod1);
        }
        assert_eq!(seen, vec![Side::Rod1]);
    }

    #[test]
    fn test_tally_json() {
        let tally = WinTally { rod1: 4, rod2: 7 };
        let json = serde_json::to_string(&tally).unwrap();
        let back: WinTally = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tally);
    }
}
