//! Session tally: score, hits, misses and derived accuracy.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use dronestrike_core::constants::SCORE_PER_KILL;
use dronestrike_core::state::StatsView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub score: u32,
    pub hits: u32,
    pub misses: u32,
}

impl SessionStats {
    /// Credit one destroyed drone.
    pub fn record_kill(&mut self) {
        self.score += SCORE_PER_KILL;
        self.hits += 1;
    }

    /// Count a fire command that landed on nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn shots(&self) -> u32 {
        self.hits + self.misses
    }

    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.hits, self.misses)
    }

    pub fn view(&self) -> StatsView {
        StatsView {
            score: self.score,
            hits: self.hits,
            misses: self.misses,
            accuracy: self.accuracy(),
        }
    }
}

/// `round(100 * hits / (hits + misses))` with halves rounded up, or 0 when
/// nothing has been fired. Integer arithmetic keeps x.5 cases exact.
pub fn accuracy_percent(hits: u32, misses: u32) -> u32 {
    let total = hits as u64 + misses as u64;
    if total == 0 {
        return 0;
    }
    ((200 * hits as u64 + total) / (2 * total)) as u32
}
