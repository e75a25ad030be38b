use crate::settings::Settings;

/// Counters for the running session.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    pub aliens_killed: u64,
    /// Survives `reset_stats` for the lifetime of the process.
    pub high_score: u64,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            aliens_killed: 0,
            high_score: 0,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
        self.aliens_killed = 0;
    }

    /// Saturates at `u64::MAX` instead of wrapping.
    pub fn record_kills(&mut self, points: u64, count: u64) {
        self.score = self.score.saturating_add(points.saturating_mul(count));
        self.aliens_killed = self.aliens_killed.saturating_add(count);
    }

    /// Returns true when the high score moved.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
