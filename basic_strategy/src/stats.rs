use serde::{Deserialize, Serialize};

/// Decision counters for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    correct_decisions: u32,
    total_decisions: u32,
    current_streak: u32,
    longest_streak: u32,
}

impl Statistics {
    /// Starts counting with a best streak carried over from earlier runs.
    pub fn with_longest_streak(longest_streak: u32) -> Self {
        Statistics {
            longest_streak,
            ..Default::default()
        }
    }

    pub fn record_decision(&mut self, is_correct: bool) {
        self.total_decisions += 1;
        if is_correct {
            self.correct_decisions += 1;
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of correct decisions, 0 before the first decision.
    pub fn decision_accuracy(&self) -> f64 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        self.correct_decisions as f64 / self.total_decisions as f64 * 100.0
    }

    pub fn get_correct_decisions(&self) -> u32 {
        self.correct_decisions
    }

    pub fn get_total_decisions(&self) -> u32 {
        self.total_decisions
    }

    pub fn get_current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn get_longest_streak(&self) -> u32 {
        self.longest_streak
    }
}

/// Persistent storage for the best streak. Reads fall back to 0 and writes are
/// best-effort, so implementations report failures through logging only.
pub trait StreakStore {
    fn load_best_streak(&self) -> u32;
    fn save_best_streak(&mut self, best_streak: u32);
}

/// Keeps the best streak in memory. Useful for tests and for embedding the
/// trainer without a filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStreakStore {
    best_streak: u32,
}

impl MemoryStreakStore {
    pub fn new(best_streak: u32) -> Self {
        MemoryStreakStore { best_streak }
    }
}

impl StreakStore for MemoryStreakStore {
    fn load_best_streak(&self) -> u32 {
        self.best_streak
    }

    fn save_best_streak(&mut self, best_streak: u32) {
        self.best_streak = best_streak;
    }
}

/// Accumulates statistics and mirrors every new best streak to a store.
#[derive(Debug)]
pub struct Tracker<S: StreakStore> {
    stats: Statistics,
    store: S,
    persisted_best: u32,
}

impl<S: StreakStore> Tracker<S> {
    /// Seeds the longest streak with the persisted best streak.
    pub fn new(store: S) -> Self {
        let persisted_best = store.load_best_streak();
        Tracker {
            stats: Statistics::with_longest_streak(persisted_best),
            store,
            persisted_best,
        }
    }

    pub fn record_decision(&mut self, is_correct: bool) {
        self.stats.record_decision(is_correct);
        let longest_streak = self.stats.get_longest_streak();
        if longest_streak > self.persisted_best {
            log::info!("new best streak: {}", longest_streak);
            self.store.save_best_streak(longest_streak);
            self.persisted_best = longest_streak;
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
