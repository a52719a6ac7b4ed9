use std::time::{Duration, Instant};

/// In-memory aggregates over one process lifetime: elapsed time of the
/// current run, session-best score, games played. Nothing is persisted.
pub struct SessionStats {
    run_started: Option<Instant>,
    pub elapsed: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            run_started: None,
            elapsed: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed clock; a no-op unless a run is in progress.
    pub fn update(&mut self) {
        if let Some(started) = self.run_started {
            self.elapsed = started.elapsed();
        }
    }

    /// Start the clock for a new run.
    pub fn on_game_start(&mut self) {
        self.run_started = Some(Instant::now());
        self.elapsed = Duration::ZERO;
    }

    /// Freeze the clock and fold the final score into the session totals.
    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.run_started = None;
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Clear the per-run clock; session totals survive a restart.
    pub fn on_reset(&mut self) {
        self.run_started = None;
        self.elapsed = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_game_over(10);
        assert_eq!(stats.best_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.on_game_over(5);
        assert_eq!(stats.best_score, 10); // Should not decrease
        assert_eq!(stats.games_played, 2);

        stats.on_game_over(15);
        assert_eq!(stats.best_score, 15); // Should update
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_clock_runs_only_while_a_run_is_in_progress() {
        let mut stats = SessionStats::new();

        // Not started yet: update does nothing
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert_eq!(stats.elapsed, Duration::ZERO);

        stats.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert!(stats.elapsed.as_millis() >= 20);

        // Frozen at game over
        stats.on_game_over(3);
        let frozen = stats.elapsed;
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert_eq!(stats.elapsed, frozen);
    }

    #[test]
    fn test_reset_clears_clock_but_keeps_totals() {
        let mut stats = SessionStats::new();
        stats.on_game_start();
        stats.on_game_over(8);

        stats.on_reset();

        assert_eq!(stats.elapsed, Duration::ZERO);
        assert_eq!(stats.best_score, 8);
        assert_eq!(stats.games_played, 1);
    }
}
