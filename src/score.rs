//! Scoring

/// Running score total with the fixed per-clear point table.
#[derive(Debug, Clone, Default)]
pub struct Score {
    /// Current points
    pub points: u64,
}

impl Score {
    pub fn new() -> Self {
        Self { points: 0 }
    }

    /// Add points for rows cleared in a single sweep.
    ///
    /// The table is a step function, not a per-line multiplier: clearing four
    /// or more rows at once is worth 500, not 4x100.
    pub fn add_clear(&mut self, rows: usize) {
        self.points += match rows {
            0 => 0,
            1 => 100,
            2 => 200,
            3 => 300,
            _ => 500,
        };
    }

    /// Add the single point a player-initiated downward step is worth.
    pub fn add_drop_point(&mut self) {
        self.points += 1;
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_point_table() {
        for (rows, expected) in [(0, 0), (1, 100), (2, 200), (3, 300), (4, 500), (5, 500)] {
            let mut score = Score::new();
            score.add_clear(rows);
            assert_eq!(score.points, expected, "{} rows", rows);
        }
    }

    #[test]
    fn test_clears_accumulate() {
        let mut score = Score::new();
        score.add_clear(1);
        score.add_clear(4);
        assert_eq!(score.points, 600);
    }

    #[test]
    fn test_drop_points() {
        let mut score = Score::new();
        score.add_drop_point();
        score.add_drop_point();
        assert_eq!(score.points, 2);
    }

    #[test]
    fn test_reset_zeroes_points() {
        let mut score = Score::new();
        score.add_clear(2);
        score.reset();
        assert_eq!(score.points, 0);
    }
}
