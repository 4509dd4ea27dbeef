use std::ops::RangeInclusive;

use crate::voting::DEFAULT_UPSET_MARGIN;

#[derive(Debug, Clone)]
pub struct TournamentContext {
    pub tournament_name: String,
    pub recipe_count: usize,

    pub base_quality: RangeInclusive<f64>,
    pub attribute_variation: f64,   // Noise added on top of base quality, both directions

    pub total_votes: RangeInclusive<u32>,
    pub vote_std_dev: f64,

    pub upset_probability: f64,
    pub upset_margin: u32,
    pub upset_rounds: usize,        // Upsets are only injected in the first N rounds
}

impl Default for TournamentContext {
    fn default() -> Self {
        Self {
            tournament_name: "Synthetic Hot Cocoa Championship 2025".to_string(),
            recipe_count: 16,

            base_quality: 6.0..=9.5,
            attribute_variation: 1.5,

            total_votes: 95..=105,
            vote_std_dev: 5.0,

            upset_probability: 0.15,
            upset_margin: DEFAULT_UPSET_MARGIN,
            upset_rounds: 2,
        }
    }
}

impl TournamentContext {
    pub fn allows_upsets(&self, round_index: usize) -> bool {
        round_index < self.upset_rounds
    }
}
