use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use crate::error::Result;
use crate::recipe::Attributes;

pub const DEFAULT_UPSET_MARGIN: u32 = 10;

// Logistic curve over the difference in summed attributes. Chance of the first recipe winning
pub fn calculate_win_probability(first: &Attributes, second: &Attributes) -> f64 {
    let diff = first.total() - second.total();
    1.0 / (1.0 + f64::exp(-diff))
}

// Votes for the first recipe are drawn around its expected share, the second recipe gets the rest
pub fn generate_votes<R: Rng + ?Sized>(
    first: &Attributes,
    second: &Attributes,
    total_votes: u32,
    std_dev: f64,
    rng: &mut R,
) -> Result<(u32, u32)> {
    let win_prob = calculate_win_probability(first, second);
    let normal = Normal::new(win_prob * total_votes as f64, std_dev)?;

    // Truncate toward zero before clamping, a negative draw just becomes zero votes
    let drawn = normal.sample(rng).trunc();
    let first_votes = drawn.clamp(0.0, total_votes as f64) as u32;

    Ok((first_votes, total_votes - first_votes))
}

// Reshuffles a decided pairing so the trailing side wins by at most upset_margin over half.
// Returns (new_weak, new_strong)
pub fn create_upset<R: Rng + ?Sized>(weak_votes: u32, strong_votes: u32, upset_margin: u32, rng: &mut R) -> (u32, u32) {
    let total = weak_votes + strong_votes;
    let new_weak = (total / 2 + rng.random_range(1..=upset_margin.max(1))).min(total);

    (new_weak, total - new_weak)
}

#[cfg(test)]
#[path = "voting_tests.rs"]
mod voting_tests;
