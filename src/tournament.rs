//! Single elimination bracket over the four fixed rounds.
//!
//! All randomness comes from the generator passed into each call, so a seeded
//! `StdRng` reproduces the same recipes and the same match sequence.

use std::collections::HashSet;
use std::fmt;

use rand::prelude::*;
use serde::*;
use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::recipe::*;
use crate::tournament_context::TournamentContext;
use crate::voting::*;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    #[serde(rename = "Round of 16")]
    RoundOf16,
    Quarterfinals,
    Semifinals,
    Finals,
}

impl Round {
    pub const ALL: [Round; 4] = [Round::RoundOf16, Round::Quarterfinals, Round::Semifinals, Round::Finals];

    pub fn name(&self) -> &'static str {
        match self {
            Round::RoundOf16 => "Round of 16",
            Round::Quarterfinals => "Quarterfinals",
            Round::Semifinals => "Semifinals",
            Round::Finals => "Finals",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entrants needed to fill every round exactly once.
pub const BRACKET_SIZE: usize = 1 << Round::ALL.len();

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub round: Round,
    pub match_number: usize,
    pub recipe1: String,
    pub recipe2: String,
    pub recipe1_votes: u32,
    pub recipe2_votes: u32,
    pub winner: String,
    pub loser: String,
    pub winner_votes: u32,
    pub loser_votes: u32,
    pub margin: u32,
    pub total_votes: u32,
}

impl Match {
    // Ties go to recipe2
    fn decide(round: Round, match_number: usize, recipe1: &Recipe, recipe2: &Recipe, votes1: u32, votes2: u32) -> Self {
        let (winner, loser) = if votes1 > votes2 { (recipe1, recipe2) } else { (recipe2, recipe1) };

        Self {
            round,
            match_number,
            recipe1: recipe1.name.clone(),
            recipe2: recipe2.name.clone(),
            recipe1_votes: votes1,
            recipe2_votes: votes2,
            winner: winner.name.clone(),
            loser: loser.name.clone(),
            winner_votes: votes1.max(votes2),
            loser_votes: votes1.min(votes2),
            margin: votes1.abs_diff(votes2),
            total_votes: votes1 + votes2,
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.recipe1 == name || self.recipe2 == name
    }

    // (own votes, opponent name, opponent votes) from the point of view of one competitor
    pub fn perspective(&self, name: &str) -> (u32, &str, u32) {
        debug_assert!(self.involves(name));

        if self.recipe1 == name {
            (self.recipe1_votes, &self.recipe2, self.recipe2_votes)
        } else {
            (self.recipe2_votes, &self.recipe1, self.recipe1_votes)
        }
    }
}

#[derive(Debug, Default)]
pub struct Tournament {
    pub context: TournamentContext,
    pub recipes: Vec<Recipe>,
    pub matches: Vec<Match>,
}

impl Tournament {
    pub fn new(context: TournamentContext) -> Self {
        Self {
            context,
            recipes: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Replaces the recipe list with `count` freshly generated recipes. Name collisions are
    /// regenerated, ids follow generation order starting at 1.
    pub fn generate_recipes<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<&[Recipe]> {
        if count > name_pool_size() {
            return Err(TournamentError::NamePoolExhausted { requested: count, available: name_pool_size() });
        }

        let mut recipes = Vec::with_capacity(count);
        let mut used_names = HashSet::new();

        while recipes.len() < count {
            let name = generate_recipe_name(rng);
            if !used_names.insert(name.clone()) {
                debug!(%name, "recipe name collision, regenerating");
                continue;
            }

            recipes.push(Recipe {
                id: recipes.len() + 1,
                name,
                attributes: generate_attributes(rng, &self.context),
            });
        }

        self.recipes = recipes;
        Ok(&self.recipes)
    }

    /// Plays one pairing and returns the match record together with the recipe that won it.
    pub fn simulate_match<'a, R: Rng + ?Sized>(
        &self,
        recipe1: &'a Recipe,
        recipe2: &'a Recipe,
        round: Round,
        match_number: usize,
        allow_upset: bool,
        rng: &mut R,
    ) -> Result<(Match, &'a Recipe)> {
        let ctx = &self.context;
        let total_votes = rng.random_range(ctx.total_votes.clone());

        let (mut votes1, mut votes2) = generate_votes(
            &recipe1.attributes,
            &recipe2.attributes,
            total_votes,
            ctx.vote_std_dev,
            rng,
        )?;

        if allow_upset && rng.random::<f64>() < ctx.upset_probability {
            let recipe1_favored = calculate_win_probability(&recipe1.attributes, &recipe2.attributes) >= 0.5;

            if recipe1_favored && votes1 > votes2 {
                (votes2, votes1) = create_upset(votes2, votes1, ctx.upset_margin, rng);
                debug!(underdog = %recipe2.name, votes2, votes1, "upset");
            } else if !recipe1_favored && votes2 > votes1 {
                (votes1, votes2) = create_upset(votes1, votes2, ctx.upset_margin, rng);
                debug!(underdog = %recipe1.name, votes1, votes2, "upset");
            }
        }

        let winner = if votes1 > votes2 { recipe1 } else { recipe2 };
        Ok((Match::decide(round, match_number, recipe1, recipe2, votes1, votes2), winner))
    }

    /// Plays the whole bracket from a fresh random seeding and returns the recorded matches.
    pub fn run_tournament<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[Match]> {
        if self.recipes.is_empty() {
            self.generate_recipes(self.context.recipe_count, rng)?;
        }

        if self.recipes.len() != BRACKET_SIZE {
            return Err(TournamentError::BracketSize { expected: BRACKET_SIZE, actual: self.recipes.len() });
        }

        self.matches.clear();

        let mut current_round: Vec<usize> = (0..self.recipes.len()).collect();
        current_round.shuffle(rng);

        for (round_idx, round) in Round::ALL.into_iter().enumerate() {
            let allow_upset = self.context.allows_upsets(round_idx);
            let mut next_round = Vec::with_capacity(current_round.len() / 2);

            for (match_idx, pair) in current_round.chunks_exact(2).enumerate() {
                let (recipe1, recipe2) = (&self.recipes[pair[0]], &self.recipes[pair[1]]);
                let (m, winner) = self.simulate_match(recipe1, recipe2, round, match_idx + 1, allow_upset, rng)?;

                // Identity, not name: callers may fill recipes with duplicate names
                next_round.push(if std::ptr::eq(winner, recipe1) { pair[0] } else { pair[1] });
                self.matches.push(m);
            }

            info!(round = %round, matches = next_round.len(), "round complete");
            current_round = next_round;
        }

        debug_assert_eq!(current_round.len(), 1);
        Ok(&self.matches)
    }

    pub fn get_champion(&self) -> Option<&str> {
        self.matches.last().map(|m| m.winner.as_str())
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
