use rand::prelude::*;
use serde::*;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::tournament_context::TournamentContext;
use crate::util::*;

pub const ADJECTIVES: [&str; 16] = [
    "Velvet", "Silky", "Divine", "Arctic", "Midnight", "Golden",
    "Whispered", "Enchanted", "Dreamy", "Frosted", "Spiced", "Caramel",
    "Ruby", "Mystic", "Cloud", "Winter",
];

pub const FLAVORS: [&str; 16] = [
    "Cinnamon", "Peppermint", "Hazelnut", "Vanilla", "Mocha",
    "Raspberry", "Orange", "Lavender", "Maple", "Coconut",
    "Salted Caramel", "Chili", "Cardamom", "Rose", "Espresso", "Almond",
];

pub const BASES: [&str; 10] = [
    "Delight", "Dream", "Bliss", "Wonder", "Magic",
    "Kiss", "Swirl", "Symphony", "Embrace", "Cascade",
];

pub const ATTRIBUTE_LABELS: [&str; 5] = ["Taste", "Presentation", "Creativity", "Aroma", "Texture"];

// Adjectives and bases are single words, so distinct triples always give distinct names
pub fn name_pool_size() -> usize {
    ADJECTIVES.len() * FLAVORS.len() * BASES.len()
}

pub fn generate_recipe_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let flavor = FLAVORS[rng.random_range(0..FLAVORS.len())];
    let base = BASES[rng.random_range(0..BASES.len())];

    format!("{adjective} {flavor} {base}")
}

// Scores share one base quality, so a strong recipe tends to be strong everywhere
pub fn generate_attributes<R: Rng + ?Sized>(rng: &mut R, ctx: &TournamentContext) -> Attributes {
    let base_quality = rng.random_range(ctx.base_quality.clone());
    let variation = ctx.attribute_variation;

    let mut score = || (base_quality + rng.random_range(-variation..=variation)).clamp(0.0, 10.0);

    Attributes {
        taste: score(),
        presentation: score(),
        creativity: score(),
        aroma: score(),
        texture: score(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: usize,
    pub name: String,
    pub attributes: Attributes,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub taste: f64,
    pub presentation: f64,
    pub creativity: f64,
    pub aroma: f64,
    pub texture: f64,
}

impl Attributes {
    pub fn values(&self) -> [f64; 5] {
        [self.taste, self.presentation, self.creativity, self.aroma, self.texture]
    }

    pub fn total(&self) -> f64 {
        sum_vector(&self.values())
    }

    pub fn average(&self) -> f64 {
        mean(&self.values())
    }
}

#[cfg(test)]
#[path = "recipe_tests.rs"]
mod recipe_tests;
