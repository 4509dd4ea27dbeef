use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::export::TournamentData;

// Loads a tournament record previously written by the exporter. Recipe ids may be numbers or
// numeric strings, everything else has to match the exported shape.
pub fn load_data(file_path: &Path) -> Result<TournamentData> {
    let data = fs::read_to_string(file_path)?;
    let tournament_data: TournamentData = serde_json::from_str(&data)?;

    debug!(
        path = %file_path.display(),
        recipes = tournament_data.recipes.len(),
        matches = tournament_data.matches.len(),
        "loaded tournament data"
    );

    Ok(tournament_data)
}

#[cfg(test)]
#[path = "data_loader_tests.rs"]
mod data_loader_tests;
