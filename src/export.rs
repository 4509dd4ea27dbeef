use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::*;
use tracing::info;

use crate::error::Result;
use crate::recipe::Recipe;
use crate::tournament::{Match, Tournament};

pub const DATA_FILE: &str = "synthetic_tournament_data.json";
pub const REPORT_FILE: &str = "synthetic_tournament_data.md";
pub const MATCHES_CSV_FILE: &str = "synthetic_tournament_matches.csv";

/// Complete snapshot of a finished (or in progress) tournament. Recipes and matches keep
/// their generation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TournamentData {
    pub tournament_name: String,
    pub generated_at: DateTime<Local>,
    pub total_recipes: usize,
    pub total_matches: usize,
    pub champion: Option<String>,
    pub recipes: Vec<Recipe>,
    pub matches: Vec<Match>,
}

impl Tournament {
    pub fn export_data(&self) -> TournamentData {
        self.export_data_at(Local::now())
    }

    pub fn export_data_at(&self, generated_at: DateTime<Local>) -> TournamentData {
        TournamentData {
            tournament_name: self.context.tournament_name.clone(),
            generated_at,
            total_recipes: self.recipes.len(),
            total_matches: self.matches.len(),
            champion: self.get_champion().map(str::to_owned),
            recipes: self.recipes.clone(),
            matches: self.matches.clone(),
        }
    }

    pub fn export_matches_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for m in &self.matches {
            writer.serialize(m)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl TournamentData {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }
}

// Writes the JSON record, the markdown report and the match CSV next to each other.
// All three come from one snapshot so they always agree on the timestamp.
pub fn save_all(tournament: &Tournament, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let data = tournament.export_data();
    let outputs = [
        (output_dir.join(DATA_FILE), data.to_json()?),
        (output_dir.join(REPORT_FILE), tournament.render_markdown(&data.generated_at)),
        (output_dir.join(MATCHES_CSV_FILE), tournament.export_matches_csv()?),
    ];

    let mut written = Vec::new();
    for (path, contents) in outputs {
        fs::write(&path, contents)?;
        info!(path = %path.display(), "exported");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
