//! Chart-ready reshaping of an exported tournament.
//!
//! Every builder here is a pure reduction over [`TournamentData`]. Per-round results are kept as
//! ordered `(Round, _)` lists in bracket order so consumers never depend on map iteration order.
//! The champion is always taken from the record's `champion` field.

use std::fs;
use std::path::Path;

use serde::*;

use crate::error::{Result, TournamentError};
use crate::export::TournamentData;
use crate::recipe::{Attributes, Recipe, ATTRIBUTE_LABELS};
use crate::tournament::{Match, Round};
use crate::util::*;

pub const VISUALIZATION_FILE: &str = "visualization_data.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SankeyNode {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SankeyData {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

impl SankeyData {
    fn add_node(&mut self, name: &str) {
        if self.nodes.iter().any(|n| n.name == name) { return; }
        self.nodes.push(SankeyNode { name: name.to_string() });
    }

    fn link(&mut self, source: &str, target: &str, value: u32) {
        self.links.push(SankeyLink { source: source.to_string(), target: target.to_string(), value });
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    pub label: String,
    pub data: Vec<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartData<T> {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub title: String,
    pub subtitle: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset<T>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: Vec<DonutSlice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChart {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub title: String,
    pub subtitle: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub datasets: Vec<Dataset<ScatterPoint>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundTotals {
    pub winner_votes: u32,
    pub loser_votes: u32,
    pub matches: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundCompetitiveness {
    pub average_margin: f64,
    pub min_margin: u32,
    pub max_margin: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JourneyStep {
    pub round: Round,
    pub opponent: String,
    pub votes: u32,
    pub opponent_votes: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChampionJourney {
    pub champion: String,
    pub attributes: Attributes,
    pub matches: Vec<Match>,
    pub steps: Vec<JourneyStep>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VisualizationData {
    pub sankey: SankeyData,
    pub bar_chart: ChartData<u32>,
    pub radar_chart: RadarChart,
    pub round_totals: Vec<(Round, RoundTotals)>,
    pub donut_charts: Vec<DonutChart>,
    pub competitiveness: Vec<(Round, RoundCompetitiveness)>,
    pub competitiveness_chart: ChartData<f64>,
    pub finalist_recipes: Vec<Recipe>,
    pub champion_journey: ChampionJourney,
    pub journey_chart: ChartData<u32>,
    pub scatter_chart: ScatterChart,
}

pub fn group_by_round(matches: &[Match]) -> Vec<(Round, Vec<&Match>)> {
    Round::ALL
        .into_iter()
        .map(|round| (round, matches.iter().filter(|m| m.round == round).collect::<Vec<_>>()))
        .filter(|(_, round_matches)| !round_matches.is_empty())
        .collect()
}

fn round_matches(data: &TournamentData, round: Round) -> impl Iterator<Item = &Match> {
    data.matches.iter().filter(move |m| m.round == round)
}

fn recorded_champion(data: &TournamentData) -> Result<&Recipe> {
    let name = data.champion.as_deref().ok_or(TournamentError::MissingChampion)?;
    data.recipe(name).ok_or_else(|| TournamentError::UnknownRecipe(name.to_string()))
}

// Round of 16 winners feed Quarterfinals, quarterfinal winners get their own (SF) node,
// semifinal winners feed Finals and Finals feeds the champion.
pub fn sankey(data: &TournamentData) -> Result<SankeyData> {
    let champion = recorded_champion(data)?;
    let mut sankey = SankeyData::default();

    for m in round_matches(data, Round::RoundOf16) {
        sankey.add_node(&m.winner);
        sankey.link(&m.winner, Round::Quarterfinals.name(), m.winner_votes);
    }
    sankey.add_node(Round::Quarterfinals.name());

    for m in round_matches(data, Round::Quarterfinals) {
        let target = format!("{} (SF)", m.winner);
        sankey.link(Round::Quarterfinals.name(), &target, m.winner_votes);
        sankey.add_node(&target);
    }

    for m in round_matches(data, Round::Semifinals) {
        sankey.link(&format!("{} (SF)", m.winner), Round::Finals.name(), m.winner_votes);
    }
    sankey.add_node(Round::Finals.name());

    let champion_node = format!("🏆 {}", champion.name);
    if let Some(final_match) = data.matches.last() {
        sankey.link(Round::Finals.name(), &champion_node, final_match.winner_votes);
    }
    sankey.add_node(&champion_node);

    Ok(sankey)
}

pub fn final_bar_chart(data: &TournamentData) -> Result<ChartData<u32>> {
    let m = data.matches.last().ok_or(TournamentError::MissingChampion)?;

    Ok(ChartData {
        chart_type: "bar".to_string(),
        title: "Championship Final - Vote Distribution".to_string(),
        subtitle: format!("{} vs {}", m.recipe1, m.recipe2),
        labels: vec![m.recipe1.clone(), m.recipe2.clone()],
        datasets: vec![Dataset {
            label: "Votes Received".to_string(),
            data: vec![m.recipe1_votes, m.recipe2_votes],
        }],
    })
}

pub fn round_totals(data: &TournamentData) -> Vec<(Round, RoundTotals)> {
    group_by_round(&data.matches)
        .into_iter()
        .map(|(round, matches)| {
            let mut totals = RoundTotals::default();
            for m in matches {
                totals.winner_votes += m.winner_votes;
                totals.loser_votes += m.loser_votes;
                totals.matches += 1;
            }
            (round, totals)
        })
        .collect()
}

pub fn donut_charts(totals: &[(Round, RoundTotals)]) -> Vec<DonutChart> {
    totals
        .iter()
        .map(|(round, t)| DonutChart {
            title: format!("{round} - Vote Distribution"),
            chart_type: "doughnut".to_string(),
            data: vec![
                DonutSlice { label: "Winner Votes".to_string(), value: t.winner_votes },
                DonutSlice { label: "Runner-up Votes".to_string(), value: t.loser_votes },
            ],
        })
        .collect()
}

/// Recipes that reached the semifinals, in recipe list order.
pub fn semifinalists(data: &TournamentData) -> Vec<Recipe> {
    data.recipes
        .iter()
        .filter(|r| round_matches(data, Round::Semifinals).any(|m| m.involves(&r.name)))
        .cloned()
        .collect()
}

pub fn radar_chart(recipes: &[Recipe]) -> RadarChart {
    RadarChart {
        labels: ATTRIBUTE_LABELS.iter().map(|l| l.to_string()).collect(),
        datasets: recipes
            .iter()
            .map(|r| Dataset {
                label: r.name.clone(),
                data: r.attributes.values().iter().map(|v| round_to(*v, 1)).collect(),
            })
            .collect(),
    }
}

// Every round appears, rounds without matches report zeros
pub fn competitiveness(data: &TournamentData) -> Vec<(Round, RoundCompetitiveness)> {
    Round::ALL
        .into_iter()
        .map(|round| {
            let margins: Vec<u32> = round_matches(data, round).map(|m| m.margin).collect();
            let as_f64: Vec<f64> = margins.iter().map(|m| *m as f64).collect();

            (round, RoundCompetitiveness {
                average_margin: mean(&as_f64),
                min_margin: margins.iter().copied().min().unwrap_or(0),
                max_margin: margins.iter().copied().max().unwrap_or(0),
            })
        })
        .collect()
}

pub fn competitiveness_chart(data: &TournamentData) -> ChartData<f64> {
    let stats: Vec<(Round, RoundCompetitiveness)> = competitiveness(data)
        .into_iter()
        .filter(|(round, _)| round_matches(data, *round).next().is_some())
        .collect();

    ChartData {
        chart_type: "bar".to_string(),
        title: "Average Victory Margin by Tournament Round".to_string(),
        subtitle: "Lower margin = more competitive matches".to_string(),
        labels: stats.iter().map(|(round, _)| round.name().to_string()).collect(),
        datasets: vec![Dataset {
            label: "Average Margin (votes)".to_string(),
            data: stats.iter().map(|(_, s)| round_to(s.average_margin, 1)).collect(),
        }],
    }
}

pub fn champion_journey(data: &TournamentData) -> Result<ChampionJourney> {
    let champion = recorded_champion(data)?;
    let matches: Vec<Match> = data.matches.iter().filter(|m| m.involves(&champion.name)).cloned().collect();

    let steps = matches
        .iter()
        .map(|m| {
            let (votes, opponent, opponent_votes) = m.perspective(&champion.name);
            JourneyStep { round: m.round, opponent: opponent.to_string(), votes, opponent_votes }
        })
        .collect();

    Ok(ChampionJourney {
        champion: champion.name.clone(),
        attributes: champion.attributes,
        matches,
        steps,
    })
}

pub fn journey_chart(journey: &ChampionJourney) -> ChartData<u32> {
    ChartData {
        chart_type: "line".to_string(),
        title: format!("Champion's Journey - {}", journey.champion),
        subtitle: "Vote performance across tournament rounds".to_string(),
        labels: journey.steps.iter().map(|s| s.round.name().to_string()).collect(),
        datasets: vec![
            Dataset {
                label: "Votes Received".to_string(),
                data: journey.steps.iter().map(|s| s.votes).collect(),
            },
            Dataset {
                label: "Victory Margin".to_string(),
                data: journey.matches.iter().map(|m| m.margin).collect(),
            },
        ],
    }
}

pub fn quality_scatter(data: &TournamentData) -> ScatterChart {
    ScatterChart {
        chart_type: "scatter".to_string(),
        title: "Recipe Quality Analysis".to_string(),
        subtitle: format!("Average Score vs Taste Score for all {} recipes", data.recipes.len()),
        x_axis_label: "Average Score".to_string(),
        y_axis_label: "Taste Score".to_string(),
        datasets: vec![Dataset {
            label: "Recipes".to_string(),
            data: data
                .recipes
                .iter()
                .map(|r| ScatterPoint {
                    x: round_to(r.attributes.average(), 2),
                    y: round_to(r.attributes.taste, 2),
                })
                .collect(),
        }],
    }
}

pub fn build_visualizations(data: &TournamentData) -> Result<VisualizationData> {
    let totals = round_totals(data);
    let finalists = semifinalists(data);
    let journey = champion_journey(data)?;

    Ok(VisualizationData {
        sankey: sankey(data)?,
        bar_chart: final_bar_chart(data)?,
        radar_chart: radar_chart(&finalists),
        donut_charts: donut_charts(&totals),
        round_totals: totals,
        competitiveness: competitiveness(data),
        competitiveness_chart: competitiveness_chart(data),
        finalist_recipes: finalists,
        journey_chart: journey_chart(&journey),
        champion_journey: journey,
        scatter_chart: quality_scatter(data),
    })
}

pub fn save_visualizations(viz: &VisualizationData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(viz)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod charts_tests;
