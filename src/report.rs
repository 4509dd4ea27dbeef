use chrono::{DateTime, Local};

use crate::charts::VisualizationData;
use crate::recipe::ATTRIBUTE_LABELS;
use crate::tournament::Tournament;

impl Tournament {
    pub fn export_markdown(&self) -> String {
        self.render_markdown(&Local::now())
    }

    pub fn render_markdown(&self, generated_at: &DateTime<Local>) -> String {
        let mut md = String::new();
        let champion = self.get_champion().unwrap_or("None");

        md.push_str(&format!("# {}\n\n", self.context.tournament_name));
        md.push_str(&format!("**Generated:** {}\n\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
        md.push_str(&format!("**Champion:** {champion}\n\n"));

        md.push_str("## Recipes\n\n");
        for recipe in &self.recipes {
            let a = &recipe.attributes;
            md.push_str(&format!("### {}\n", recipe.name));
            md.push_str(&format!("- **Taste:** {:.1}\n", a.taste));
            md.push_str(&format!("- **Presentation:** {:.1}\n", a.presentation));
            md.push_str(&format!("- **Creativity:** {:.1}\n", a.creativity));
            md.push_str(&format!("- **Aroma:** {:.1}\n", a.aroma));
            md.push_str(&format!("- **Texture:** {:.1}\n\n", a.texture));
        }

        md.push_str("## Tournament Matches\n\n");
        let mut current_round = None;
        for m in &self.matches {
            if current_round != Some(m.round) {
                current_round = Some(m.round);
                md.push_str(&format!("### {}\n\n", m.round));
            }

            md.push_str(&format!("**Match {}:** {} vs {}\n", m.match_number, m.recipe1, m.recipe2));
            md.push_str(&format!("- Votes: {} - {}\n", m.recipe1_votes, m.recipe2_votes));
            md.push_str(&format!("- **Winner:** {} (margin: {})\n\n", m.winner, m.margin));
        }

        md
    }
}

pub fn output_report(tournament: &Tournament) {
    println!("|{0:>3} | {1:32} | {2:>5} | {3:>5} | {4:>5} | {5:>5} | {6:>5}",
        "id", "Recipe", "Taste", "Pres.", "Crea.", "Aroma", "Text.");

    for r in &tournament.recipes {
        let a = &r.attributes;
        println!("|{0:3} | {1:32} | {2:5.1} | {3:5.1} | {4:5.1} | {5:5.1} | {6:5.1}",
            r.id, r.name, a.taste, a.presentation, a.creativity, a.aroma, a.texture);
    }

    println!();
    for m in &tournament.matches {
        println!("{0:13} #{1} | {2:32} {3:3} - {4:<3} {5:32} | margin {6:3}",
            m.round.name(), m.match_number, m.recipe1, m.recipe1_votes, m.recipe2_votes, m.recipe2, m.margin);
    }

    println!();
    println!("Champion: {}", tournament.get_champion().unwrap_or("None"));
}

pub fn output_chart_summary(viz: &VisualizationData) {
    print!("{}", chart_summary(viz));
}

pub fn chart_summary(viz: &VisualizationData) -> String {
    let mut out = String::new();
    out.push_str(&format!("Sankey: {} nodes, {} links\n", viz.sankey.nodes.len(), viz.sankey.links.len()));

    // The champion's last match is the final
    if let Some(last) = viz.champion_journey.matches.last() {
        out.push_str(&format!("Final: {} ({} votes) beat {} ({} votes), margin {}\n",
            last.winner, last.winner_votes, last.loser, last.loser_votes, last.margin));
    }

    out.push('\n');
    for (round, totals) in &viz.round_totals {
        out.push_str(&format!("{0:13} | matches {1:2} | winner votes {2:4} | loser votes {3:4} | total {4:4}\n",
            round.name(), totals.matches, totals.winner_votes, totals.loser_votes, totals.winner_votes + totals.loser_votes));
    }

    out.push('\n');
    for (round, stats) in &viz.competitiveness {
        out.push_str(&format!("{0:13} | avg margin {1:5.1} | closest {2:3} | biggest blowout {3:3}\n",
            round.name(), stats.average_margin, stats.min_margin, stats.max_margin));
    }

    out.push_str("\nFinalists:\n");
    for r in &viz.finalist_recipes {
        out.push_str(&format!("  {0:32} average {1:4.2}\n", r.name, r.attributes.average()));
    }

    let journey = &viz.champion_journey;
    out.push_str(&format!("\nChampion's journey: {}\n", journey.champion));
    for (i, step) in journey.steps.iter().enumerate() {
        out.push_str(&format!("  {0}. {1}: vs {2} | {3}-{4} (margin: {5})\n",
            i + 1, step.round, step.opponent, step.votes, step.opponent_votes, step.votes.abs_diff(step.opponent_votes)));
    }

    out.push_str("Attributes:\n");
    for (label, value) in ATTRIBUTE_LABELS.iter().zip(journey.attributes.values()) {
        out.push_str(&format!("  {label}: {value:.1}/10\n"));
    }

    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
