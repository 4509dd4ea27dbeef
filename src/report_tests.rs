use super::*;
use chrono::TimeZone;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_markdown_layout() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tournament = Tournament::default();
    tournament.run_tournament(&mut rng).unwrap();

    let generated_at = Local.with_ymd_and_hms(2025, 12, 1, 18, 30, 0).unwrap();
    let md = tournament.render_markdown(&generated_at);
    let champion = tournament.get_champion().unwrap();

    assert!(md.starts_with("# Synthetic Hot Cocoa Championship 2025\n\n"));
    assert!(md.contains("**Generated:** 2025-12-01 18:30:00\n"));
    assert!(md.contains(&format!("**Champion:** {champion}\n")));

    for r in &tournament.recipes {
        assert!(md.contains(&format!("### {}\n- **Taste:** {:.1}\n", r.name, r.attributes.taste)));
    }

    let positions: Vec<usize> = ["## Recipes", "## Tournament Matches", "### Round of 16", "### Quarterfinals", "### Semifinals", "### Finals"]
        .iter()
        .map(|h| md.find(h).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(md.matches("**Match ").count(), 15);

    let last = tournament.matches.last().unwrap();
    assert!(md.contains(&format!("- **Winner:** {} (margin: {})", last.winner, last.margin)));
}

#[test]
fn test_markdown_without_matches() {
    let md = Tournament::default().export_markdown();

    assert!(md.contains("**Champion:** None"));
    assert!(!md.contains("### Round of 16"));
}

#[test]
fn test_chart_summary_lists_champion_attributes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tournament = Tournament::default();
    tournament.run_tournament(&mut rng).unwrap();

    let data = tournament.export_data();
    let viz = crate::charts::build_visualizations(&data).unwrap();
    let summary = chart_summary(&viz);

    let a = data.recipe(data.champion.as_deref().unwrap()).unwrap().attributes;
    let journey_at = summary.find("Champion's journey:").unwrap();
    let attributes_at = summary.find("Attributes:\n").unwrap();
    assert!(journey_at < attributes_at);

    assert!(summary.contains(&format!("  Taste: {:.1}/10\n", a.taste)));
    assert!(summary.contains(&format!("  Presentation: {:.1}/10\n", a.presentation)));
    assert!(summary.contains(&format!("  Creativity: {:.1}/10\n", a.creativity)));
    assert!(summary.contains(&format!("  Aroma: {:.1}/10\n", a.aroma)));
    assert!(summary.contains(&format!("  Texture: {:.1}/10\n", a.texture)));
}
