//! Full-pipeline tests: built-in ruleset over realistic screen sources.

use std::path::Path;

use anyhow::Result;
use recompose_codemod::{MigrateReport, Ruleset, run_passes};

const LIFE_PATH_CARD: &str = r#"@Composable
private fun LifePathCard(overview: PredictionOverview) {
    Card(
        modifier = Modifier
            .fillMaxWidth()
            .padding(horizontal = 16.dp, vertical = 8.dp),
        colors = CardDefaults.cardColors(containerColor = AppTheme.CardBackground),
        shape = RoundedCornerShape(com.astro.storm.ui.theme.NeoVedicTokens.ElementCornerRadius)
    ) {
        Column(modifier = Modifier.padding(16.dp)) {
            Text(
                overview.lifeTheme,
                style = MaterialTheme.typography.titleMedium,
                color = AppTheme.TextPrimary
            )
            Text(
                overview.overallPath,
                fontFamily = PoppinsFontFamily,
                style = MaterialTheme.typography.bodyMedium,
                color = AppTheme.TextSecondary
            )
        }
    }
}
"#;

const EMPTY_STATE: &str = r#"@Composable
private fun EmptyPredictionsState(modifier: Modifier = Modifier) {
    val language = currentLanguage()

    Box(
        modifier = modifier.fillMaxSize(),
        contentAlignment = Alignment.Center
    ) {
        Column(horizontalAlignment = Alignment.CenterHorizontally) {
            Icon(
                Icons.Outlined.InsertChart,
                contentDescription = null,
                tint = AppTheme.TextSubtle,
                modifier = Modifier.size(64.dp)
            )
            Spacer(modifier = Modifier.height(16.dp))
            Text(
                StringResources.get(StringKey.PREDICTIONS_NO_CHART_SELECTED, language),
                style = MaterialTheme.typography.titleMedium,
                color = AppTheme.TextMuted
            )
            Text(
                StringResources.get(StringKey.PREDICTIONS_SELECT_CHART_MESSAGE, language),
                style = MaterialTheme.typography.bodyMedium,
                color = AppTheme.TextSubtle
            )
        }
    }
}
"#;

fn migrate(content: &str) -> (Option<String>, MigrateReport) {
    let passes = Ruleset::builtin().passes();
    let mut report = MigrateReport::default();
    let updated = run_passes(&passes, Path::new("Screen.kt"), content, &mut report).unwrap();
    (updated, report)
}

#[test]
fn test_card_becomes_bordered_surface() {
    let (updated, report) = migrate(LIFE_PATH_CARD);
    let updated = updated.unwrap();

    assert!(updated.contains("    Surface("));
    assert!(updated.contains(".vedicCornerMarkers(color = AppTheme.AccentPrimary)"));
    assert!(updated.contains("NeoVedicTokens.CardCornerRadius"));
    assert!(updated.contains("shadowElevation = 0.dp"));
    assert!(!updated.contains("    Card("));
    assert!(!updated.contains("CardDefaults"));
    assert!(!updated.contains("ElementCornerRadius"));
    assert_eq!(report.replacements(), 1);
}

#[test]
fn test_styled_text_gains_font_family_with_indentation() {
    let (updated, report) = migrate(LIFE_PATH_CARD);
    let updated = updated.unwrap();

    // titleMedium classifies as decorative; inserted on its own line with
    // the style argument's indentation
    assert!(
        updated
            .contains("fontFamily = CinzelDecorativeFamily,\n                style = MaterialTheme.typography.titleMedium")
    );
    assert_eq!(report.injections, 1);
}

#[test]
fn test_text_with_font_family_is_not_touched_again() {
    let (updated, _) = migrate(LIFE_PATH_CARD);
    let updated = updated.unwrap();

    // The bodyMedium Text already declares a family and keeps exactly one
    assert_eq!(updated.matches("fontFamily = PoppinsFontFamily").count(), 1);
}

#[test]
fn test_empty_state_collapses_to_shared_component() {
    let (updated, report) = migrate(EMPTY_STATE);
    let updated = updated.unwrap();

    assert!(updated.contains("NeoVedicEmptyState("));
    assert!(updated.contains("subtitle = StringResources.get(StringKey.PREDICTIONS_SELECT_CHART_MESSAGE, language)"));
    assert!(!updated.contains("Box("));
    assert!(!updated.contains("Spacer"));
    // The scaffold's two Text declarations went away with it, so the
    // injector has nothing left to do here
    assert_eq!(report.injections, 0);
}

#[test]
fn test_first_bounded_rules_claim_successive_occurrences() {
    let one_card = &LIFE_PATH_CARD[LIFE_PATH_CARD.find("    Card(").unwrap()..];
    let three_cards = format!("{one_card}\n{one_card}\n{one_card}");
    let (updated, report) = migrate(&three_cards);
    let updated = updated.unwrap();

    // Two featured-card rules add markers; the catch-all converts the rest
    assert_eq!(updated.matches("vedicCornerMarkers").count(), 2);
    assert_eq!(updated.matches("Surface(").count(), 3);
    assert!(!updated.contains("Card("));
    assert_eq!(report.replacements(), 3);
}

#[test]
fn test_unmatched_rules_are_recorded_as_skips() {
    let (_, report) = migrate(LIFE_PATH_CARD);
    let skipped: Vec<_> = report.skipped_rules().map(|o| o.rule.as_str()).collect();
    assert!(skipped.contains(&"empty-state"));
    assert!(skipped.contains(&"life-area-detail-card"));
    assert!(!skipped.contains(&"life-path-card"));
}

#[test]
fn test_migration_is_idempotent() {
    let (updated, _) = migrate(LIFE_PATH_CARD);
    let once = updated.unwrap();

    let (again, report) = migrate(&once);
    assert!(again.is_none(), "second run must be a no-op");
    assert_eq!(report.replacements(), 0);
    assert_eq!(report.injections, 0);
}

#[test]
fn test_formatting_drift_still_migrates() -> Result<()> {
    // Same card block, reformatted: different line breaks and spacing
    let drifted = r#"Card(
        modifier = Modifier.fillMaxWidth().padding(horizontal = 16.dp, vertical = 8.dp),
        colors = CardDefaults.cardColors(containerColor = AppTheme.CardBackground),
        shape = RoundedCornerShape(
            com.astro.storm.ui.theme.NeoVedicTokens.ElementCornerRadius
        )
    ) {
        Text(t)
    }
"#;
    let (updated, report) = migrate(drifted);
    let updated = updated.unwrap();
    assert!(updated.starts_with("Surface("));
    assert_eq!(report.replacements(), 1);
    Ok(())
}

#[test]
fn test_unrelated_source_passes_through_unchanged() {
    let content = "fun main() {\n    println(\"hello\")\n}\n";
    let (updated, report) = migrate(content);
    assert!(updated.is_none());
    assert_eq!(report.replacements(), 0);
    assert_eq!(report.ambiguous_spans, 0);
}
