use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use recompose_codemod::{MigrateReport, Ruleset, run_passes};
use recompose_ui::prelude::*;
use similar::TextDiff;

use crate::file_walker;

/// Arguments for the `migrate` command
#[derive(Args, Debug, Default, Clone)]
#[command(about = "Apply a migration ruleset to UI source files")]
pub struct MigrateArgs {
    /// One or more .kt files or directories containing .kt files to migrate.
    /// When omitted, all .kt files in the current directory tree are considered.
    #[arg(value_name = "PATHS", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Migration ruleset to apply (TOML). Defaults to the built-in
    /// card-to-surface migration.
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Report files that would change without modifying them.
    /// Exit with non-zero code if any file needs migrating.
    #[arg(long)]
    pub check: bool,

    /// Show diffs instead of writing files
    #[arg(long)]
    pub diff: bool,

    /// Fail when a rule matches nothing or a span is skipped as ambiguous
    #[arg(long)]
    pub strict: bool,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,
}

/// Execute the `migrate` command
pub fn execute(args: MigrateArgs) -> Result<()> {
    let ruleset = match &args.rules {
        Some(path) => Ruleset::load(path)?,
        None => Ruleset::builtin(),
    };
    let passes = ruleset.passes();
    if passes.is_empty() {
        anyhow::bail!("Ruleset has no substitutions and no typography table");
    }
    debug!(
        "Loaded ruleset with {} substitution rule(s)",
        ruleset.substitutions.len()
    );

    let files = file_walker::collect_kotlin_files(&args.paths, args.hidden)?;
    if files.is_empty() {
        anyhow::bail!("No .kt files found in {}", roots_display(&args.paths)?);
    }

    let mut report = MigrateReport::default();
    let mut files_needing_migration = Vec::new();
    let mut has_errors = false;

    for path in &files {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mut spinner = Some(Spinner::builder(format!("{file_name}: Migrating")).start());

        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let updated = match run_passes(&passes, path, &original, &mut report) {
            Ok(Some(updated)) if updated != original => updated,
            Ok(_) => {
                if let Some(sp) = spinner.take() {
                    sp.finish();
                }
                continue;
            }
            Err(e) => {
                if let Some(sp) = spinner.take() {
                    sp.error(format!("{file_name}: {e}"));
                }
                has_errors = true;
                continue;
            }
        };

        if args.diff {
            if let Some(sp) = spinner.take() {
                sp.finish();
            }
            print!("{}", unified_diff(path, &original, &updated));
            files_needing_migration.push(path.clone());
        } else if args.check {
            if let Some(sp) = spinner.take() {
                sp.finish();
            }
            println!(
                "{} {} (needs migration)",
                recompose_ui::icons::warning(),
                file_name.with_style(Style::Yellow).bold()
            );
            files_needing_migration.push(path.clone());
        } else {
            if let Err(e) = fs::write(path, &updated) {
                if let Some(sp) = spinner.take() {
                    sp.error(format!("{file_name}: Failed to write changes: {e}"));
                }
                has_errors = true;
                continue;
            }
            if let Some(sp) = spinner.take() {
                sp.finish();
            }
            eprintln!(
                "{} {}",
                recompose_ui::icons::success(),
                file_name.with_style(Style::Green).bold()
            );
        }
    }

    print_summary(&args, &report);

    if args.check && !files_needing_migration.is_empty() {
        eprintln!(
            "\nRun 'recompose migrate {}' to migrate these files.",
            files_needing_migration
                .iter()
                .map(|p| p.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        anyhow::bail!(
            "{} file(s) need migrating",
            files_needing_migration.len()
        );
    }

    if args.strict && (report.has_skips() || report.ambiguous_spans > 0) {
        for outcome in report.skipped_rules() {
            eprintln!(
                "{} rule '{}' matched nothing",
                recompose_ui::icons::warning(),
                outcome.rule
            );
        }
        anyhow::bail!("Migration incomplete under --strict");
    }

    if has_errors {
        anyhow::bail!("Migrate failed with errors");
    }

    Ok(())
}

fn unified_diff(path: &Path, original: &str, updated: &str) -> String {
    let diff = TextDiff::from_lines(original, updated);
    format!(
        "{}",
        diff.unified_diff().context_radius(3).header(
            &format!("old/{}", path.display()),
            &format!("new/{}", path.display())
        )
    )
}

fn print_summary(args: &MigrateArgs, report: &MigrateReport) {
    if !args.check && !args.diff {
        eprintln!("\n✓ Migration complete");
        eprintln!("  Review changes with: git diff");
    }
    eprintln!(
        "  {} replacement(s), {} font famil{} injected",
        report.replacements(),
        report.injections,
        if report.injections == 1 { "y" } else { "ies" }
    );
    let skipped = report.skipped_rules().count();
    if skipped > 0 {
        eprintln!("  {skipped} rule(s) matched nothing");
    }
    if report.ambiguous_spans > 0 {
        eprintln!(
            "  {} span(s) skipped as ambiguous",
            report.ambiguous_spans
        );
    }
}

fn roots_display(paths: &[PathBuf]) -> Result<String> {
    if paths.is_empty() {
        let cwd = std::env::current_dir()?;
        Ok(cwd.canonicalize().unwrap_or(cwd).display().to_string())
    } else {
        Ok(paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "))
    }
}
