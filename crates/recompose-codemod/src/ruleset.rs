//! Loadable migration rulesets.
//!
//! A ruleset is plain data: an ordered list of `[[substitution]]` tables and
//! an optional `[typography]` family table, in TOML. New migrations are
//! authored as ruleset files without touching the engine.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::subst::SubstitutionRule;
use crate::typography::TypographyConfig;
use crate::{BlockSubstitutions, Codemod, TypographyInjection};

/// The ruleset shipped with the tool, same schema as `--rules` files.
const BUILTIN: &str = include_str!("../rulesets/neovedic.toml");

/// An ordered migration: block substitutions first, then typography
/// injection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ruleset {
    /// Applied in declaration order, each over the previous rule's output
    #[serde(default, rename = "substitution")]
    pub substitutions: Vec<SubstitutionRule>,
    /// Present when the ruleset wants the typography injection pass
    #[serde(default)]
    pub typography: Option<TypographyConfig>,
}

impl Ruleset {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse ruleset")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ruleset {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("Invalid ruleset {}", path.display()))
    }

    /// The default card-to-surface redesign migration.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN).expect("built-in ruleset is valid TOML")
    }

    /// Build the ordered codemod passes this ruleset describes.
    pub fn passes(&self) -> Vec<Box<dyn Codemod>> {
        let mut passes: Vec<Box<dyn Codemod>> = Vec::new();
        if !self.substitutions.is_empty() {
            passes.push(Box::new(BlockSubstitutions::new(self.substitutions.clone())));
        }
        if let Some(typography) = &self.typography {
            passes.push(Box::new(TypographyInjection::new(typography.clone())));
        }
        passes
    }
}
