//! The riddle catalog: an ordered, read-only collection of riddle sets.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::riddle::{RiddleId, RiddleSet, is_typable};

/// Most answer options a riddle may have; each one is picked with a single digit key.
pub const MAX_OPTIONS: usize = 9;

/// Catalog shipped with the game.
const BUILTIN_CATALOG: &str = include_str!("../data/riddles.json");

/// A problem found while validating riddle sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    /// The riddle set the issue belongs to, if it is specific to one.
    pub id: Option<RiddleId>,
    /// A human-readable description of the issue.
    pub message: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "riddle {id}: {}", self.message),
            None => write!(f, "catalog: {}", self.message),
        }
    }
}

impl CatalogIssue {
    fn riddle(id: RiddleId, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: message.into(),
        }
    }

    fn into_error(self) -> CoreError {
        match self.id {
            Some(id) => CoreError::InvalidRiddle {
                id,
                reason: self.message,
            },
            None => CoreError::EmptyCatalog,
        }
    }
}

/// An ordered, validated collection of riddle sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    sets: Vec<RiddleSet>,
}

impl Catalog {
    /// Build a catalog from riddle sets, failing on the first invalid one.
    pub fn new(sets: Vec<RiddleSet>) -> CoreResult<Self> {
        if sets.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for set in &sets {
            if !seen.insert(set.id) {
                return Err(CoreError::DuplicateId(set.id));
            }
        }

        if let Some(issue) = validate_sets(&sets).into_iter().next() {
            return Err(issue.into_error());
        }

        tracing::debug!(sets = sets.len(), "catalog loaded");
        Ok(Self { sets })
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let sets: Vec<RiddleSet> = serde_json::from_str(json)?;
        Self::new(sets)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the game.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Number of riddle sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the catalog has no riddle sets. Always false for a loaded catalog.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Look up a riddle set by id.
    pub fn get(&self, id: RiddleId) -> Option<&RiddleSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Get the riddle set at a position in catalog order.
    pub fn by_index(&self, index: usize) -> Option<&RiddleSet> {
        self.sets.get(index)
    }

    /// Iterate riddle sets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RiddleSet> {
        self.sets.iter()
    }

    /// All ids, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = RiddleId> + '_ {
        self.sets.iter().map(|s| s.id)
    }
}

/// Validate riddle sets and return every issue found.
///
/// An empty result means the sets form a valid catalog.
pub fn validate_sets(sets: &[RiddleSet]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if sets.is_empty() {
        issues.push(CatalogIssue {
            id: None,
            message: "no riddle sets defined".to_string(),
        });
        return issues;
    }

    let mut seen = HashSet::new();
    for set in sets {
        if !seen.insert(set.id) {
            issues.push(CatalogIssue::riddle(set.id, "duplicate id"));
        }
        validate_set(set, &mut issues);
    }

    issues
}

fn validate_set(set: &RiddleSet, issues: &mut Vec<CatalogIssue>) {
    if set.words.is_empty() {
        issues.push(CatalogIssue::riddle(set.id, "no words defined"));
    }

    for (i, word) in set.words.iter().enumerate() {
        if word.is_empty() {
            issues.push(CatalogIssue::riddle(set.id, format!("word {} is empty", i + 1)));
        } else if let Some(bad) = word.chars().find(|c| !is_typable(*c)) {
            issues.push(CatalogIssue::riddle(
                set.id,
                format!("word '{word}' contains untypable character '{bad}'"),
            ));
        }
    }

    if set.question.trim().is_empty() {
        issues.push(CatalogIssue::riddle(set.id, "question is empty"));
    }

    if set.options.is_empty() {
        issues.push(CatalogIssue::riddle(set.id, "no options defined"));
        return;
    }
    if set.options.len() > MAX_OPTIONS {
        issues.push(CatalogIssue::riddle(
            set.id,
            format!(
                "{} options defined, at most {MAX_OPTIONS} allowed",
                set.options.len()
            ),
        ));
    }
    if set.correct_answer >= set.options.len() {
        issues.push(CatalogIssue::riddle(
            set.id,
            format!(
                "correct answer {} is out of range for {} options",
                set.correct_answer,
                set.options.len()
            ),
        ));
    }
}
