use serde::Deserialize;
use std::collections::HashMap;

/// Per-difficulty constraints on which and how many columns take part in a
/// sentence. Columns whose complexity tag appears in `exclude_complexity`
/// are never selectable at that level.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRule {
    pub min_columns: usize,
    pub max_columns: usize,
    pub exclude_complexity: Vec<String>,
    pub optional_columns_max: usize,
}

/// Difficulty rules keyed by star level ("1-star", "2-star", "3-star").
#[derive(Deserialize, Clone, Debug)]
pub struct Rules {
    pub difficulty: HashMap<String, SelectionRule>,
}

impl Rules {
    /// Look up the rule for a numeric star level. Missing levels are the
    /// caller's problem; no fallback rule is ever substituted.
    pub fn for_level(&self, level: u8) -> Option<&SelectionRule> {
        self.difficulty.get(&format!("{level}-star"))
    }
}
