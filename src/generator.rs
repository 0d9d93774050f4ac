use crate::builder::{formatter, grammar, selection, SelectedItem, Template};
use rand::Rng;
use std::fmt;

/// A finished bilingual pair: both sides are complete, capitalized,
/// punctuated sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSentence {
    pub french: String,
    pub english: String,
}

#[derive(Debug)]
pub enum GenerateError {
    /// The builder has no rule for the requested star level.
    UnknownDifficulty(u8),
    /// A selected column has no items to pick from (malformed builder data).
    EmptyColumn(u32),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnknownDifficulty(level) => {
                write!(f, "no difficulty rule for {level}-star")
            }
            GenerateError::EmptyColumn(id) => {
                write!(f, "column {id} has no items")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

#[derive(Clone, Copy)]
enum Side {
    French,
    English,
}

/// Assembles random bilingual sentence pairs from a loaded builder template.
/// Stateless per call: every generation starts from the full template.
#[derive(Debug)]
pub struct SentenceGenerator {
    template: Template,
}

impl SentenceGenerator {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    pub fn title(&self) -> &str {
        &self.template.title
    }

    /// Generate one sentence pair at the given star level.
    pub fn sentence(&self, difficulty: u8) -> Result<GeneratedSentence, GenerateError> {
        self.sentence_with(difficulty, &mut rand::thread_rng())
    }

    /// Like [`Self::sentence`], but with a caller-supplied rng so tests can
    /// seed the whole pipeline deterministically.
    pub fn sentence_with(
        &self,
        difficulty: u8,
        rng: &mut impl Rng,
    ) -> Result<GeneratedSentence, GenerateError> {
        let rule = self
            .template
            .rules
            .for_level(difficulty)
            .ok_or(GenerateError::UnknownDifficulty(difficulty))?;

        let columns = selection::select_columns(&self.template.columns, rule, rng);
        let items = selection::pick_items(&columns, rng)?;

        Ok(GeneratedSentence {
            french: build_sentence(&items, Side::French),
            english: build_sentence(&items, Side::English),
        })
    }
}

fn build_sentence(items: &[SelectedItem], side: Side) -> String {
    let mut parts: Vec<String> = items
        .iter()
        .map(|selected| match side {
            Side::French => selected.item.fr.clone(),
            Side::English => selected.item.en.clone(),
        })
        .collect();

    // Grammar fixups only apply to the French side.
    if let Side::French = side {
        parts = grammar::apply_elision(&parts);
    }

    formatter::assemble(&parts)
}
