use super::rules::Rules;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::fmt;

static BUILDER_DIR: Dir = include_dir!("src/builders");

/// A full sentence builder: ordered columns of bilingual items plus the
/// per-difficulty selection rules. Loaded once and read-only afterwards.
#[derive(Deserialize, Clone, Debug)]
pub struct Template {
    pub title: String,
    pub columns: Vec<Column>,
    pub rules: Rules,
}

/// One slot of the sentence (subject, verb, ...). `id` defines the canonical
/// left-to-right order of the finished sentence.
#[derive(Deserialize, Clone, Debug)]
pub struct Column {
    pub id: u32,
    pub optional: bool,
    pub complexity: String,
    pub items: Vec<Item>,
}

/// One bilingual lexical choice for a column.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub fr: String,
    pub en: String,
}

#[derive(Debug)]
pub enum LoadError {
    NotFound(String),
    Utf8(String),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(name) => write!(f, "builder file not found: {name}"),
            LoadError::Utf8(name) => write!(f, "builder file is not valid utf-8: {name}"),
            LoadError::Parse(err) => write!(f, "unable to parse builder json: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

impl Template {
    pub fn load(name: &str) -> Result<Self, LoadError> {
        read_template_from_file(&format!("{name}.json"))
    }
}

fn read_template_from_file(file_name: &str) -> Result<Template, LoadError> {
    let file = BUILDER_DIR
        .get_file(file_name)
        .ok_or_else(|| LoadError::NotFound(file_name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| LoadError::Utf8(file_name.to_string()))?;

    let template = from_str(file_as_str)?;

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_template_load_opinions() {
        let template = Template::load("opinions").unwrap();

        assert_eq!(template.title, "Giving opinions");
        assert!(!template.columns.is_empty());
        assert!(template.rules.for_level(1).is_some());
        assert!(template.rules.for_level(3).is_some());
    }

    #[test]
    fn test_template_load_routine() {
        let template = Template::load("routine").unwrap();

        assert_eq!(template.title, "Daily routine");
        assert!(template.columns.iter().any(|c| c.optional));
        assert!(template.columns.iter().any(|c| !c.optional));
    }

    #[test]
    fn test_column_ids_are_unique() {
        for name in ["opinions", "routine"] {
            let template = Template::load(name).unwrap();
            let mut ids: Vec<u32> = template.columns.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), template.columns.len(), "duplicate ids in {name}");
        }
    }

    #[test]
    fn test_rule_invariants_hold_in_shipped_builders() {
        for name in ["opinions", "routine"] {
            let template = Template::load(name).unwrap();
            for level in 1..=3u8 {
                let rule = template.rules.for_level(level).unwrap();
                assert!(
                    rule.min_columns <= rule.max_columns,
                    "min/max inverted in {name} at {level}-star"
                );
            }
        }
    }

    #[test]
    fn test_no_column_ships_empty() {
        for name in ["opinions", "routine"] {
            let template = Template::load(name).unwrap();
            for column in &template.columns {
                assert!(!column.items.is_empty(), "empty column {} in {name}", column.id);
            }
        }
    }

    #[test]
    fn test_template_deserialization() {
        let json_data = r#"
        {
            "title": "test",
            "columns": [
                {
                    "id": 1,
                    "optional": false,
                    "complexity": "basic",
                    "items": [{ "fr": "je", "en": "I" }]
                }
            ],
            "rules": {
                "difficulty": {
                    "1-star": {
                        "minColumns": 1,
                        "maxColumns": 1,
                        "excludeComplexity": [],
                        "optionalColumnsMax": 0
                    }
                }
            }
        }
        "#;

        let template: Template = from_str(json_data).expect("failed to deserialize template");

        assert_eq!(template.title, "test");
        assert_eq!(template.columns.len(), 1);
        assert_eq!(template.columns[0].items[0].fr, "je");
        assert_eq!(template.rules.for_level(1).unwrap().max_columns, 1);
    }

    #[test]
    fn test_load_nonexistent_builder() {
        let result = Template::load("nonexistent");
        assert_matches!(result, Err(LoadError::NotFound(_)));
    }
}
