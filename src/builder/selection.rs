use super::core::{Column, Item};
use super::rules::SelectionRule;
use crate::generator::GenerateError;
use rand::seq::SliceRandom;
use rand::Rng;

/// An item picked from a column, tagged with the owning column's id so that
/// assembly can keep the canonical template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub item: Item,
    pub column_id: u32,
}

/// Choose the ordered subset of columns a sentence will be built from.
///
/// Required columns are always taken; optional ones are shuffled and added
/// up to the rule's budget. Note that the `max_columns` truncation runs
/// before the final id sort, so when the required columns alone exceed
/// `max_columns` the truncation drops whichever columns happen to sit at
/// the tail of the working order. That matches the historical behavior and
/// is kept deliberately.
pub fn select_columns<'a>(
    columns: &'a [Column],
    rule: &SelectionRule,
    rng: &mut impl Rng,
) -> Vec<&'a Column> {
    let available: Vec<&Column> = columns
        .iter()
        .filter(|col| !rule.exclude_complexity.contains(&col.complexity))
        .collect();

    let (required, optional): (Vec<&Column>, Vec<&Column>) =
        available.into_iter().partition(|col| !col.optional);

    let mut selected = required;

    let num_optional_to_add = rule
        .optional_columns_max
        .min(optional.len())
        .min(rule.max_columns.saturating_sub(selected.len()));

    if num_optional_to_add > 0 {
        let shuffled_optional = shuffled(&optional, rng);
        selected.extend(shuffled_optional.into_iter().take(num_optional_to_add));
    }

    if selected.len() > rule.max_columns {
        selected.truncate(rule.max_columns);
    }

    selected.sort_by_key(|col| col.id);

    selected
}

/// Pick one item uniformly at random from each selected column. A column
/// with no items is malformed builder data and surfaces as an error rather
/// than a degraded sentence.
pub fn pick_items(
    columns: &[&Column],
    rng: &mut impl Rng,
) -> Result<Vec<SelectedItem>, GenerateError> {
    columns
        .iter()
        .map(|column| {
            let item = column
                .items
                .choose(rng)
                .ok_or(GenerateError::EmptyColumn(column.id))?;
            Ok(SelectedItem {
                item: item.clone(),
                column_id: column.id,
            })
        })
        .collect()
}

/// Fisher-Yates shuffle on a copy; the caller's slice is left untouched.
pub fn shuffled<T: Clone>(input: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut copy = input.to_vec();
    copy.shuffle(rng);
    copy
}
