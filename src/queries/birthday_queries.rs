use chrono::Datelike;

use crate::error::FamilyResult;
use crate::model::Person;
use crate::store::FamilyTree;
use crate::validation;

/// Members born in `month` (1-12), in registration order. Members without
/// a birth date are skipped.
pub fn birthdays_in_month(tree: &FamilyTree, month: u32) -> FamilyResult<Vec<&Person>> {
    let month = validation::month(month)?;
    Ok(tree
        .members()
        .filter(|p| p.birth_date.is_some_and(|d| d.month() == month))
        .collect())
}
