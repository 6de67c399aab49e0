use serde::Serialize;

use crate::store::FamilyTree;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyStats {
    pub members: usize,
    pub living: usize,
    pub deceased: usize,
    /// Sum of every member's children count; a child of two members counts twice.
    pub total_children: usize,
    pub average_children: Option<f64>,
    pub average_age_at_death: Option<f64>,
}

pub fn stats(tree: &FamilyTree) -> FamilyStats {
    let deceased = tree.members().filter(|p| p.is_deceased()).count();
    let members = tree.registry.len();

    FamilyStats {
        members,
        living: members - deceased,
        deceased,
        total_children: total_number_of_children(tree),
        average_children: average_number_of_children(tree),
        average_age_at_death: average_age_at_death(tree),
    }
}

/// Mean age at death over deceased members whose age can be computed.
/// `None` when no member contributes.
pub fn average_age_at_death(tree: &FamilyTree) -> Option<f64> {
    let ages: Vec<i32> = tree
        .members()
        .filter_map(|p| p.age_at_death())
        .collect();

    if ages.is_empty() {
        return None;
    }
    let total: i64 = ages.iter().map(|a| i64::from(*a)).sum();
    Some(total as f64 / ages.len() as f64)
}

pub fn total_number_of_children(tree: &FamilyTree) -> usize {
    tree.members().map(|p| p.children().len()).sum()
}

pub fn average_number_of_children(tree: &FamilyTree) -> Option<f64> {
    let members = tree.registry.len();
    if members == 0 {
        return None;
    }
    Some(total_number_of_children(tree) as f64 / members as f64)
}
