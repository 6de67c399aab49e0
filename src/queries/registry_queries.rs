use crate::model::{Id, Person};
use crate::store::FamilyTree;

pub fn get_person<'a>(tree: &'a FamilyTree, name: &str) -> Option<&'a Person> {
    tree.registry
        .find_by_name(name)
        .and_then(|id| tree.people.find_by_id(id))
}

pub fn find_id(tree: &FamilyTree, name: &str) -> Option<Id<Person>> {
    tree.registry.find_by_name(name)
}

pub fn list_members(tree: &FamilyTree) -> Vec<&Person> {
    tree.members().collect()
}

pub fn member_count(tree: &FamilyTree) -> usize {
    tree.registry.len()
}
