use crate::error::FamilyResult;
use crate::model::{Id, Person};
use crate::store::FamilyTree;

/// Registers an existing node as a member of the family, keyed by its
/// name. Fails if the id is unknown or the name is already taken.
pub fn add_person(tree: &mut FamilyTree, person_id: Id<Person>) -> FamilyResult<()> {
    let name = tree.people.require(person_id)?.name.clone();
    tree.registry.insert(&name, person_id)?;
    log::debug!("registered {} ({})", name, person_id.short());
    Ok(())
}
