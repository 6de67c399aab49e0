use crate::error::FamilyResult;
use crate::model::{Gender, Id, Person};
use crate::store::FamilyTree;
use crate::validation;

/// Appends `child` to the parent's children and links the parent slot that
/// matches the parent's gender. Repeated calls add repeated entries.
pub fn add_child(
    tree: &mut FamilyTree,
    parent_id: Id<Person>,
    child_id: Id<Person>,
) -> FamilyResult<()> {
    validation::distinct(parent_id, child_id, "child")?;
    tree.people.require(child_id)?;

    let parent = tree.people.require_mut(parent_id)?;
    parent.children.push(child_id);
    let gender = parent.gender;
    let parent_name = parent.name.clone();

    let child = tree.people.require_mut(child_id)?;
    match gender {
        Gender::Male => child.father = Some(parent_id),
        Gender::Female => child.mother = Some(parent_id),
        Gender::Other => {
            log::warn!(
                "{} has no mother/father slot for {}, linking as other parent",
                child.name,
                parent_name
            );
            if !child.other_parents.contains(&parent_id) {
                child.other_parents.push(parent_id);
            }
        }
    }

    log::debug!("{} is now a child of {}", child.name, parent_name);
    Ok(())
}

/// Makes `person` and `partner` each other's current partner in a single
/// update. Whoever either of them was with before is moved to that side's
/// past partners and loses the back-reference.
pub fn set_partner(
    tree: &mut FamilyTree,
    person_id: Id<Person>,
    partner_id: Id<Person>,
) -> FamilyResult<()> {
    validation::distinct(person_id, partner_id, "partner")?;
    tree.people.require(partner_id)?;

    if tree.people.require(person_id)?.partner == Some(partner_id) {
        return Ok(());
    }

    detach_partner(tree, person_id)?;
    detach_partner(tree, partner_id)?;

    tree.people.require_mut(person_id)?.partner = Some(partner_id);
    tree.people.require_mut(partner_id)?.partner = Some(person_id);

    log::debug!(
        "{} and {} are now partners",
        tree.people.name_of(person_id),
        tree.people.name_of(partner_id)
    );
    Ok(())
}

fn detach_partner(tree: &mut FamilyTree, person_id: Id<Person>) -> FamilyResult<()> {
    let person = tree.people.require_mut(person_id)?;
    let Some(old_id) = person.partner.take() else {
        return Ok(());
    };
    if !person.past_partners.contains(&old_id) {
        person.past_partners.push(old_id);
    }

    let old = tree.people.require_mut(old_id)?;
    if old.partner == Some(person_id) {
        old.partner = None;
    }
    Ok(())
}

/// Links two people as siblings on both sides. Linking an existing pair
/// again changes nothing.
pub fn add_sibling(
    tree: &mut FamilyTree,
    person_id: Id<Person>,
    sibling_id: Id<Person>,
) -> FamilyResult<()> {
    validation::distinct(person_id, sibling_id, "sibling")?;
    tree.people.require(sibling_id)?;

    let person = tree.people.require_mut(person_id)?;
    if person.siblings.contains(&sibling_id) {
        return Ok(());
    }
    person.siblings.push(sibling_id);

    let sibling = tree.people.require_mut(sibling_id)?;
    if !sibling.siblings.contains(&person_id) {
        sibling.siblings.push(person_id);
    }

    log::debug!(
        "{} and {} are now siblings",
        tree.people.name_of(person_id),
        tree.people.name_of(sibling_id)
    );
    Ok(())
}
