use crate::error::FamilyResult;
use crate::model::{format_date, ExtendedFamily, Gender, Grandparents, Id, ImmediateFamily, Person};
use crate::store::FamilyTree;

pub fn immediate_family(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<ImmediateFamily> {
    let person = tree.people.require(person_id)?;
    Ok(ImmediateFamily {
        parents: tree.people.names_of(&person.parents()),
        siblings: tree.people.names_of(person.siblings()),
        partner: person.partner().map(|id| tree.people.name_of(id)),
        children: child_names(tree, person_id)?,
    })
}

/// Aunts, uncles and cousins through each parent's siblings. The mother's
/// side comes first. Siblings of `Other` gender contribute cousins only.
/// Nothing is de-duplicated.
pub fn extended_family(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<ExtendedFamily> {
    let person = tree.people.require(person_id)?;
    let mut family = ExtendedFamily::default();

    for parent_id in person.parents() {
        let parent = tree.people.require(parent_id)?;
        for sibling_id in parent.siblings() {
            let sibling = tree.people.require(*sibling_id)?;
            match sibling.gender {
                Gender::Female => family.aunts.push(sibling.name.clone()),
                Gender::Male => family.uncles.push(sibling.name.clone()),
                Gender::Other => {}
            }
            family
                .cousins
                .extend(tree.people.names_of(sibling.children()));
        }
    }

    Ok(family)
}

/// Parents of each parent, grouped by the side they are reached through.
/// Parents of `Other` gender feed the `other` list, in link order.
pub fn grandparents(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<Grandparents> {
    let person = tree.people.require(person_id)?;
    let parents_of = |id: Id<Person>| -> FamilyResult<Vec<String>> {
        Ok(tree.people.names_of(&tree.people.require(id)?.parents()))
    };

    let mut other = Vec::new();
    for parent_id in person.other_parents() {
        other.extend(parents_of(*parent_id)?);
    }

    Ok(Grandparents {
        maternal: person.mother().map(&parents_of).transpose()?.unwrap_or_default(),
        paternal: person.father().map(&parents_of).transpose()?.unwrap_or_default(),
        other,
    })
}

/// Names of past partners, oldest first.
pub fn past_partners(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<Vec<String>> {
    let person = tree.people.require(person_id)?;
    Ok(tree.people.names_of(person.past_partners()))
}

pub fn number_of_children(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<usize> {
    Ok(tree.people.require(person_id)?.children().len())
}

pub fn child_names(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<Vec<String>> {
    let person = tree.people.require(person_id)?;
    Ok(tree.people.names_of(person.children()))
}

/// One-line summary: gender, partner status, children, parents, siblings.
pub fn full_details(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<String> {
    let person = tree.people.require(person_id)?;
    let mut details = format!("Name: {}, Gender: {}", person.name, person.gender);

    match person.partner() {
        Some(partner) => details.push_str(&format!(", Partner: {}", tree.people.name_of(partner))),
        None if !person.past_partners().is_empty() => details.push_str(&format!(
            ", Currently single. Previously with: {}",
            tree.people.names_of(person.past_partners()).join(", ")
        )),
        None => details.push_str(", Currently single with no past partners"),
    }

    if !person.children().is_empty() {
        details.push_str(&format!(
            ", Children: {}",
            tree.people.names_of(person.children()).join(", ")
        ));
    }

    let mut parents = Vec::new();
    if let Some(mother) = person.mother() {
        parents.push(format!("Mother: {}", tree.people.name_of(mother)));
    }
    if let Some(father) = person.father() {
        parents.push(format!("Father: {}", tree.people.name_of(father)));
    }
    for other in person.other_parents() {
        parents.push(format!("Parent: {}", tree.people.name_of(*other)));
    }
    if !parents.is_empty() {
        details.push_str(&format!(", Parents: {}", parents.join(", ")));
    }

    if !person.siblings().is_empty() {
        details.push_str(&format!(
            ", Siblings: {}",
            tree.people.names_of(person.siblings()).join(", ")
        ));
    }

    Ok(details)
}

/// Name, gender, grade and birth date, as shown for a child. The grade is
/// always present, as `none` when unset.
pub fn child_details(tree: &FamilyTree, person_id: Id<Person>) -> FamilyResult<String> {
    let person = tree.people.require(person_id)?;
    let mut details = format!(
        "Name: {}, Gender: {}, Grade: {}",
        person.name,
        person.gender,
        person.grade.as_deref().unwrap_or("none")
    );
    if let Some(birth) = person.birth_date {
        details.push_str(&format!(", Birth Date: {}", format_date(birth)));
    }
    Ok(details)
}
