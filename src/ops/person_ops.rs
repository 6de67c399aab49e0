use crate::error::{FamilyError, FamilyResult};
use crate::model::{parse_optional_date, Gender, Id, Person};
use crate::store::FamilyTree;
use crate::validation::{self, trim_optional};

/// Creates a living person node. The node is not a registry member until
/// passed to `registry_ops::add_person`.
pub fn create_person(
    tree: &mut FamilyTree,
    name: &str,
    gender: Gender,
    birth_date: Option<&str>,
) -> FamilyResult<Id<Person>> {
    let valid_name = validation::non_blank(name, "name")?;

    let mut person = Person::create(valid_name, gender);
    person.birth_date = parse_optional_date(birth_date)?;

    log::debug!("created {} ({})", person.name, person.id.short());
    tree.people.insert(person)
}

pub fn create_deceased_person(
    tree: &mut FamilyTree,
    name: &str,
    gender: Gender,
    birth_date: Option<&str>,
    death_date: Option<&str>,
) -> FamilyResult<Id<Person>> {
    let valid_name = validation::non_blank(name, "name")?;
    let birth = parse_optional_date(birth_date)?;
    let death = parse_optional_date(death_date)?;

    if let (Some(b), Some(d)) = (birth, death) {
        if d < b {
            return Err(FamilyError::DeathBeforeBirth { name: valid_name });
        }
    }

    let mut person = Person::create_deceased(valid_name, gender, death);
    person.birth_date = birth;

    log::debug!("created deceased {} ({})", person.name, person.id.short());
    tree.people.insert(person)
}

/// Sets or clears the school grade shown in child details.
pub fn set_grade(
    tree: &mut FamilyTree,
    person_id: Id<Person>,
    grade: Option<&str>,
) -> FamilyResult<()> {
    let person = tree.people.require_mut(person_id)?;
    person.grade = trim_optional(grade);
    Ok(())
}
