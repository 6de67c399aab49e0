//! The built-in sample family: María's and Pedro's branches, three
//! generations, registered in a fixed order.

use crate::error::FamilyResult;
use crate::model::{Gender, Id, Person};
use crate::ops::{person_ops, registry_ops, relationship_ops};
use crate::store::FamilyTree;

/// Members reported on when the demo runs against the sample family.
pub const DEFAULT_MEMBERS: &[&str] = &["Juanito", "Anita", "Lucía", "Pablo"];

fn living(tree: &mut FamilyTree, name: &str, gender: Gender, birth: &str) -> FamilyResult<Id<Person>> {
    let id = person_ops::create_person(tree, name, gender, Some(birth))?;
    registry_ops::add_person(tree, id)?;
    Ok(id)
}

fn deceased(
    tree: &mut FamilyTree,
    name: &str,
    gender: Gender,
    birth: &str,
    death: &str,
) -> FamilyResult<Id<Person>> {
    let id = person_ops::create_deceased_person(tree, name, gender, Some(birth), Some(death))?;
    registry_ops::add_person(tree, id)?;
    Ok(id)
}

fn children_of(tree: &mut FamilyTree, parents: &[Id<Person>], children: &[Id<Person>]) -> FamilyResult<()> {
    for parent in parents {
        for child in children {
            relationship_ops::add_child(tree, *parent, *child)?;
        }
    }
    Ok(())
}

fn siblings(tree: &mut FamilyTree, group: &[Id<Person>]) -> FamilyResult<()> {
    for (i, a) in group.iter().enumerate() {
        for b in &group[i + 1..] {
            relationship_ops::add_sibling(tree, *a, *b)?;
        }
    }
    Ok(())
}

pub fn build() -> FamilyResult<FamilyTree> {
    use Gender::{Female, Male};
    let mut tree = FamilyTree::new();
    let t = &mut tree;

    // María's side
    let maria = living(t, "María", Female, "12/05/1970")?;
    let ana = deceased(t, "Ana", Female, "10/03/1940", "15/06/2000")?;
    let juan = deceased(t, "Juan", Male, "25/08/1935", "20/11/1995")?;
    let laura = living(t, "Laura", Female, "08/07/1975")?;
    let carlos = living(t, "Carlos", Male, "18/02/1978")?;
    living(t, "Sofía", Female, "20/10/1945")?;
    living(t, "Luis", Male, "15/03/1948")?;
    let lucia = living(t, "Lucía", Female, "18/05/2000")?;
    let miguel = living(t, "Miguel", Male, "12/08/1998")?;
    let pablo = living(t, "Pablo", Male, "30/11/2002")?;

    siblings(t, &[maria, laura, carlos])?;
    relationship_ops::set_partner(t, ana, juan)?;
    children_of(t, &[ana, juan], &[maria, laura, carlos])?;
    relationship_ops::add_child(t, laura, lucia)?;
    children_of(t, &[carlos], &[miguel, pablo])?;

    // Pedro's side
    let pedro = living(t, "Pedro", Male, "18/02/1968")?;
    let isabel = living(t, "Isabel", Female, "12/12/1938")?;
    let antonio = deceased(t, "Antonio", Male, "15/07/1936", "05/03/1998")?;
    let alberto = living(t, "Alberto", Male, "05/01/1973")?;
    let elena = living(t, "Elena", Female, "22/04/1976")?;
    deceased(t, "Manuel", Male, "10/05/1900", "30/06/1985")?;
    deceased(t, "Carmen", Female, "15/08/1905", "10/09/1988")?;
    living(t, "Clara", Female, "20/03/1940")?;
    living(t, "Javier", Male, "10/06/1942")?;
    let raquel = living(t, "Raquel", Female, "05/09/1990")?;

    siblings(t, &[pedro, alberto, elena])?;
    relationship_ops::set_partner(t, isabel, antonio)?;
    children_of(t, &[isabel, antonio], &[pedro, alberto, elena])?;
    relationship_ops::add_child(t, elena, raquel)?;

    // María and Pedro's children
    relationship_ops::set_partner(t, maria, pedro)?;
    let juanito = living(t, "Juanito", Male, "10/04/1990")?;
    let anita = living(t, "Anita", Female, "20/09/1992")?;
    let marcos = living(t, "Marcos", Male, "25/01/1994")?;
    children_of(t, &[maria, pedro], &[juanito, anita, marcos])?;
    siblings(t, &[juanito, anita, marcos])?;

    log::info!("built sample family with {} members", tree.registry.len());
    Ok(tree)
}
