//! Loading a family description from JSON.
//!
//! This is where untyped data enters: names, genders and dates arrive as
//! text and are checked here before any node is created or linked.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FamilyError, FamilyResult};
use crate::model::{Gender, Id, Person};
use crate::ops::{person_ops, registry_ops, relationship_ops};
use crate::store::FamilyTree;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FamilyDocument {
    #[serde(default)]
    people: Vec<PersonEntry>,
    #[serde(default)]
    siblings: Vec<(String, String)>,
    #[serde(default)]
    children: Vec<ChildEntry>,
    #[serde(default)]
    partners: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonEntry {
    name: String,
    gender: String,
    birth_date: Option<String>,
    death_date: Option<String>,
    #[serde(default)]
    deceased: bool,
    grade: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChildEntry {
    parent: String,
    child: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub people: usize,
    pub deceased: usize,
    pub children: usize,
    pub siblings: usize,
    pub partners: usize,
}

pub fn import_file(path: &Path) -> FamilyResult<(FamilyTree, ImportStats)> {
    let json = std::fs::read_to_string(path)?;
    let result = import_str(&json)?;
    log::info!(
        "imported {} people from {}",
        result.1.people,
        path.display()
    );
    Ok(result)
}

pub fn import_str(json: &str) -> FamilyResult<(FamilyTree, ImportStats)> {
    let doc: FamilyDocument = serde_json::from_str(json)?;
    let mut tree = FamilyTree::new();
    let mut stats = ImportStats::default();

    for entry in &doc.people {
        let gender: Gender = entry.gender.parse()?;
        let id = if entry.deceased || entry.death_date.is_some() {
            stats.deceased += 1;
            person_ops::create_deceased_person(
                &mut tree,
                &entry.name,
                gender,
                entry.birth_date.as_deref(),
                entry.death_date.as_deref(),
            )?
        } else {
            person_ops::create_person(&mut tree, &entry.name, gender, entry.birth_date.as_deref())?
        };
        if entry.grade.is_some() {
            person_ops::set_grade(&mut tree, id, entry.grade.as_deref())?;
        }
        registry_ops::add_person(&mut tree, id)?;
        stats.people += 1;
    }

    for (a, b) in &doc.siblings {
        let (a, b) = (member(&tree, a)?, member(&tree, b)?);
        relationship_ops::add_sibling(&mut tree, a, b)?;
        stats.siblings += 1;
    }

    for entry in &doc.children {
        let parent = member(&tree, &entry.parent)?;
        let child = member(&tree, &entry.child)?;
        relationship_ops::add_child(&mut tree, parent, child)?;
        stats.children += 1;
    }

    for (a, b) in &doc.partners {
        let (a, b) = (member(&tree, a)?, member(&tree, b)?);
        relationship_ops::set_partner(&mut tree, a, b)?;
        stats.partners += 1;
    }

    log::debug!("import stats: {:?}", stats);
    Ok((tree, stats))
}

fn member(tree: &FamilyTree, name: &str) -> FamilyResult<Id<Person>> {
    let trimmed = name.trim();
    tree.registry
        .find_by_name(trimmed)
        .ok_or_else(|| FamilyError::NotFound {
            entity_type: "Person".into(),
            id: trimmed.to_string(),
        })
}
