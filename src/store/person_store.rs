use indexmap::IndexMap;

use crate::error::{FamilyError, FamilyResult};
use crate::model::{Id, Person};

/// Every person node, registered or not, keyed by id in creation order.
#[derive(Debug, Clone, Default)]
pub struct PersonStore {
    people: IndexMap<Id<Person>, Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new node. An id already in the store is never overwritten.
    pub(crate) fn insert(&mut self, person: Person) -> FamilyResult<Id<Person>> {
        let id = person.id;
        if self.people.contains_key(&id) {
            return Err(FamilyError::AlreadyExists {
                entity_type: "Person".into(),
                identifier: id.to_string(),
            });
        }
        self.people.insert(id, person);
        Ok(id)
    }

    pub fn find_by_id(&self, id: Id<Person>) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but an unknown id is an error.
    pub fn require(&self, id: Id<Person>) -> FamilyResult<&Person> {
        self.people.get(&id).ok_or_else(|| not_found(id))
    }

    pub(crate) fn require_mut(&mut self, id: Id<Person>) -> FamilyResult<&mut Person> {
        self.people.get_mut(&id).ok_or_else(|| not_found(id))
    }

    /// Name of a node known to exist. Edges only ever point at stored
    /// nodes, so a dangling id renders as its short form.
    pub fn name_of(&self, id: Id<Person>) -> String {
        self.people
            .get(&id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.short())
    }

    pub fn names_of(&self, ids: &[Id<Person>]) -> Vec<String> {
        ids.iter().map(|id| self.name_of(*id)).collect()
    }

    pub fn all(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

fn not_found(id: Id<Person>) -> FamilyError {
    FamilyError::NotFound {
        entity_type: "Person".into(),
        id: id.to_string(),
    }
}
