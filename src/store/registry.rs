use indexmap::IndexMap;
use std::collections::HashSet;

use crate::error::{FamilyError, FamilyResult};
use crate::model::{Id, Person};

/// Family membership: which nodes belong to the tree, keyed by name and
/// kept in registration order. The registry never touches relationship
/// edges.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    members: IndexMap<String, Id<Person>>,
    registered: HashSet<Id<Person>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` under `name`. Both the name and the node must be new
    /// to the registry.
    pub(crate) fn insert(&mut self, name: &str, id: Id<Person>) -> FamilyResult<()> {
        if self.members.contains_key(name) {
            return Err(FamilyError::AlreadyExists {
                entity_type: "Person".into(),
                identifier: name.to_string(),
            });
        }
        if self.registered.contains(&id) {
            return Err(FamilyError::AlreadyExists {
                entity_type: "Person".into(),
                identifier: id.to_string(),
            });
        }
        self.members.insert(name.to_string(), id);
        self.registered.insert(id);
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<Id<Person>> {
        self.members.get(name).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id<Person>> + '_ {
        self.members.values().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
