pub mod person_store;
pub mod registry;

pub use person_store::PersonStore;
pub use registry::Registry;

use crate::model::Person;

/// The in-memory family: every person node plus the registry of members.
/// Ops and queries take this the way repository functions take a
/// connection.
///
/// Both halves are read-only from outside the crate: nodes and members only
/// enter through `ops`, which keeps edges reciprocal and membership unique.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    pub(crate) people: PersonStore,
    pub(crate) registry: Registry,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &PersonStore {
        &self.people
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registered members, in registration order.
    pub fn members(&self) -> impl Iterator<Item = &Person> {
        self.registry
            .ids()
            .filter_map(move |id| self.people.find_by_id(id))
    }
}
