use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use uuid::Uuid;

/// Surrogate identifier for a node in the family graph.
///
/// Every relationship edge (parents, children, siblings, partner, past
/// partners) stores the other node's `Id<Person>` rather than a reference,
/// so the `PersonStore` arena owns all nodes and cycles such as mutual
/// partners need no shared ownership. Names are display attributes and may
/// repeat across trees; the id never does, so two nodes named "John" stay
/// distinct in the store even though the registry admits only one of them
/// by name. The phantom type keeps ids of different entity kinds apart.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell nodes apart in log output.
    pub fn short(&self) -> String {
        self.value.simple().to_string()[..8].to_string()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.short())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node;

    #[test]
    fn generated_ids_differ() {
        let a = Id::<Node>::generate();
        let b = Id::<Node>::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn same_uuid_means_same_node() {
        let uuid = Uuid::new_v4();
        assert_eq!(Id::<Node>::new(uuid), Id::<Node>::new(uuid));
    }

    #[test]
    fn short_form_is_eight_hex_digits() {
        let id = Id::<Node>::generate();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.value.simple().to_string().starts_with(&short));
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let id = Id::<Node>::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.value));
        let back: Id<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
