pub mod person_ops;
pub mod registry_ops;
pub mod relationship_ops;
