pub mod birthday_queries;
pub mod family_queries;
pub mod registry_queries;
pub mod stats_queries;
pub mod tree_queries;
