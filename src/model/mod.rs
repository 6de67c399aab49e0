pub mod dates;
pub mod family;
pub mod ids;
pub mod person;

// Re-exports for convenience
pub use dates::{format_date, parse_date, parse_optional_date};
pub use family::{ExtendedFamily, Grandparents, ImmediateFamily};
pub use ids::Id;
pub use person::{Gender, LifeStatus, Person};
