use thiserror::Error;

#[derive(Debug, Error)]
pub enum FamilyError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Unknown gender: {value}")]
    UnknownGender { value: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("{name} cannot die before being born")]
    DeathBeforeBirth { name: String },

    #[error("Month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u32 },

    #[error("A person cannot be their own {relation}")]
    SelfRelation { relation: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FamilyResult<T> = Result<T, FamilyError>;
