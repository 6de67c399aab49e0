use crate::error::{FamilyError, FamilyResult};
use crate::model::{Id, Person};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> FamilyResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(FamilyError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a calendar month number (1-12).
pub fn month(value: u32) -> FamilyResult<u32> {
    if (1..=12).contains(&value) {
        Ok(value)
    } else {
        Err(FamilyError::InvalidMonth { month: value })
    }
}

/// Validates that a relationship joins two different people.
pub fn distinct(a: Id<Person>, b: Id<Person>, relation: &str) -> FamilyResult<()> {
    if a == b {
        Err(FamilyError::SelfRelation {
            relation: relation.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("María", "name").unwrap(), "María");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  Pedro  ", "name").unwrap(), "Pedro");
    }

    #[test]
    fn non_blank_rejects_empty() {
        assert!(non_blank("", "name").is_err());
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(matches!(
            non_blank("   ", "name"),
            Err(FamilyError::BlankField { .. })
        ));
    }

    #[test]
    fn month_accepts_bounds() {
        assert_eq!(month(1).unwrap(), 1);
        assert_eq!(month(12).unwrap(), 12);
    }

    #[test]
    fn month_rejects_zero_and_thirteen() {
        assert!(matches!(month(0), Err(FamilyError::InvalidMonth { month: 0 })));
        assert!(month(13).is_err());
    }

    #[test]
    fn distinct_rejects_same_id() {
        let id = Id::<Person>::generate();
        assert!(matches!(
            distinct(id, id, "sibling"),
            Err(FamilyError::SelfRelation { .. })
        ));
    }

    #[test]
    fn distinct_accepts_different_ids() {
        assert!(distinct(Id::generate(), Id::generate(), "partner").is_ok());
    }

    #[test]
    fn trim_optional_trims() {
        assert_eq!(trim_optional(Some("  3rd  ")), Some("3rd".to_string()));
    }

    #[test]
    fn trim_optional_returns_none_for_blank() {
        assert_eq!(trim_optional(Some("   ")), None);
    }

    #[test]
    fn trim_optional_returns_none_for_none() {
        assert_eq!(trim_optional(None), None);
    }
}
