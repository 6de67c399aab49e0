use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::Id;
use crate::error::FamilyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female, Gender::Other];

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Gender {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(FamilyError::UnknownGender {
                value: s.to_string(),
            }),
        }
    }
}

/// Whether a person is alive. `Deceased` is the deceased-person variant;
/// the death date may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum LifeStatus {
    Living,
    Deceased { death_date: Option<NaiveDate> },
}

/// A node in the family graph.
///
/// Relationship edges are stored as ids and can only be changed through
/// `ops::relationship_ops`, which keeps partner and sibling links symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Id<Person>,
    pub name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub status: LifeStatus,
    pub grade: Option<String>,
    pub(crate) mother: Option<Id<Person>>,
    pub(crate) father: Option<Id<Person>>,
    pub(crate) other_parents: Vec<Id<Person>>,
    pub(crate) children: Vec<Id<Person>>,
    pub(crate) siblings: Vec<Id<Person>>,
    pub(crate) partner: Option<Id<Person>>,
    pub(crate) past_partners: Vec<Id<Person>>,
}

impl Person {
    pub fn create(name: String, gender: Gender) -> Self {
        Self {
            id: Id::generate(),
            name,
            gender,
            birth_date: None,
            status: LifeStatus::Living,
            grade: None,
            mother: None,
            father: None,
            other_parents: Vec::new(),
            children: Vec::new(),
            siblings: Vec::new(),
            partner: None,
            past_partners: Vec::new(),
        }
    }

    pub fn create_deceased(name: String, gender: Gender, death_date: Option<NaiveDate>) -> Self {
        let mut p = Self::create(name, gender);
        p.status = LifeStatus::Deceased { death_date };
        p
    }

    pub fn is_deceased(&self) -> bool {
        matches!(self.status, LifeStatus::Deceased { .. })
    }

    pub fn death_date(&self) -> Option<NaiveDate> {
        match self.status {
            LifeStatus::Deceased { death_date } => death_date,
            LifeStatus::Living => None,
        }
    }

    /// Age at death as the difference of the birth and death years.
    /// Month and day are ignored, so the result can be one year above the
    /// calendar age. `None` for the living or when either date is unknown.
    pub fn age_at_death(&self) -> Option<i32> {
        let birth = self.birth_date?;
        let death = self.death_date()?;
        Some(death.year() - birth.year())
    }

    pub fn mother(&self) -> Option<Id<Person>> {
        self.mother
    }

    pub fn father(&self) -> Option<Id<Person>> {
        self.father
    }

    /// Parents of `Other` gender, in the order they were linked.
    pub fn other_parents(&self) -> &[Id<Person>] {
        &self.other_parents
    }

    /// Mother first, then father, then any other parents.
    pub fn parents(&self) -> Vec<Id<Person>> {
        self.mother
            .into_iter()
            .chain(self.father)
            .chain(self.other_parents.iter().copied())
            .collect()
    }

    pub fn children(&self) -> &[Id<Person>] {
        &self.children
    }

    pub fn siblings(&self) -> &[Id<Person>] {
        &self.siblings
    }

    pub fn partner(&self) -> Option<Id<Person>> {
        self.partner
    }

    pub fn past_partners(&self) -> &[Id<Person>] {
        &self.past_partners
    }
}
